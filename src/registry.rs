//! Name → action lookup
//!
//! Lets a host build any bundled action from its name and the config mapping.

use crate::action::article::{CreateArticle, GetArticle, ListArticles, UpdateArticle};
use crate::action::base::BaseAction;
use crate::action::contact::{CreateContact, ListContacts};
use crate::action::conversation::{CreateConversation, GetConversation, ListConversations, UpdateConversation};
use crate::action::message::{CreateMessage, ListMessages};
use crate::action::{Action, Params};
use crate::error::{Error, Result};

type Constructor = fn(BaseAction) -> Box<dyn Action>;

const ACTIONS: &[(&str, Constructor)] = &[
    ("article_list", |base| Box::new(ListArticles::new(base))),
    ("article_get", |base| Box::new(GetArticle::new(base))),
    ("article_create", |base| Box::new(CreateArticle::new(base))),
    ("article_update", |base| Box::new(UpdateArticle::new(base))),
    ("contact_list", |base| Box::new(ListContacts::new(base))),
    ("contact_create", |base| Box::new(CreateContact::new(base))),
    ("conversation_list", |base| Box::new(ListConversations::new(base))),
    ("conversation_get", |base| Box::new(GetConversation::new(base))),
    ("conversation_create", |base| Box::new(CreateConversation::new(base))),
    ("conversation_update", |base| Box::new(UpdateConversation::new(base))),
    ("message_list", |base| Box::new(ListMessages::new(base))),
    ("message_create", |base| Box::new(CreateMessage::new(base))),
];

/// All registered action names, in registration order
pub fn names() -> impl Iterator<Item = &'static str> {
    ACTIONS.iter().map(|(name, _)| *name)
}

/// Check if an action name is registered
pub fn contains(name: &str) -> bool {
    ACTIONS.iter().any(|(n, _)| *n == name)
}

/// Build the named action against `https://{brand}.reamaze.com/api/v1`
pub fn build(name: &str, config: &Params) -> Result<Box<dyn Action>> {
    let constructor = lookup(name)?;
    Ok(constructor(BaseAction::new(config)?))
}

/// Build the named action against an explicit API root
pub fn build_with_api_root(name: &str, config: &Params, api_root: &str) -> Result<Box<dyn Action>> {
    let constructor = lookup(name)?;
    Ok(constructor(BaseAction::with_api_root(config, api_root)?))
}

fn lookup(name: &str) -> Result<Constructor> {
    ACTIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, constructor)| *constructor)
        .ok_or_else(|| Error::UnknownAction(name.to_string()))
}
