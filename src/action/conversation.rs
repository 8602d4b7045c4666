//! Conversations (support threads)

use serde_json::{Value, json};

use crate::action::base::{BaseAction, Headers, RequestBody};
use crate::action::{Action, Params, copy_present, optional_str, path_segment, query_pairs, required_str, slug_param};
use crate::error::Result;

#[derive(Debug)]
pub struct ListConversations {
    base: BaseAction,
}

impl ListConversations {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for ListConversations {
    fn name(&self) -> &'static str {
        "conversation_list"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        let mut query = query_pairs(params, &["filter", "for", "sort", "tag", "page"]);
        if let Some(category) = slug_param(params, "category") {
            query.push(("category".to_string(), category));
        }
        self.base.api_get("/conversations", &Headers::new(), Some(&query))
    }
}

#[derive(Debug)]
pub struct GetConversation {
    base: BaseAction,
}

impl GetConversation {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for GetConversation {
    fn name(&self) -> &'static str {
        "conversation_get"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        let slug = required_str(params, "slug")?;
        self.base.api_get(&format!("/conversations/{}", path_segment(slug)), &Headers::new(), None)
    }
}

#[derive(Debug)]
pub struct CreateConversation {
    base: BaseAction,
}

impl CreateConversation {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for CreateConversation {
    fn name(&self) -> &'static str {
        "conversation_create"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        let subject = required_str(params, "subject")?;
        let body = required_str(params, "body")?;
        let email = required_str(params, "user_email")?;

        let mut user = Params::new();
        user.insert("email".to_string(), Value::String(email.to_string()));
        if let Some(name) = optional_str(params, "user_name") {
            user.insert("name".to_string(), Value::String(name.to_string()));
        }

        let mut conversation = Params::new();
        conversation.insert("subject".to_string(), Value::String(subject.to_string()));
        if let Some(category) = slug_param(params, "category") {
            conversation.insert("category".to_string(), Value::String(category));
        }
        conversation.insert("message".to_string(), json!({ "body": body }));
        conversation.insert("user".to_string(), Value::Object(user));

        let payload = json!({ "conversation": conversation });
        self.base
            .api_post("/conversations", &Headers::new(), &RequestBody::Json(payload))
    }
}

#[derive(Debug)]
pub struct UpdateConversation {
    base: BaseAction,
}

impl UpdateConversation {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for UpdateConversation {
    fn name(&self) -> &'static str {
        "conversation_update"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        let slug = required_str(params, "slug")?;

        let mut conversation = Params::new();
        copy_present(params, &["status", "tag_list"], &mut conversation);
        if let Some(category) = slug_param(params, "category") {
            conversation.insert("category".to_string(), Value::String(category));
        }

        let payload = json!({ "conversation": conversation });
        self.base.api_put(
            &format!("/conversations/{}", path_segment(slug)),
            &Headers::new(),
            &RequestBody::Json(payload),
        )
    }
}
