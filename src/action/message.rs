//! Messages within conversations

use serde_json::{Value, json};

use crate::action::base::{BaseAction, Headers, RequestBody};
use crate::action::{Action, Params, copy_present, optional_str, path_segment, query_pairs, required_str};
use crate::error::Result;

#[derive(Debug)]
pub struct ListMessages {
    base: BaseAction,
}

impl ListMessages {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for ListMessages {
    fn name(&self) -> &'static str {
        "message_list"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        let endpoint = match optional_str(params, "slug") {
            Some(slug) => format!("/conversations/{}/messages", path_segment(slug)),
            None => "/messages".to_string(),
        };
        let query = query_pairs(params, &["visibility", "page"]);
        self.base.api_get(&endpoint, &Headers::new(), Some(&query))
    }
}

#[derive(Debug)]
pub struct CreateMessage {
    base: BaseAction,
}

impl CreateMessage {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for CreateMessage {
    fn name(&self) -> &'static str {
        "message_create"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        let slug = required_str(params, "slug")?;
        required_str(params, "body")?;

        let mut message = Params::new();
        copy_present(params, &["body", "visibility"], &mut message);

        let payload = json!({ "message": message });
        self.base.api_post(
            &format!("/conversations/{}/messages", path_segment(slug)),
            &Headers::new(),
            &RequestBody::Json(payload),
        )
    }
}
