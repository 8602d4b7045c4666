//! Customer contacts

use serde_json::{Value, json};

use crate::action::base::{BaseAction, Headers, RequestBody};
use crate::action::{Action, Params, copy_present, query_pairs, required_str};
use crate::error::Result;

#[derive(Debug)]
pub struct ListContacts {
    base: BaseAction,
}

impl ListContacts {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for ListContacts {
    fn name(&self) -> &'static str {
        "contact_list"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        let query = query_pairs(params, &["q", "page"]);
        self.base.api_get("/contacts", &Headers::new(), Some(&query))
    }
}

#[derive(Debug)]
pub struct CreateContact {
    base: BaseAction,
}

impl CreateContact {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for CreateContact {
    fn name(&self) -> &'static str {
        "contact_create"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        required_str(params, "email")?;
        let mut contact = Params::new();
        copy_present(params, &["email", "name", "friendly_name"], &mut contact);
        let payload = json!({ "contact": contact });
        self.base.api_post("/contacts", &Headers::new(), &RequestBody::Json(payload))
    }
}
