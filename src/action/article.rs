//! Knowledge base articles

use serde_json::{Value, json};

use crate::action::base::{BaseAction, Headers, RequestBody};
use crate::action::{Action, Params, copy_present, path_segment, query_pairs, required_str, slug_param};
use crate::error::Result;

/// Build the `{"article": {...}}` payload shared by create and update
fn article_payload(params: &Params) -> Value {
    let mut article = Params::new();
    copy_present(params, &["title", "body", "status"], &mut article);
    if let Some(topic) = slug_param(params, "topic") {
        article.insert("topic".to_string(), Value::String(topic));
    }
    json!({ "article": article })
}

#[derive(Debug)]
pub struct ListArticles {
    base: BaseAction,
}

impl ListArticles {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for ListArticles {
    fn name(&self) -> &'static str {
        "article_list"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        let mut query = query_pairs(params, &["q", "page"]);
        if let Some(topic) = slug_param(params, "topic") {
            query.push(("topic".to_string(), topic));
        }
        self.base.api_get("/articles", &Headers::new(), Some(&query))
    }
}

#[derive(Debug)]
pub struct GetArticle {
    base: BaseAction,
}

impl GetArticle {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for GetArticle {
    fn name(&self) -> &'static str {
        "article_get"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        required_str(params, "slug")?;
        let slug = slug_param(params, "slug").unwrap_or_default();
        self.base.api_get(&format!("/articles/{}", path_segment(&slug)), &Headers::new(), None)
    }
}

#[derive(Debug)]
pub struct CreateArticle {
    base: BaseAction,
}

impl CreateArticle {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for CreateArticle {
    fn name(&self) -> &'static str {
        "article_create"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        required_str(params, "title")?;
        required_str(params, "body")?;
        let payload = article_payload(params);
        self.base.api_post("/articles", &Headers::new(), &RequestBody::Json(payload))
    }
}

#[derive(Debug)]
pub struct UpdateArticle {
    base: BaseAction,
}

impl UpdateArticle {
    pub fn new(base: BaseAction) -> Self {
        Self { base }
    }
}

impl Action for UpdateArticle {
    fn name(&self) -> &'static str {
        "article_update"
    }

    fn run(&self, params: &Params) -> Result<Value> {
        required_str(params, "slug")?;
        let slug = slug_param(params, "slug").unwrap_or_default();
        let payload = article_payload(params);
        self.base.api_put(
            &format!("/articles/{}", path_segment(&slug)),
            &Headers::new(),
            &RequestBody::Json(payload),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_payload_slugs_topic_and_skips_absent() {
        let params = json!({"title": "Refunds", "body": "How to", "topic": "Billing Help"});
        let payload = article_payload(params.as_object().unwrap());
        assert_eq!(
            payload,
            json!({"article": {"title": "Refunds", "body": "How to", "topic": "billing-help"}})
        );
    }
}
