//! Action contract and parameter helpers
//!
//! A hosting runner builds an action per invocation and calls [`Action::run`]
//! with the invocation's parameters as a JSON object.

use serde_json::Value;

use crate::error::{Error, Result};

pub mod article;
pub mod base;
pub mod contact;
pub mod conversation;
pub mod message;

/// Action parameters (and the raw config mapping) as handed over by the host
pub type Params = serde_json::Map<String, Value>;

/// Executable entry point every action provides
pub trait Action {
    /// Registry name (e.g. "conversation_get")
    fn name(&self) -> &'static str;

    /// Execute the action and return the API's JSON response
    fn run(&self, params: &Params) -> Result<Value>;
}

/// Non-empty string parameter, or a missing-parameter error naming `key`
pub fn required_str<'a>(params: &'a Params, key: &str) -> Result<&'a str> {
    optional_str(params, key).ok_or_else(|| Error::MissingParameter(key.to_string()))
}

/// Non-empty string parameter, if present
pub fn optional_str<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Render a scalar as query text; null, arrays and objects yield `None`
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Collect the listed keys that are present as query pairs, in `keys` order
pub fn query_pairs(params: &Params, keys: &[&str]) -> base::Query {
    keys.iter()
        .filter_map(|key| {
            params
                .get(*key)
                .and_then(scalar_text)
                .map(|text| (key.to_string(), text))
        })
        .collect()
}

/// Copy the listed keys that are present and non-null into `target`
pub fn copy_present(params: &Params, keys: &[&str], target: &mut Params) {
    for key in keys {
        match params.get(*key) {
            None | Some(Value::Null) => {}
            Some(value) => {
                target.insert(key.to_string(), value.clone());
            }
        }
    }
}

/// Percent-encode a single path segment; `/`, `?`, `&` and spaces included
pub fn path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Slug-normalized string parameter, if present
pub fn slug_param(params: &Params, key: &str) -> Option<String> {
    base::BaseAction::convert_slug(optional_str(params, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_required_str_present() {
        let p = params(json!({"slug": "abc"}));
        assert_eq!(required_str(&p, "slug").unwrap(), "abc");
    }

    #[test]
    fn test_required_str_missing_or_empty() {
        let p = params(json!({"slug": ""}));
        let err = required_str(&p, "slug").unwrap_err();
        assert_eq!(err.to_string(), "Missing \"slug\" parameter");
        assert!(required_str(&p, "other").is_err());
    }

    #[test]
    fn test_query_pairs_renders_scalars_and_skips_null() {
        let p = params(json!({"q": "refund", "page": 2, "archived": false, "tag": null}));
        let query = query_pairs(&p, &["page", "q", "tag", "archived", "absent"]);
        assert_eq!(
            query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("q".to_string(), "refund".to_string()),
                ("archived".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_copy_present() {
        let p = params(json!({"name": "Jane", "friendly_name": null, "status": 1}));
        let mut target = Params::new();
        copy_present(&p, &["name", "friendly_name", "status"], &mut target);
        assert_eq!(Value::Object(target), json!({"name": "Jane", "status": 1}));
    }

    #[test]
    fn test_slug_param() {
        let p = params(json!({"topic": "Getting Started"}));
        assert_eq!(slug_param(&p, "topic"), Some("getting-started".to_string()));
        assert_eq!(slug_param(&p, "category"), None);
    }

    #[test]
    fn test_path_segment_encodes_reserved_characters() {
        assert_eq!(path_segment("abc123"), "abc123");
        assert_eq!(path_segment("abc 123"), "abc%20123");
        assert_eq!(path_segment("q&a-/-billing?"), "q%26a-%2F-billing%3F");
    }
}
