//! Shared plumbing for Reamaze actions
//!
//! Holds the credentials, derives the per-brand API root, and issues
//! blocking requests with HTTP Basic auth. Each verb has its own set of
//! accepted statuses; POST logs failures but hands back the body anyway.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use ureq::http::Response;
use ureq::typestate::WithBody;
use ureq::{Agent, Body, RequestBuilder};

use crate::action::{Action, Params};
use crate::error::{Error, Result};

/// Per-call request headers
pub type Headers = BTreeMap<String, String>;

/// Query parameters, sent in order
pub type Query = Vec<(String, String)>;

/// Body of a POST or PUT
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
    Json(Value),
}

pub struct BaseAction {
    email: String,
    token: String,
    brand: String,
    api_root: String,
    headers: Headers,
    authorization: String,
    agent: Agent,
}

impl fmt::Debug for BaseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseAction")
            .field("email", &self.email)
            .field("token", &"***")
            .field("brand", &self.brand)
            .field("api_root", &self.api_root)
            .finish()
    }
}

/// Non-empty string config value, or the error naming `key`
fn required_config<'a>(config: &'a Params, key: &'static str) -> Result<&'a str> {
    match config.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        _ => Err(Error::MissingConfig(key)),
    }
}

fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

impl BaseAction {
    /// Validate `email`, `brand` and `api_token` (in that order) and derive
    /// `https://{brand}.reamaze.com/api/v1`
    pub fn new(config: &Params) -> Result<Self> {
        let brand = required_config(config, "brand").unwrap_or_default();
        let api_root = format!("https://{}.reamaze.com/api/v1", brand);
        Self::with_api_root(config, api_root)
    }

    /// Same validation as [`BaseAction::new`] but against an explicit API root
    pub fn with_api_root(config: &Params, api_root: impl Into<String>) -> Result<Self> {
        let email = required_config(config, "email")?;
        let brand = required_config(config, "brand")?;
        let token = required_config(config, "api_token")?;

        let credentials = STANDARD.encode(format!("{}:{}", email, token));
        let agent: Agent = Agent::config_builder().http_status_as_error(false).build().into();

        let api_root = api_root.into();
        log::debug!("Reamaze action for brand '{}' using {}", brand, api_root);

        Ok(Self {
            email: email.to_string(),
            token: token.to_string(),
            brand: brand.to_string(),
            api_root,
            headers: Headers::from([("Accept".to_string(), "application/json".to_string())]),
            authorization: format!("Basic {}", credentials),
            agent,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Default headers merged with `extra`; a caller header replaces a default
    /// of the same name regardless of case
    pub fn merge_headers(&self, extra: &Headers) -> Headers {
        let mut merged = self.headers.clone();
        for (name, value) in extra {
            merged.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
            merged.insert(name.clone(), value.clone());
        }
        merged
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_root, endpoint)
    }

    fn prepare<B>(&self, mut request: RequestBuilder<B>, headers: &Headers) -> RequestBuilder<B> {
        request = request.header("Authorization", self.authorization.as_str());
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request
    }

    /// GET `endpoint`; fails on 4xx/5xx, logs anything other than 200
    pub fn api_get(&self, endpoint: &str, headers: &Headers, params: Option<&Query>) -> Result<Value> {
        let url = self.url(endpoint);
        let mut request = self.prepare(self.agent.get(url.as_str()), &self.merge_headers(headers));
        if let Some(params) = params {
            request = request.query_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        let (status, body) = read_response(request.call()?)?;
        if status != 200 {
            log::error!("GET failed. HTTP status: {}, Body: {}.", status, body);
        }

        raise_for_status("GET", &url, status, &body)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST `endpoint`; logs anything other than 200/201 but never fails on status
    pub fn api_post(&self, endpoint: &str, headers: &Headers, body: &RequestBody) -> Result<Value> {
        let url = self.url(endpoint);
        let request = self.prepare(self.agent.post(url.as_str()), &self.with_content_type(headers, body));

        let (status, text) = read_response(send(request, body)?)?;
        if status != 200 && status != 201 {
            log::error!("POST failed. HTTP status: {}, Body: {}.", status, text);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// PUT `endpoint`; fails on 4xx/5xx, logs anything other than 200/202
    pub fn api_put(&self, endpoint: &str, headers: &Headers, body: &RequestBody) -> Result<Value> {
        let url = self.url(endpoint);
        let request = self.prepare(self.agent.put(url.as_str()), &self.with_content_type(headers, body));

        let (status, text) = read_response(send(request, body)?)?;
        if status != 200 && status != 202 {
            log::error!("PUT failed. HTTP status: {}, Body: {}.", status, text);
        }

        raise_for_status("PUT", &url, status, &text)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn with_content_type(&self, headers: &Headers, body: &RequestBody) -> Headers {
        let mut merged = self.merge_headers(headers);
        let has_content_type = merged.keys().any(|k| k.eq_ignore_ascii_case("content-type"));
        if matches!(body, RequestBody::Json(_)) && !has_content_type {
            merged.insert("Content-Type".to_string(), "application/json".to_string());
        }
        merged
    }

    /// Lower-case and hyphenate a display name; empty or absent yields `None`
    pub fn convert_slug(slug_name: Option<&str>) -> Option<String> {
        slug_name.filter(|s| !s.is_empty()).map(slugify)
    }
}

impl Action for BaseAction {
    fn name(&self) -> &'static str {
        "base"
    }

    fn run(&self, _params: &Params) -> Result<Value> {
        Err(Error::NotImplemented)
    }
}

fn send(request: RequestBuilder<WithBody>, body: &RequestBody) -> Result<Response<Body>> {
    let response = match body {
        RequestBody::Empty => request.send_empty()?,
        RequestBody::Form(pairs) => request.send_form(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))?,
        RequestBody::Json(value) => request.send(serde_json::to_vec(value)?.as_slice())?,
    };
    Ok(response)
}

fn read_response(mut response: Response<Body>) -> Result<(u16, String)> {
    let status = response.status().as_u16();
    // no size cap on successful bodies
    let body = response.body_mut().with_config().limit(u64::MAX).read_to_string()?;
    Ok((status, body))
}

fn raise_for_status(method: &'static str, url: &str, status: u16, body: &str) -> Result<()> {
    if (400..600).contains(&status) {
        return Err(Error::HttpStatus {
            method,
            url: url.to_string(),
            status,
            body: body.to_string(),
        });
    }
    Ok(())
}
