//! Building blocks for automation actions that talk to the Reamaze API.
//!
//! [`BaseAction`] owns the credentials and the per-brand API root and exposes
//! blocking GET/POST/PUT helpers. Concrete actions compose it and implement
//! the [`Action`] contract; [`registry`] builds them by name.

pub mod action;
pub mod error;
pub mod registry;

#[cfg(test)]
mod testlog;

pub use action::base::{BaseAction, Headers, Query, RequestBody};
pub use action::{Action, Params};
pub use error::{Error, Result};
