pub mod completions;
pub mod config;
pub mod list;
pub mod run;
