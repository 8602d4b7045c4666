use colored::*;
use eyre::{Context, Result};
use serde_json::Value;

use reamaze::{Params, registry};

use crate::cli::OutputFormat;
use crate::config::Config;

pub fn run(action: &str, params: &[String], format: OutputFormat, config: &Config) -> Result<()> {
    let params = parse_params(params)?;
    let action_config = config.action_config();

    let action = match &config.api_root {
        Some(api_root) => registry::build_with_api_root(action, &action_config, api_root),
        None => registry::build(action, &action_config),
    }
    .context("Failed to set up action")?;

    log::info!("Running action {} with {} params", action.name(), params.len());
    let result = action
        .run(&params)
        .with_context(|| format!("Action {} failed", action.name()))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&result)?);
        }
        OutputFormat::Text => {
            println!("{} {}", "✓".green(), action.name().cyan());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

/// Parse `key=value` pairs; numbers and booleans are passed typed
pub fn parse_params(raw: &[String]) -> Result<Params> {
    let mut params = Params::new();
    for pair in raw {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| eyre::eyre!("Invalid parameter '{}': expected key=value", pair))?;
        if key.is_empty() {
            eyre::bail!("Invalid parameter '{}': empty key", pair);
        }
        params.insert(key.to_string(), parse_value(value));
    }
    Ok(params)
}

fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Number(_) | Value::Bool(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}
