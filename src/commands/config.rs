use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    let config = config.masked();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&config)?);
        }
        OutputFormat::Text => {
            println!("{}", "Reamaze Configuration".bold());
            println!();

            let unset = || "(unset)".dimmed().to_string();
            println!("  email: {}", config.email.clone().unwrap_or_else(unset));
            println!("  api_token: {}", config.api_token.clone().unwrap_or_else(unset));
            println!("  brand: {}", config.brand.clone().unwrap_or_else(unset));
            if let Some(api_root) = &config.api_root {
                println!("  api_root: {}", api_root);
            }
            println!("  log_level: {}", config.log_level.as_filter());
        }
    }

    Ok(())
}
