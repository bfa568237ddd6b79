use std::path::Path;

use tracing::info;

use crate::{
    cli::ConfigCmd,
    config::{mask_api_key, Config, DEFAULT_TIMEZONE},
    error::{Result, SportyError},
};

/// `config` subcommands. `effective` is the loaded configuration with
/// environment overrides; writes go to the file at `path` only.
pub fn handle_config(cmd: ConfigCmd, effective: &Config, path: &Path) -> Result<String> {
    match cmd {
        ConfigCmd::SetApiKey { api_key } => {
            let api_key = api_key.trim();
            if api_key.is_empty() {
                return Err(SportyError::usage("API key must not be empty"));
            }
            let mut config = Config::read(path)?;
            config.api_key = Some(api_key.to_string());
            config.save(path)?;
            info!("Saved API key to {}", path.display());
            Ok(format!("API key saved to {}", path.display()))
        }
        ConfigCmd::GetApiKey => Ok(match &effective.api_key {
            Some(key) => mask_api_key(key),
            None => "No API key configured.".to_string(),
        }),
        ConfigCmd::Show => {
            let lines = [
                format!("config file:  {}", path.display()),
                format!(
                    "api_key:      {}",
                    effective
                        .api_key
                        .as_deref()
                        .map(mask_api_key)
                        .unwrap_or_else(|| "(not set)".to_string())
                ),
                format!("base_url:     {}", effective.base_url()),
                format!("timeout_secs: {}", effective.timeout().as_secs()),
                format!(
                    "timezone:     {}",
                    effective.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
                ),
            ];
            Ok(lines.join("\n"))
        }
    }
}
