use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;

pub const TEMPLATE_TOKEN: &str = "xoxb-REPLACE_WITH_YOUR_TOKEN";
pub const TEMPLATE_CHANNEL: &str = "CXXXXXXXX";

const DEFAULT_LOG_DIRECTORY: &str = "~/Desktop";

/// Run settings loaded from the JSON settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub slack_token: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub log_directory: String,
}

impl Settings {
    fn template() -> Self {
        Self {
            slack_token: TEMPLATE_TOKEN.to_string(),
            channel_name: TEMPLATE_CHANNEL.to_string(),
            log_directory: DEFAULT_LOG_DIRECTORY.to_string(),
        }
    }

    /// Trim the required fields and reject empty or placeholder values.
    fn validate(mut self) -> Result<Self, ConfigError> {
        self.slack_token = self.slack_token.trim().to_string();
        self.channel_name = self.channel_name.trim().to_string();

        if self.slack_token.is_empty() {
            return Err(ConfigError::MissingField("slack_token"));
        }
        if self.channel_name.is_empty() {
            return Err(ConfigError::MissingField("channel_name"));
        }
        if self.slack_token == TEMPLATE_TOKEN {
            return Err(ConfigError::Placeholder("slack_token"));
        }
        if self.channel_name == TEMPLATE_CHANNEL {
            return Err(ConfigError::Placeholder("channel_name"));
        }

        Ok(self)
    }
}

/// Write the placeholder template if no settings file exists yet.
/// Returns `Ok(false)` when a template was just created: the user must
/// edit it and relaunch the render.
pub fn ensure_config_exists(path: &Path) -> Result<bool, ConfigError> {
    if path.is_file() {
        return Ok(true);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let template = serde_json::to_string_pretty(&Settings::template())?;
    fs::write(path, template)?;

    tracing::info!("Config created at {}", path.display());
    tracing::info!("Please edit the file and relaunch the render");
    Ok(false)
}

/// Load and validate the settings file.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Err(ConfigError::Empty);
    }

    let value: serde_json::Value = serde_json::from_str(&raw)?;
    if !value.is_object() {
        return Err(ConfigError::NotAnObject);
    }

    let settings: Settings = serde_json::from_value(value)?;
    settings.validate()
}
