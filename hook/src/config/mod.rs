//! Settings file management: template creation, loading, validation,
//! and log-path derivation.

mod paths;
mod settings;

pub use paths::{ENV_CONFIG_DIR, config_path, log_file_path};
pub use settings::{
    Settings, TEMPLATE_CHANNEL, TEMPLATE_TOKEN, ensure_config_exists, load_settings,
};

use std::path::PathBuf;

/// Errors raised while preparing the run configuration. Any of these
/// aborts the run; none of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is empty")]
    Empty,

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config root must be a JSON object")]
    NotAnObject,

    #[error("'{0}' is missing or empty")]
    MissingField(&'static str),

    #[error("'{0}' still holds the template placeholder")]
    Placeholder(&'static str),

    #[error("cannot create log directory {}", .0.display())]
    LogDir(PathBuf),
}
