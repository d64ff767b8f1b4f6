use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Environment variable overriding the settings directory.
pub const ENV_CONFIG_DIR: &str = "RESOLVE_NOTIFY_CONFIG_DIR";

const CONFIG_DIR_NAME: &str = "resolve_slack_settings";
const CONFIG_FILE_NAME: &str = "resolve_slack_settings.json";
const DEFAULT_LOG_DIR: &str = "~/Desktop";
const LOG_FILE_PREFIX: &str = "resolve_slack_deliver";

/// Settings file location: env override if set, else a fixed
/// subdirectory beside the executable.
pub fn config_path() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return PathBuf::from(dir).join(CONFIG_FILE_NAME);
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Dated log file under the configured directory. A blank directory
/// falls back to the desktop; `~` expands to the home directory. A new
/// filename is produced for each calendar day.
pub fn log_file_path(log_directory: &str, date: NaiveDate) -> PathBuf {
    let dir = log_directory.trim();
    let dir = if dir.is_empty() { DEFAULT_LOG_DIR } else { dir };

    let filename = format!("{LOG_FILE_PREFIX}_{}.log", date.format("%Y-%m-%d"));
    expand_home(dir).join(filename)
}

fn expand_home(path: &str) -> PathBuf {
    if path == "~" || path.starts_with("~/") || path.starts_with("~\\") {
        if let Some(home) = dirs::home_dir() {
            let rest = path[1..].trim_start_matches(['/', '\\']);
            return if rest.is_empty() { home } else { home.join(rest) };
        }
    }
    PathBuf::from(path)
}
