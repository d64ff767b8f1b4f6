//! Dated append-only log file fed from tracing events.
//!
//! The file layer mirrors every event to the active log file as
//! `[YYYY-MM-DD HH:MM:SS] <message>`. The file is opened, appended, and
//! closed per event; write failures are swallowed so logging never takes
//! the run down. The target path starts at the pre-config default and is
//! swapped once the settings file has been validated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{LazyLock, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

static LOG_PATH: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Redirect the file log to `path`. Subsequent events append there.
pub fn set_path(path: PathBuf) {
    if let Ok(mut target) = LOG_PATH.lock() {
        *target = Some(path);
    }
}

/// The file currently receiving log lines, if any.
pub fn current_path() -> Option<PathBuf> {
    LOG_PATH.lock().ok().and_then(|target| target.clone())
}

fn append_line(line: &str) {
    let Some(path) = current_path() else {
        return;
    };
    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = writeln!(file, "{line}");
}

fn format_line(timestamp: &str, message: &str) -> String {
    format!("[{timestamp}] {message}")
}

/// Tracing layer appending each event's message to the active log file.
#[derive(Default)]
pub struct FileLogLayer;

impl FileLogLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for FileLogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let message = visitor
            .message
            .unwrap_or_else(|| event.metadata().name().to_string());
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        append_line(&format_line(&timestamp, &message));
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{LazyLock, Mutex};

    // The target path is process-global state; serialize the tests.
    static TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    #[test]
    fn format_line_brackets_the_timestamp() {
        assert_eq!(
            format_line("2026-08-07 10:00:00", "Deliver hook: start"),
            "[2026-08-07 10:00:00] Deliver hook: start"
        );
    }

    #[test]
    fn set_path_redirects_appends() {
        let _guard = TEST_LOCK.lock().expect("lock");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolve_slack_deliver_2026-08-07.log");

        set_path(path.clone());
        assert_eq!(current_path(), Some(path.clone()));

        append_line("[2026-08-07 10:00:00] one");
        append_line("[2026-08-07 10:00:01] two");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines = contents.lines().collect::<Vec<_>>();
        assert_eq!(lines, vec!["[2026-08-07 10:00:00] one", "[2026-08-07 10:00:01] two"]);
    }

    #[test]
    fn unwritable_target_is_swallowed() {
        let _guard = TEST_LOCK.lock().expect("lock");
        set_path(PathBuf::from("/nonexistent-dir/deliver.log"));
        // Must not panic.
        append_line("dropped");
    }
}
