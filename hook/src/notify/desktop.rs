//! Local sink: OS desktop notification via subprocess.

/// Title used for every desktop notification.
pub const NOTIFICATION_TITLE: &str = "DaVinci Resolve";

/// Fire a desktop notification. Failures are logged and swallowed; the
/// call never blocks the rest of the run beyond the subprocess itself.
pub fn notify_desktop(title: &str, message: &str) {
    match show(title, message) {
        Ok(()) => tracing::info!("Desktop notification sent"),
        Err(e) => tracing::warn!("Desktop notification failed: {e}"),
    }
}

#[cfg(any(target_os = "macos", test))]
fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

#[cfg(target_os = "macos")]
fn show(title: &str, message: &str) -> std::io::Result<()> {
    use std::process::Command;

    let script = format!(
        r#"display notification "{}" with title "{}""#,
        escape_quotes(message),
        escape_quotes(title)
    );
    let output = Command::new("osascript").arg("-e").arg(script).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(std::io::Error::other(format!(
            "osascript failed: {}",
            stderr.trim()
        )));
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn show(title: &str, message: &str) -> std::io::Result<()> {
    use std::process::Command;

    let output = Command::new("notify-send")
        .arg(title)
        .arg(message)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(std::io::Error::other(format!(
            "notify-send failed: {}",
            stderr.trim()
        )));
    }
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn show(_title: &str, _message: &str) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "desktop notifications not supported on this platform",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_quotes_are_escaped() {
        assert_eq!(
            escape_quotes(r#"Render "final" done"#),
            r#"Render \"final\" done"#
        );
        assert_eq!(escape_quotes("no quotes"), "no quotes");
    }
}
