//! Builds the one-line notification message from job metadata.

use resolve_host::{JobStatus, RenderJob};

/// Resolve the status to report. The trigger's literal status wins,
/// then the detailed record's `Status` field, then the raw detailed
/// payload, then `"Unknown"`.
pub fn pick_status(status: Option<&str>, detailed: Option<&JobStatus>) -> String {
    if let Some(s) = status.map(str::trim).filter(|s| !s.is_empty()) {
        return s.to_string();
    }

    if let Some(detail) = detailed {
        if let Some(s) = detail.field_status() {
            return s.to_string();
        }
        if let Some(s) = detail.fallback_text() {
            return s;
        }
    }

    "Unknown".to_string()
}

/// Assemble the notification line in fixed order: status, bracketed
/// project, timeline, arrowed output name, parenthesized error. Absent
/// parts leave no stray separators.
pub fn build_message(
    project_name: Option<&str>,
    status: Option<&str>,
    error: Option<&str>,
    job_details: Option<&RenderJob>,
    detailed_status: Option<&JobStatus>,
) -> String {
    let mut parts = vec![pick_status(status, detailed_status)];

    if let Some(name) = project_name.map(str::trim).filter(|n| !n.is_empty()) {
        parts.push(format!("[{name}]"));
    }

    if let Some(timeline) = job_details.and_then(RenderJob::timeline_name) {
        parts.push(timeline.to_string());
    }

    if let Some(outname) = job_details.and_then(RenderJob::output_name) {
        parts.push(format!("→ {outname}"));
    }

    if let Some(err) = error.map(str::trim).filter(|e| !e.is_empty()) {
        parts.push(format!("(Error: {err})"));
    }

    parts.join(" ")
}
