//! Wire models for the scripting bridge.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Metadata for the currently open project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub name: Option<String>,
}

/// A render job record as returned by the bridge.
///
/// Resolve populates different keys depending on version and render
/// preset, so the record keeps the raw map and resolves the fields of
/// interest with first-non-empty-wins accessors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RenderJob {
    fields: Map<String, Value>,
}

impl RenderJob {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Job identity. Older hosts report an integer id.
    pub fn job_id(&self) -> Option<String> {
        match self.fields.get("JobId") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn matches_id(&self, job_id: &str) -> bool {
        self.job_id().as_deref() == Some(job_id)
    }

    /// Timeline name: `TimelineName`, falling back to `Timeline`.
    pub fn timeline_name(&self) -> Option<&str> {
        self.first_non_empty(&["TimelineName", "Timeline"])
    }

    /// Output file name: `OutputFilename`, `FileName`, then `CustomName`.
    pub fn output_name(&self) -> Option<&str> {
        self.first_non_empty(&["OutputFilename", "FileName", "CustomName"])
    }

    fn first_non_empty(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| {
            self.fields
                .get(*key)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
        })
    }
}

/// Detailed per-job status. Newer bridges return a structured record,
/// older ones a bare status string, so the payload is kept raw and read
/// through accessors.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct JobStatus(Value);

impl JobStatus {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The `Status` (or `status`) field of a structured payload.
    pub fn field_status(&self) -> Option<&str> {
        self.0
            .get("Status")
            .or_else(|| self.0.get("status"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Textual rendering of the whole payload, used when no status field
    /// is available. Empty payloads yield `None`.
    pub fn fallback_text(&self) -> Option<String> {
        match &self.0 {
            Value::Null => None,
            Value::String(s) => {
                let s = s.trim();
                if s.is_empty() { None } else { Some(s.to_string()) }
            }
            Value::Object(map) if map.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(body: &str) -> RenderJob {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn timeline_name_prefers_primary_key() {
        let j = job(r#"{"JobId":"1","TimelineName":"Main","Timeline":"Old"}"#);
        assert_eq!(j.timeline_name(), Some("Main"));
    }

    #[test]
    fn timeline_name_falls_back_past_empty_values() {
        let j = job(r#"{"JobId":"1","TimelineName":"","Timeline":"Old"}"#);
        assert_eq!(j.timeline_name(), Some("Old"));
    }

    #[test]
    fn output_name_tries_all_alternate_keys() {
        let j = job(r#"{"JobId":"1","CustomName":"custom.mov"}"#);
        assert_eq!(j.output_name(), Some("custom.mov"));

        let j = job(r#"{"JobId":"1","FileName":"file.mov","CustomName":"custom.mov"}"#);
        assert_eq!(j.output_name(), Some("file.mov"));
    }

    #[test]
    fn job_id_accepts_integer_ids() {
        let j = job(r#"{"JobId":42}"#);
        assert_eq!(j.job_id().as_deref(), Some("42"));
        assert!(j.matches_id("42"));
    }

    #[test]
    fn job_id_missing_matches_nothing() {
        let j = job(r#"{"TimelineName":"Main"}"#);
        assert_eq!(j.job_id(), None);
        assert!(!j.matches_id(""));
    }

    #[test]
    fn status_field_read_from_either_casing() {
        let s: JobStatus = serde_json::from_str(r#"{"Status":"Rendering"}"#).unwrap();
        assert_eq!(s.field_status(), Some("Rendering"));

        let s: JobStatus = serde_json::from_str(r#"{"status":"Failed"}"#).unwrap();
        assert_eq!(s.field_status(), Some("Failed"));
    }

    #[test]
    fn bare_string_status_has_no_field_but_a_fallback() {
        let s: JobStatus = serde_json::from_str(r#""Complete""#).unwrap();
        assert_eq!(s.field_status(), None);
        assert_eq!(s.fallback_text().as_deref(), Some("Complete"));
    }

    #[test]
    fn empty_payloads_yield_no_fallback() {
        let s: JobStatus = serde_json::from_str("null").unwrap();
        assert_eq!(s.fallback_text(), None);

        let s: JobStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(s.fallback_text(), None);

        let s = JobStatus::new(Value::String("   ".into()));
        assert_eq!(s.fallback_text(), None);
    }

    #[test]
    fn structured_payload_without_status_stringifies() {
        let s: JobStatus = serde_json::from_str(r#"{"CompletionPercentage":100}"#).unwrap();
        assert_eq!(s.field_status(), None);
        assert_eq!(s.fallback_text().as_deref(), Some(r#"{"CompletionPercentage":100}"#));
    }
}
