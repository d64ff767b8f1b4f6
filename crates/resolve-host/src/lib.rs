//! DaVinci Resolve scripting-bridge client library.
//!
//! Provides the [`ProjectHost`] capability trait for reading the current
//! project and its render jobs, and [`BridgeClient`], the REST
//! implementation talking to the local scripting bridge.

pub mod bridge;
pub mod models;

pub use bridge::BridgeClient;
pub use models::{JobStatus, ProjectInfo, RenderJob};

use async_trait::async_trait;

/// Unified error type for the resolve-host crate.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bridge API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("no project is currently open")]
    NoProject,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Read access to the host's current project.
///
/// Implemented by [`BridgeClient`] for the real scripting bridge; unit
/// tests substitute their own doubles.
#[async_trait]
pub trait ProjectHost {
    /// Metadata for the project currently open in the host.
    async fn current_project(&self) -> Result<ProjectInfo, HostError>;

    /// All render jobs tracked by the current project.
    async fn render_jobs(&self) -> Result<Vec<RenderJob>, HostError>;

    /// Detailed status for a single render job.
    async fn render_job_status(&self, job_id: &str) -> Result<JobStatus, HostError>;
}

/// Environment variable overriding the bridge endpoint.
pub const ENV_BRIDGE_URL: &str = "RESOLVE_BRIDGE_URL";

/// Default scripting-bridge endpoint on the local machine.
pub const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:18832";
