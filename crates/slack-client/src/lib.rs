//! Slack Web API client library.
//!
//! Covers the two calls the notifier needs: `auth.test` for the
//! credential preflight and `chat.postMessage` for delivery.

pub mod api;

pub use api::SlackApiClient;
pub use api::models::{AuthTestResponse, PostMessageResponse};

/// Unified error type for the slack-client crate.
#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Slack HTTP error (status {status}): {message}")]
    HttpStatus { status: u16, message: String },

    /// The platform answered with `ok: false`; `code` is Slack's own
    /// error identifier (e.g. `channel_not_found`, `invalid_auth`).
    #[error("Slack API error: {code}")]
    Api { code: String },
}
