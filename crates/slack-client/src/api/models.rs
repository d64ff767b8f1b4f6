//! Response models for the Web API calls in use.

use serde::{Deserialize, Serialize};

fn default_ok() -> bool {
    true
}

/// `chat.postMessage` request body.
#[derive(Debug, Serialize)]
pub struct PostMessageRequest<'a> {
    pub channel: &'a str,
    pub text: &'a str,
}

/// `chat.postMessage` acknowledgement. Slack omits fields freely, so
/// everything except the flag is optional; a missing flag counts as
/// success.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    #[serde(default = "default_ok")]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}

/// `auth.test` response: identifies the workspace and bot user the
/// token belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthTestResponse {
    #[serde(default = "default_ok")]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}
