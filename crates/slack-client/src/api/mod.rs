//! Slack Web API client.
//!
//! Bearer-token POST calls against `slack.com/api`. The Web API signals
//! application errors through an `ok` flag in an HTTP 200 body, so every
//! call checks both the transport status and the acknowledgement flag.

mod auth;
mod chat;
mod request;

pub mod models;

use crate::SlackError;

const SLACK_API_BASE: &str = "https://slack.com/api";

/// Slack Web API client. Tokens are passed per call.
pub struct SlackApiClient {
    pub(super) http: reqwest::Client,
}

impl Default for SlackApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SlackApiClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}
