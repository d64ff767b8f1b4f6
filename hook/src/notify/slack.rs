//! Remote sink: post the summary line to the configured Slack channel.

use slack_client::{SlackApiClient, SlackError};

/// Post `message` to `channel`. Returns whether the platform
/// acknowledged it; failures are logged with Slack's own error code
/// where available and never raised.
pub async fn notify_slack(
    client: &SlackApiClient,
    token: &str,
    channel: &str,
    message: &str,
) -> bool {
    match client.post_message(token, channel, message).await {
        Ok(resp) => {
            tracing::info!(
                "Slack message delivered (ts={})",
                resp.ts.as_deref().unwrap_or("-")
            );
            true
        }
        Err(SlackError::Api { code }) => {
            tracing::error!("SlackApiError: {code}");
            false
        }
        Err(e) => {
            tracing::error!("Slack: unexpected error: {e}");
            false
        }
    }
}
