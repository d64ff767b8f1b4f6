use super::models::{PostMessageRequest, PostMessageResponse};
use super::*;

impl SlackApiClient {
    /// Post a plain-text message to a channel. Success is the platform's
    /// `ok` acknowledgement flag; an `ok: false` answer surfaces Slack's
    /// own error code.
    pub async fn post_message(
        &self,
        token: &str,
        channel: &str,
        text: &str,
    ) -> Result<PostMessageResponse, SlackError> {
        let request = PostMessageRequest { channel, text };
        let body = self
            .authenticated_post("chat.postMessage", token, &request)
            .await?;
        let resp: PostMessageResponse = serde_json::from_str(&body)?;

        if !resp.ok {
            let code = resp
                .error
                .unwrap_or_else(|| "unknown_error".to_string());
            return Err(SlackError::Api { code });
        }

        tracing::debug!(
            channel = resp.channel.as_deref().unwrap_or(channel),
            ts = resp.ts.as_deref().unwrap_or(""),
            "chat.postMessage acknowledged"
        );
        Ok(resp)
    }
}
