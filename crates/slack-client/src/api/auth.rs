use super::models::AuthTestResponse;
use super::*;

impl SlackApiClient {
    /// Check that the token is usable at all. `auth.test` needs no
    /// arguments and answers with the workspace/bot identity.
    pub async fn auth_test(&self, token: &str) -> Result<AuthTestResponse, SlackError> {
        let body = self.authenticated_post_no_body("auth.test", token).await?;
        let resp: AuthTestResponse = serde_json::from_str(&body)?;

        if !resp.ok {
            let code = resp
                .error
                .unwrap_or_else(|| "unknown_error".to_string());
            return Err(SlackError::Api { code });
        }

        Ok(resp)
    }
}
