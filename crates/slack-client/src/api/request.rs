use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;

use super::*;

impl SlackApiClient {
    fn auth_headers(&self, token: &str) -> Result<HeaderMap, SlackError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {token}");
        let mut value = HeaderValue::from_str(&bearer).map_err(|_| SlackError::Api {
            code: "invalid_auth".to_string(),
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Execute a POST request with auth headers and JSON body.
    pub(super) async fn authenticated_post(
        &self,
        method: &str,
        token: &str,
        body: &impl Serialize,
    ) -> Result<String, SlackError> {
        let url = api_url(method);
        let headers = self.auth_headers(token)?;
        let resp = self
            .http
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        let resp_body = resp.text().await?;

        if !status.is_success() {
            return Err(SlackError::HttpStatus {
                status: status.as_u16(),
                message: resp_body,
            });
        }

        Ok(resp_body)
    }

    /// Execute a POST request with auth headers and no body.
    pub(super) async fn authenticated_post_no_body(
        &self,
        method: &str,
        token: &str,
    ) -> Result<String, SlackError> {
        let url = api_url(method);
        let headers = self.auth_headers(token)?;
        let resp = self.http.post(&url).headers(headers).send().await?;

        let status = resp.status();
        let resp_body = resp.text().await?;

        if !status.is_success() {
            return Err(SlackError::HttpStatus {
                status: status.as_u16(),
                message: resp_body,
            });
        }

        Ok(resp_body)
    }
}

pub(super) fn api_url(method: &str) -> String {
    format!("{SLACK_API_BASE}/{method}")
}
