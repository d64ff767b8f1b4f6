//! REST client for the local scripting bridge.

use async_trait::async_trait;
use url::Url;

use crate::models::{JobStatus, ProjectInfo, RenderJob};
use crate::{DEFAULT_BRIDGE_URL, ENV_BRIDGE_URL, HostError, ProjectHost};

/// Client for the scripting bridge exposed next to the host application.
pub struct BridgeClient {
    http: reqwest::Client,
    base_url: String,
}

impl BridgeClient {
    /// Connect using the ambient `RESOLVE_BRIDGE_URL` if set, falling
    /// back to the platform-default endpoint. Fails when neither answers
    /// the ping, i.e. no host handle is obtainable.
    pub async fn connect() -> Result<Self, HostError> {
        let base = std::env::var(ENV_BRIDGE_URL)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BRIDGE_URL.to_string());
        Self::connect_to(&base).await
    }

    /// Connect to a specific bridge endpoint and verify it responds.
    pub async fn connect_to(base_url: &str) -> Result<Self, HostError> {
        Url::parse(base_url)?;
        let client = Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        };
        client.ping().await?;
        tracing::debug!("Bridge handle obtained at {}", client.base_url);
        Ok(client)
    }

    async fn ping(&self) -> Result<(), HostError> {
        self.get("api/ping").await.map(|_| ())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Execute a GET request and return the body on 2xx.
    async fn get(&self, path: &str) -> Result<String, HostError> {
        let url = self.endpoint(path);
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(HostError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl ProjectHost for BridgeClient {
    async fn current_project(&self) -> Result<ProjectInfo, HostError> {
        let body = self.get("api/project").await.map_err(|e| match e {
            HostError::Api { status: 404, .. } => HostError::NoProject,
            other => other,
        })?;
        let info: ProjectInfo = serde_json::from_str(&body)?;
        Ok(info)
    }

    async fn render_jobs(&self) -> Result<Vec<RenderJob>, HostError> {
        let body = self.get("api/project/render-jobs").await?;
        let jobs: Vec<RenderJob> = serde_json::from_str(&body)?;
        Ok(jobs)
    }

    async fn render_job_status(&self, job_id: &str) -> Result<JobStatus, HostError> {
        let body = self
            .get(&format!("api/project/render-jobs/{job_id}/status"))
            .await?;
        let status: JobStatus = serde_json::from_str(&body)?;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> BridgeClient {
        BridgeClient {
            http: reqwest::Client::new(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    #[test]
    fn endpoint_joins_without_doubling_slashes() {
        let c = client("http://127.0.0.1:18832/");
        assert_eq!(
            c.endpoint("api/project"),
            "http://127.0.0.1:18832/api/project"
        );
    }

    #[test]
    fn endpoint_preserves_a_base_path() {
        let c = client("http://localhost:9000/bridge");
        assert_eq!(
            c.endpoint("api/ping"),
            "http://localhost:9000/bridge/api/ping"
        );
    }
}
