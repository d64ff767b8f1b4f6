//! Top-level Deliver-hook flow: config, Slack preflight, host query,
//! message build, notification.
//!
//! Each stage returns a `Result` the orchestrator inspects; an aborting
//! stage logs its reason and ends the run cleanly. Nothing here retries
//! and nothing rolls back — re-running the whole hook is always safe.

use std::path::Path;

use anyhow::Result;
use resolve_host::{BridgeClient, JobStatus, ProjectHost, RenderJob};
use slack_client::SlackApiClient;

use crate::config::{self, ConfigError, Settings};
use crate::context::TriggerContext;
use crate::logfile;
use crate::message;
use crate::notify;

/// Run the hook end to end. Only unanticipated errors bubble up to the
/// caller's guard; expected aborts log and return `Ok(())`.
pub async fn run() -> Result<()> {
    load_dotenv();

    let config_path = config::config_path();
    let settings = match init_from_config(&config_path) {
        Ok(Some(settings)) => settings,
        Ok(None) => return Ok(()),
        Err(e) => {
            tracing::error!("Config error: {e}");
            return Ok(());
        }
    };

    let slack = SlackApiClient::new();
    match slack.auth_test(&settings.slack_token).await {
        Ok(identity) => tracing::info!(
            "Slack preflight ok (team={}, user={})",
            identity.team.as_deref().unwrap_or("-"),
            identity.user.as_deref().unwrap_or("-")
        ),
        Err(e) => {
            tracing::error!("Fatal: Slack credentials unusable: {e}");
            return Ok(());
        }
    }

    tracing::info!("Deliver hook: start");
    tracing::info!(
        "Hook: v{} ({}/{})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    tracing::info!("Config path: {}", config_path.display());
    if let Some(log_path) = logfile::current_path() {
        tracing::info!("Log path: {}", log_path.display());
    }

    let ctx = TriggerContext::from_env();
    tracing::info!(
        "Trigger context: job={:?} status={:?} error={:?}",
        ctx.job_id,
        ctx.status,
        ctx.error
    );

    let host = match BridgeClient::connect().await {
        Ok(host) => host,
        Err(e) => {
            tracing::error!("Resolve bridge: could not obtain a handle: {e}");
            return Ok(());
        }
    };

    let project = match host.current_project().await {
        Ok(project) => project,
        Err(e) => {
            tracing::error!("Resolve bridge: error while getting current project: {e}");
            return Ok(());
        }
    };
    let project_name = project
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "(unknown)".to_string());

    let (job_details, detailed_status) = query_job(&host, ctx.job_id.as_deref()).await;

    let msg = message::build_message(
        Some(&project_name),
        ctx.status.as_deref(),
        ctx.error.as_deref(),
        job_details.as_ref(),
        detailed_status.as_ref(),
    );
    tracing::info!("Slack message: {msg}");

    let ok = notify::dispatch(
        || notify::slack::notify_slack(&slack, &settings.slack_token, &settings.channel_name, &msg),
        || notify::desktop::notify_desktop(notify::desktop::NOTIFICATION_TITLE, &msg),
    )
    .await;

    tracing::info!(
        "{}",
        if ok {
            "Deliver hook: done (Slack OK)"
        } else {
            "Deliver hook: done (Slack FAILED)"
        }
    );
    Ok(())
}

/// Ensure the settings file exists, load and validate it, and point the
/// file log at the configured directory. `Ok(None)` means a template was
/// just written and the run must stop.
fn init_from_config(config_path: &Path) -> Result<Option<Settings>, ConfigError> {
    if !config::ensure_config_exists(config_path)? {
        return Ok(None);
    }

    let settings = config::load_settings(config_path)?;

    let log_path = config::log_file_path(&settings.log_directory, chrono::Local::now().date_naive());
    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir).map_err(|_| ConfigError::LogDir(dir.to_path_buf()))?;
    }
    logfile::set_path(log_path);

    Ok(Some(settings))
}

/// Best-effort job lookups: the render-job list is linear-scanned for
/// the first id match, and the detailed status fetched directly. Either
/// failing yields `None`, never an abort.
async fn query_job<H: ProjectHost>(
    host: &H,
    job_id: Option<&str>,
) -> (Option<RenderJob>, Option<JobStatus>) {
    let Some(job_id) = job_id else {
        return (None, None);
    };

    let details = match host.render_jobs().await {
        Ok(jobs) => jobs.into_iter().find(|job| job.matches_id(job_id)),
        Err(e) => {
            tracing::warn!("Render job list unavailable: {e}");
            None
        }
    };

    let status = match host.render_job_status(job_id).await {
        Ok(status) => Some(status),
        Err(e) => {
            tracing::warn!("Render job status unavailable: {e}");
            None
        }
    };

    (details, status)
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use resolve_host::{HostError, ProjectInfo};

    struct FakeHost {
        jobs: Vec<RenderJob>,
        jobs_fail: bool,
        status_fail: bool,
    }

    impl FakeHost {
        fn with_jobs(body: &str) -> Self {
            Self {
                jobs: serde_json::from_str(body).unwrap(),
                jobs_fail: false,
                status_fail: false,
            }
        }
    }

    #[async_trait]
    impl ProjectHost for FakeHost {
        async fn current_project(&self) -> Result<ProjectInfo, HostError> {
            Ok(serde_json::from_str(r#"{"name":"MyProj"}"#).unwrap())
        }

        async fn render_jobs(&self) -> Result<Vec<RenderJob>, HostError> {
            if self.jobs_fail {
                return Err(HostError::NoProject);
            }
            Ok(self.jobs.clone())
        }

        async fn render_job_status(&self, _job_id: &str) -> Result<JobStatus, HostError> {
            if self.status_fail {
                return Err(HostError::NoProject);
            }
            Ok(serde_json::from_str(r#"{"Status":"Complete"}"#).unwrap())
        }
    }

    #[tokio::test]
    async fn first_matching_job_wins() {
        let host = FakeHost::with_jobs(
            r#"[
                {"JobId":"1","TimelineName":"First"},
                {"JobId":"42","TimelineName":"Target"},
                {"JobId":"42","TimelineName":"Shadowed"}
            ]"#,
        );

        let (details, status) = query_job(&host, Some("42")).await;
        assert_eq!(details.unwrap().timeline_name(), Some("Target"));
        assert_eq!(status.unwrap().field_status(), Some("Complete"));
    }

    #[tokio::test]
    async fn missing_job_id_skips_both_lookups() {
        let host = FakeHost::with_jobs("[]");
        let (details, status) = query_job(&host, None).await;
        assert!(details.is_none());
        assert!(status.is_none());
    }

    #[tokio::test]
    async fn lookup_failures_soft_fail_to_none() {
        let mut host = FakeHost::with_jobs(r#"[{"JobId":"42"}]"#);
        host.jobs_fail = true;
        host.status_fail = true;

        let (details, status) = query_job(&host, Some("42")).await;
        assert!(details.is_none());
        assert!(status.is_none());
    }
}
