//! Deliver-hook entry point.
//!
//! Console logging goes through the fmt layer; every event is also
//! mirrored to the dated log file, which starts at the pre-config
//! default location until the settings file has been read.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use resolve_notify::{config, logfile};

#[tokio::main]
async fn main() {
    logfile::set_path(config::log_file_path("", chrono::Local::now().date_naive()));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(logfile::FileLogLayer::new())
        .init();

    if let Err(e) = resolve_notify::run().await {
        tracing::error!("Deliver hook: fatal error: {e:#}");
    }
}
