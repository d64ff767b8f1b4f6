//! Best-effort notification sinks.
//!
//! The remote (Slack) and local (desktop) sinks are independent: each
//! failure is logged and contained, and the local attempt is made
//! regardless of the remote outcome.

pub mod desktop;
pub mod slack;

use std::future::Future;

/// Run the remote sink, then the local sink. The local attempt is
/// unconditional; the remote acknowledgement is passed through.
pub async fn dispatch<R, Fut, L>(remote: R, local: L) -> bool
where
    R: FnOnce() -> Fut,
    Fut: Future<Output = bool>,
    L: FnOnce(),
{
    let ok = remote().await;
    local();
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn local_sink_runs_even_when_remote_fails() {
        let local_ran = AtomicBool::new(false);

        let ok = dispatch(
            || async { false },
            || local_ran.store(true, Ordering::SeqCst),
        )
        .await;

        assert!(!ok);
        assert!(local_ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn remote_acknowledgement_is_passed_through() {
        let ok = dispatch(|| async { true }, || {}).await;
        assert!(ok);
    }
}
