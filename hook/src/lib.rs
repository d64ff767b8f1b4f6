//! Render-completion notifier for DaVinci Resolve Deliver jobs.
//!
//! Invoked as a Deliver hook: reads the trigger context from the
//! environment, queries the scripting bridge for project and job
//! metadata, posts a one-line summary to Slack, and fires a desktop
//! notification. Every step is logged to the console and to a dated
//! log file.

pub mod config;
pub mod context;
pub mod logfile;
pub mod message;
pub mod notify;
mod run;

pub use run::run;
