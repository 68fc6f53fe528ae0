//! Handlers for the top-level commands, one module per command tree.
//!
//! Resource modules define their clap subcommand enum next to the handler
//! and the [`TextSummary`](super::render::TextSummary) lines of their records.

// Handlers, not library API.
#[allow(clippy::missing_errors_doc)]
pub mod ab_test;
#[allow(clippy::missing_errors_doc)]
pub mod api_key;
#[allow(clippy::missing_errors_doc)]
pub mod auth;
pub mod completion;
#[allow(clippy::missing_errors_doc)]
pub mod conversion_event;
#[allow(clippy::missing_errors_doc)]
pub mod deployment_slot;
#[allow(clippy::missing_errors_doc)]
pub mod evaluation_config;
#[allow(clippy::missing_errors_doc)]
pub mod item_meta_data;
#[allow(clippy::missing_errors_doc)]
pub mod model_configuration;
#[allow(clippy::missing_errors_doc)]
pub mod parameter_tuning_job;
#[allow(clippy::missing_errors_doc)]
pub mod project;
#[allow(clippy::missing_errors_doc)]
pub mod retraining_run;
#[allow(clippy::missing_errors_doc)]
pub mod retraining_schedule;
#[allow(clippy::missing_errors_doc)]
pub mod split_config;
#[allow(clippy::missing_errors_doc)]
pub mod task_log;
#[allow(clippy::missing_errors_doc)]
pub mod trained_model;
#[allow(clippy::missing_errors_doc)]
pub mod training_data;
#[allow(clippy::missing_errors_doc)]
pub mod user;

use crate::error::Error;
use std::path::Path;

/// Write downloaded bytes to `path` and print the path.
pub(crate) async fn save_download(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    tokio::fs::write(path, bytes).await?;
    println!("{}", path.display());
    Ok(())
}
