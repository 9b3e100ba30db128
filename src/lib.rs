// Module declarations
pub mod cli_context;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod loader;
pub mod logging;
pub mod models;
pub mod provision;
pub mod publisher;
pub mod reconciler;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cli_context::{CliContext, CliContextBuilder};
pub use client::GitHubClient;
pub use config::{LabelColorTable, RepoRef, Settings};
pub use error::{ProvisionError, ProvisionResult};
pub use models::*;
pub use provision::{run, RunSummary};
