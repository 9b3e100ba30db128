use std::path::PathBuf;
use std::time::Duration;

use crate::config::{LabelColorTable, RepoRef};
use crate::constants::{
    DEFAULT_DATA_FILE, DEFAULT_ISSUE_DELAY_MS, DEFAULT_LABEL_DELAY_MS, DEFAULT_REPO,
    DEFAULT_TIMEOUT_SECS, GITHUB_API_URL,
};

/// Everything a run needs, fixed once the CLI context is built.
#[derive(Debug, Clone)]
pub struct Settings {
    pub repo: RepoRef,
    pub token: String,
    pub api_base: String,
    pub data_file: PathBuf,
    pub label_delay: Duration,
    pub issue_delay: Duration,
    pub request_timeout: Duration,
    pub colors: LabelColorTable,
    pub fail_on_error: bool,
    pub dry_run: bool,
}

impl Settings {
    pub fn new(repo: RepoRef, token: String) -> Self {
        Self {
            repo,
            token,
            api_base: GITHUB_API_URL.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            label_delay: Duration::from_millis(DEFAULT_LABEL_DELAY_MS),
            issue_delay: Duration::from_millis(DEFAULT_ISSUE_DELAY_MS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            colors: LabelColorTable::default(),
            fail_on_error: false,
            dry_run: false,
        }
    }

    pub fn default_repo() -> RepoRef {
        // DEFAULT_REPO is a literal owner/name pair
        DEFAULT_REPO
            .parse()
            .unwrap_or_else(|_| RepoRef::new("Oipnet", "HydroSense"))
    }
}
