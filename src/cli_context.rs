use crate::client::GitHubClient;
use crate::config::{load_color_overrides, RepoRef, Settings};
use crate::error::{ProvisionError, ProvisionResult};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Central context for a run, holding the settings and the shared client
pub struct CliContext {
    settings: Settings,
    client: Option<Arc<GitHubClient>>,
}

impl CliContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            client: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get or create the authenticated client; one session per run
    pub fn client(&mut self) -> ProvisionResult<Arc<GitHubClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(GitHubClient::new(&self.settings)?);
        self.client = Some(client.clone());
        Ok(client)
    }
}

/// Collects raw CLI/environment values and validates them into a context
#[derive(Default)]
pub struct CliContextBuilder {
    token: Option<String>,
    repo: Option<String>,
    api_base: Option<String>,
    data_file: Option<PathBuf>,
    colors_file: Option<PathBuf>,
    label_delay: Option<Duration>,
    issue_delay: Option<Duration>,
    request_timeout: Option<Duration>,
    fail_on_error: bool,
    dry_run: bool,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    pub fn with_colors_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.colors_file = Some(path.into());
        self
    }

    pub fn with_label_delay(mut self, delay: Duration) -> Self {
        self.label_delay = Some(delay);
        self
    }

    pub fn with_issue_delay(mut self, delay: Duration) -> Self {
        self.issue_delay = Some(delay);
        self
    }

    /// Zero both inter-call delays
    pub fn without_delays(self) -> Self {
        self.with_label_delay(Duration::ZERO)
            .with_issue_delay(Duration::ZERO)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn fail_on_error(mut self, enabled: bool) -> Self {
        self.fail_on_error = enabled;
        self
    }

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn build(self) -> ProvisionResult<CliContext> {
        // Credential first: nothing else matters without it
        let token = self
            .token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ProvisionError::MissingToken)?;

        let repo = match self.repo {
            Some(repo) => repo.parse::<RepoRef>()?,
            None => Settings::default_repo(),
        };

        let mut settings = Settings::new(repo, token);
        if let Some(api_base) = self.api_base {
            settings.api_base = api_base;
        }
        if let Some(data_file) = self.data_file {
            settings.data_file = data_file;
        }
        if let Some(delay) = self.label_delay {
            settings.label_delay = delay;
        }
        if let Some(delay) = self.issue_delay {
            settings.issue_delay = delay;
        }
        if let Some(timeout) = self.request_timeout {
            if timeout.is_zero() {
                return Err(ProvisionError::InvalidInput(
                    "Request timeout must be greater than zero".to_string(),
                ));
            }
            settings.request_timeout = timeout;
        }
        if let Some(path) = self.colors_file {
            let overrides = load_color_overrides(&path)?;
            settings.colors = settings.colors.with_overrides(overrides)?;
        }
        settings.fail_on_error = self.fail_on_error;
        settings.dry_run = self.dry_run;

        Ok(CliContext::new(settings))
    }
}
