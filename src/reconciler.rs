use colored::*;
use tokio::time::sleep;

use crate::client::GitHubClient;
use crate::config::Settings;
use crate::error::ProvisionError;
use crate::logging::{log_error, log_info};
use crate::models::NewLabel;

/// Result of one check-then-create pass for a label
#[derive(Debug)]
pub enum LabelOutcome {
    Existing,
    Created,
    CreateFailed(ProvisionError),
    LookupFailed(ProvisionError),
}

impl LabelOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, LabelOutcome::Existing | LabelOutcome::Created)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    pub existing: usize,
    pub created: usize,
    pub unresolved: Vec<String>,
}

impl ReconcileReport {
    pub fn total(&self) -> usize {
        self.existing + self.created + self.unresolved.len()
    }
}

pub struct LabelReconciler<'a> {
    client: &'a GitHubClient,
    settings: &'a Settings,
}

impl<'a> LabelReconciler<'a> {
    pub fn new(client: &'a GitHubClient, settings: &'a Settings) -> Self {
        Self { client, settings }
    }

    /// Look the label up once and create it only on a 404.
    pub async fn ensure_label(&self, name: &str) -> LabelOutcome {
        match self.client.get_label(name).await {
            Ok(_) => {
                println!("  {} Label \"{}\" already exists", "✓".green(), name);
                log_info(&format!("Label '{}' already exists", name));
                LabelOutcome::Existing
            }
            Err(ProvisionError::NotFound(_)) => self.create_label(name).await,
            Err(e) => {
                println!("  {} Error checking label \"{}\": {}", "✗".red(), name, e);
                log_error(&format!("Lookup of label '{}' failed: {}", name, e));
                LabelOutcome::LookupFailed(e)
            }
        }
    }

    async fn create_label(&self, name: &str) -> LabelOutcome {
        let label = NewLabel::new(name, self.settings.colors.color_for(name));

        match self.client.create_label(&label).await {
            Ok(_) => {
                println!("  {} Created label \"{}\"", "✓".green(), name.bright_green());
                log_info(&format!("Created label '{}' with color {}", name, label.color));
                LabelOutcome::Created
            }
            Err(e) => {
                println!("  {} Failed to create label \"{}\": {}", "✗".red(), name.bright_red(), e);
                log_error(&format!("Creating label '{}' failed: {}", name, e));
                LabelOutcome::CreateFailed(e)
            }
        }
    }

    /// Attempt every label; failures are recorded, never fatal.
    pub async fn reconcile_all<I, S>(&self, names: I) -> ReconcileReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ReconcileReport::default();

        for name in names {
            let name = name.as_ref();
            match self.ensure_label(name).await {
                LabelOutcome::Existing => report.existing += 1,
                LabelOutcome::Created => report.created += 1,
                LabelOutcome::CreateFailed(_) | LabelOutcome::LookupFailed(_) => {
                    report.unresolved.push(name.to_string())
                }
            }
            sleep(self.settings.label_delay).await;
        }

        report
    }
}
