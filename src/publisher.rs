use colored::*;
use tokio::time::sleep;

use crate::client::GitHubClient;
use crate::config::Settings;
use crate::error::ProvisionResult;
use crate::logging::{log_error, log_info};
use crate::models::{IssueRecord, NewIssue, RemoteIssue};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub succeeded: usize,
    pub failed: usize,
    pub failed_titles: Vec<String>,
}

impl PublishReport {
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }
}

pub struct IssuePublisher<'a> {
    client: &'a GitHubClient,
    settings: &'a Settings,
}

impl<'a> IssuePublisher<'a> {
    pub fn new(client: &'a GitHubClient, settings: &'a Settings) -> Self {
        Self { client, settings }
    }

    /// Submit one record. Failures are logged here and handed back to the caller.
    pub async fn publish(&self, record: &IssueRecord) -> ProvisionResult<RemoteIssue> {
        match self.client.create_issue(&NewIssue::from(record)).await {
            Ok(issue) => {
                println!(
                    "  {} Created issue {}: {}",
                    "✓".green(),
                    format!("#{}", issue.number).bright_blue().bold(),
                    record.title
                );
                log_info(&format!("Created issue #{} for record {}", issue.number, record.number));
                Ok(issue)
            }
            Err(e) => {
                println!("  {} Failed to create issue \"{}\": {}", "✗".red(), record.title, e);
                log_error(&format!("Creating issue '{}' failed: {}", record.title, e));
                Err(e)
            }
        }
    }

    /// Publish every record in order, continuing past failures.
    pub async fn publish_all(&self, records: &[IssueRecord]) -> PublishReport {
        let mut report = PublishReport::default();
        let total = records.len();

        for record in records {
            println!("Creating issue {}/{}: {}", record.number, total, record.title);

            match self.publish(record).await {
                Ok(_) => report.succeeded += 1,
                Err(_) => {
                    report.failed += 1;
                    report.failed_titles.push(record.title.clone());
                    println!("Failed to create issue {}", record.number.to_string().bright_red());
                }
            }

            sleep(self.settings.issue_delay).await;
        }

        report
    }
}
