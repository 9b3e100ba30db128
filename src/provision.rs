use colored::*;

use crate::cli_context::CliContext;
use crate::error::ProvisionResult;
use crate::formatting::{format_plan, format_summary, print_header, print_step};
use crate::loader::{load_issues, required_labels};
use crate::logging::log_info;
use crate::publisher::{IssuePublisher, PublishReport};
use crate::reconciler::{LabelReconciler, ReconcileReport};

/// Exit status used when `--fail-on-error` is set and any issue failed
pub const PARTIAL_FAILURE_EXIT_CODE: i32 = 2;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub labels: ReconcileReport,
    pub issues: PublishReport,
}

impl RunSummary {
    pub fn exit_code(&self, fail_on_error: bool) -> i32 {
        if fail_on_error && self.issues.failed > 0 {
            PARTIAL_FAILURE_EXIT_CODE
        } else {
            0
        }
    }
}

/// Load, reconcile labels, publish issues, then print the summary.
///
/// The data file is read before the first request, so a missing or
/// malformed file ends the run without touching the remote. All labels are
/// attempted before any issue is submitted.
pub async fn run(context: &mut CliContext) -> ProvisionResult<RunSummary> {
    let records = load_issues(&context.settings().data_file)?;
    let labels = required_labels(&records);
    log_info(&format!(
        "Loaded {} issues referencing {} labels from {}",
        records.len(),
        labels.len(),
        context.settings().data_file.display()
    ));

    let settings = context.settings().clone();

    if settings.dry_run {
        print!("{}", format_plan(&records, &labels, &settings.colors, &settings.repo));
        return Ok(RunSummary::default());
    }

    let client = context.client()?;

    print_header(&settings.repo, records.len());

    print_step(1, "Creating labels...");
    let label_report = LabelReconciler::new(&client, &settings)
        .reconcile_all(&labels)
        .await;
    println!("\n{} {}\n", "✅".green(), "Labels creation completed".green().bold());

    print_step(2, "Creating issues...\n");
    let issue_report = IssuePublisher::new(&client, &settings)
        .publish_all(&records)
        .await;

    let summary = RunSummary {
        labels: label_report,
        issues: issue_report,
    };
    print!("{}", format_summary(&summary, &settings.repo));
    log_info(&format!(
        "Run finished: {} created, {} failed",
        summary.issues.succeeded, summary.issues.failed
    ));

    Ok(summary)
}
