use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ProvisionError, ProvisionResult};
use crate::models::{IssueData, IssueRecord};

/// Read the data file and return its issues in declaration order.
pub fn load_issues(path: &Path) -> ProvisionResult<Vec<IssueRecord>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ProvisionError::FileMissing(path.to_path_buf()),
        _ => ProvisionError::Io(e),
    })?;

    parse_issues(&content)
        .map_err(|e| ProvisionError::Parse(format!("{}: {}", path.display(), e)))
}

pub fn parse_issues(content: &str) -> Result<Vec<IssueRecord>, serde_json::Error> {
    let data: IssueData = serde_json::from_str(content)?;
    Ok(data.issues)
}

/// Sorted union of every label referenced by any record
pub fn required_labels(records: &[IssueRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|record| record.labels.iter().cloned())
        .collect()
}
