use serde::{Deserialize, Serialize};

/// Top-level shape of the data file
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IssueData {
    pub issues: Vec<IssueRecord>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Request body for `POST /repos/{owner}/{repo}/issues`
#[derive(Debug, Serialize, Clone)]
pub struct NewIssue<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub labels: &'a [String],
}

impl<'a> From<&'a IssueRecord> for NewIssue<'a> {
    fn from(record: &'a IssueRecord) -> Self {
        Self {
            title: &record.title,
            body: &record.body,
            labels: &record.labels,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RemoteIssue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub html_url: Option<String>,
}
