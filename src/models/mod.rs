pub mod issue;
pub mod label;

// Re-export commonly used types
pub use issue::{IssueData, IssueRecord, NewIssue, RemoteIssue};
pub use label::{NewLabel, RemoteLabel};
