use std::fmt;
use std::str::FromStr;

use crate::constants::GITHUB_WEB_URL;
use crate::error::ProvisionError;

/// Target repository, written as `owner/name` on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Browser link to the repository's issue list
    pub fn issues_url(&self) -> String {
        format!("{}/{}/{}/issues", GITHUB_WEB_URL, self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = ProvisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ProvisionError::InvalidInput(format!(
                "Invalid repository '{}', expected owner/name",
                s
            ))
        };

        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_and_name() {
        let repo: RepoRef = "Oipnet/HydroSense".parse().unwrap();
        assert_eq!(repo.owner, "Oipnet");
        assert_eq!(repo.name, "HydroSense");
        assert_eq!(repo.to_string(), "Oipnet/HydroSense");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["HydroSense", "/HydroSense", "Oipnet/", "a/b/c", ""] {
            let result = input.parse::<RepoRef>();
            assert!(
                matches!(result, Err(ProvisionError::InvalidInput(_))),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_issues_url() {
        let repo = RepoRef::new("octo", "widgets");
        assert_eq!(repo.issues_url(), "https://github.com/octo/widgets/issues");
    }
}
