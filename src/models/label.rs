use serde::{Deserialize, Serialize};

/// Request body for `POST /repos/{owner}/{repo}/labels`
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct NewLabel {
    pub name: String,
    pub color: String,
    pub description: String,
}

impl NewLabel {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            description: format!("Label for {}", name),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RemoteLabel {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
