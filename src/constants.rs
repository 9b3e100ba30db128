pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_WEB_URL: &str = "https://github.com";
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
pub const USER_AGENT: &str = "issue-provisioner";
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

pub const DEFAULT_REPO: &str = "Oipnet/HydroSense";
pub const DEFAULT_DATA_FILE: &str = "issues-data.json";

// Static rate-limit guards between consecutive calls
pub const DEFAULT_LABEL_DELAY_MS: u64 = 100;
pub const DEFAULT_ISSUE_DELAY_MS: u64 = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_LABEL_COLOR: &str = "EDEDED";

pub const LABEL_COLORS: &[(&str, &str)] = &[
    ("epic:setup", "0E8A16"),
    ("epic:backend", "1D76DB"),
    ("epic:frontend", "FBCA04"),
    ("epic:infra", "D93F0B"),
    ("epic:ia", "8B4789"),
    ("backend", "0075CA"),
    ("frontend", "F9D0C4"),
    ("infra", "E99695"),
    ("ia", "C5DEF5"),
];

pub const SUMMARY_RULE_WIDTH: usize = 60;
