use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("GITHUB_TOKEN environment variable is required")]
    MissingToken,

    #[error("{} not found", .0.display())]
    FileMissing(PathBuf),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP 404: {0} not found")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ProvisionError {
    /// Configuration and input errors end the run; everything else is
    /// scoped to a single label or issue.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ProvisionError::MissingToken
                | ProvisionError::FileMissing(_)
                | ProvisionError::Parse(_)
                | ProvisionError::InvalidInput(_)
                | ProvisionError::Io(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProvisionError::NotFound(_))
    }
}

impl From<reqwest::Error> for ProvisionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            let target = err
                .url()
                .map(|u| u.path().to_string())
                .unwrap_or_else(|| "request".to_string());
            ProvisionError::Timeout(target)
        } else {
            ProvisionError::Transport(err)
        }
    }
}

pub type ProvisionResult<T> = Result<T, ProvisionError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ProvisionResult<T>;
    fn with_context<F>(self, f: F) -> ProvisionResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> ProvisionResult<T> {
        self.map_err(|e| ProvisionError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ProvisionResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ProvisionError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> ProvisionResult<T> {
        self.ok_or_else(|| ProvisionError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> ProvisionResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| ProvisionError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! provision_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::ProvisionError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::ProvisionError::$error_type(format!($fmt, $($arg)*))
    };
}
