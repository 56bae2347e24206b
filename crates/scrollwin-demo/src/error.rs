use std::path::PathBuf;

use scrollwin_core::ListError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("list configuration error: {0}")]
    List(#[from] ListError),

    #[error("{message} (got {input:?})", message = crate::input::INVALID_TOTAL_MESSAGE)]
    InvalidTotal { input: String },

    #[error("invalid script token {token:?} at position {position}")]
    InvalidScript { token: String, position: usize },

    #[error("config file not found: {path}")]
    MissingConfig { path: PathBuf },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl DemoError {
    /// Process exit code: 2 for bad user input, 1 for everything else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidTotal { .. }
            | Self::InvalidScript { .. }
            | Self::InvalidArgument { .. }
            | Self::MissingConfig { .. } => 2,
            Self::List(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DemoError;
    use scrollwin_core::ListError;

    #[test]
    fn usage_errors_exit_with_two() {
        let error = DemoError::InvalidTotal {
            input: "-3".to_string(),
        };
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.to_string(),
            "Invalid input value. It must be a non-negative integer. (got \"-3\")"
        );
    }

    #[test]
    fn list_errors_exit_with_one() {
        let error = DemoError::from(ListError::ZeroPageSize);
        assert_eq!(error.exit_code(), 1);
        assert_eq!(
            error.to_string(),
            "list configuration error: page size must be at least 1"
        );
    }
}
