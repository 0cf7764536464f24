//! Error types for nonepad

use thiserror::Error;

/// Main error type for the nonepad application
#[derive(Debug, Error)]
pub enum NonepadError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pages file is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NonepadError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NonepadError::PageNotFound(_) => 2,
            NonepadError::Decode(_) => 3,
            NonepadError::Config(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NonepadError::PageNotFound(id) => {
                format!(
                    "Page not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'nonepad list' to see existing pages and their ids\n\
                    • Page ids are assigned at creation and never change",
                    id
                )
            }
            NonepadError::Decode(err) => {
                format!(
                    "Pages file is not valid JSON: {}\n\n\
                    Suggestions:\n\
                    • Inspect pages.json in the data directory\n\
                    • Move the file aside to start over with an empty notebook",
                    err
                )
            }
            NonepadError::Config(msg) => {
                if msg.contains("data directory") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Pass an explicit directory with --dir\n\
                        • Set the NONEPAD_DATA_DIR environment variable",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NonepadError
pub type Result<T> = std::result::Result<T, NonepadError>;
