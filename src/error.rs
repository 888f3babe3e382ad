//! Error handling for alias-forge

use thiserror::Error;

/// Main error type for alias-forge
#[derive(Error, Debug, Clone)]
pub enum AliasForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AliasForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!(
                    "❌ Configuration problem: {}\n💡 Check the requested count, length and theme name",
                    message
                )
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!(
                    "❌ File error{}: {}\n💡 Check file permissions and paths",
                    path_info, message
                )
            }
            Self::Parse { message } => {
                format!(
                    "❌ Parse error: {}\n💡 This might be a bug, please report it",
                    message
                )
            }
            Self::Cli { message } => {
                format!("❌ Prompt error: {}\n💡 Use --help for usage information", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

/// Convert from common error types
impl From<std::io::Error> for AliasForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for AliasForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

impl From<inquire::InquireError> for AliasForgeError {
    fn from(err: inquire::InquireError) -> Self {
        Self::cli(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AliasForgeError>;

/// Helper macro for configuration errors
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::AliasForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AliasForgeError::config(format!($fmt, $($arg)*))
    };
}
