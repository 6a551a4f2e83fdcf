//! Error types and handling infrastructure for INF to JSON conversion

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// A limit configured on the conversion that the input exceeded
#[derive(Debug, Clone, thiserror::Error)]
pub enum LimitExceededError {
    #[error("Number of sections exceeds maximum allowed ({limit})")]
    Sections { limit: usize },

    #[error("Input too large: {size} bytes (limit: {limit_mb} MB)")]
    FileSize { size: u64, limit_mb: usize },
}

/// A control character that cannot be represented in strict output
#[derive(Debug, Clone, thiserror::Error)]
#[error("Control character U+{codepoint:04X} cannot be escaped in strict mode")]
pub struct EscapeError {
    pub codepoint: u32,
}

impl EscapeError {
    pub fn new(ch: char) -> Self {
        Self {
            codepoint: ch as u32,
        }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error(transparent)]
    LimitExceeded(#[from] LimitExceededError),

    #[error(transparent)]
    Escape(#[from] EscapeError),

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Unsupported encoding: {encoding}")]
    UnsupportedEncoding { encoding: String },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn parse(message: String, line: Option<usize>) -> Self {
        Self::Parse(ParseError::new(message, line))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn unsupported_encoding(encoding: impl Into<String>) -> Self {
        Self::UnsupportedEncoding {
            encoding: encoding.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(err) => {
                if let Some(line) = err.line {
                    format!("INF parse error at line {}: {}", line, err.message)
                } else {
                    format!("INF parse error: {}", err.message)
                }
            }
            Self::Validation { message } => {
                format!("Validation failed: {}", message)
            }
            Self::LimitExceeded(err) => err.to_string(),
            Self::Escape(err) => err.to_string(),
            Self::Io { message, path } => match path {
                Some(p) => format!("IO error for '{}': {}", p.display(), message),
                None => format!("IO error: {}", message),
            },
            Self::UnsupportedEncoding { encoding } => {
                format!("Unsupported output encoding: {}", encoding)
            }
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// INF parsing errors with source line information
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
    pub line_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, line: Option<usize>) -> Self {
        Self {
            message,
            line,
            line_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.line_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
