//! INF/INI to JSON Converter
//!
//! A Rust CLI tool and library for converting INF-style configuration
//! files to JSON, or to JSONC with the source comment structure preserved
//! as reversible annotations.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use conversion::{convert_inf_to_json, ConversionConfig, Encoding, JsonData, TypedValue};
pub use error::{ConversionError, ConversionResult, ParseError};
pub use parser::document::{Comment, CommentKind, Document, Entry, Section};

/// Convert INF text to JSON with default configuration
pub fn convert_inf(text: &str) -> Result<String, ConversionError> {
    let config = ConversionConfig::default();
    convert_inf_with_config(text, &config)
}

/// Convert INF text to JSON (or JSONC) with custom configuration
pub fn convert_inf_with_config(
    text: &str,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let result = convert_inf_to_json(text, config)?;
    Ok(result.content)
}
