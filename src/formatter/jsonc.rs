//! Comment-aware JSONC rendering
//!
//! Same structural traversal as plain JSON, with source comments emitted
//! as `//` lines and commented-out entries rendered as reversible
//! commented JSON lines.

use crate::conversion::config::ConversionConfig;
use crate::error::ConversionResult;
use crate::formatter::JsonEmitter;
use crate::parser::document::Document;

/// Render a document as JSONC.
///
/// Comments are strictly additive: removing every `//`-prefixed line
/// reproduces the plain-mode JSON byte for byte.
pub fn serialize_with_comments(
    document: &Document,
    config: &ConversionConfig,
) -> ConversionResult<String> {
    JsonEmitter::new(config, true).emit(document)
}
