//! INF parsing module
//!
//! Parsing is a two-pass process: the input is first tokenized into a flat
//! sequence of line tokens, then folded into an ordered `Document` that
//! associates comments with their structural neighbors.

pub mod document;

use crate::conversion::config::ConversionConfig;
use crate::conversion::limits;
use crate::error::{ConversionResult, ParseError, ParseResult};

pub use document::{Comment, CommentKind, Document, Entry, Section};

/// A classified source line
#[derive(Debug, Clone, PartialEq)]
pub enum LineToken {
    /// `[Name]` section header
    Header { name: String },
    /// `Key=Value` pair, optionally with a same-line comment after the value
    KeyValue {
        key: String,
        value: String,
        inline_comment: Option<String>,
    },
    /// `;text` or `#text` line, marker stripped
    Comment { text: String },
    /// Whitespace-only line
    Blank,
}

/// A token together with its 1-based source line number
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub number: usize,
    pub token: LineToken,
}

/// Parse INF text into an ordered document.
///
/// The input size is checked once before any scanning; the section count
/// limit is enforced the instant it is exceeded during folding.
pub fn parse(text: &str, config: &ConversionConfig) -> ConversionResult<Document> {
    limits::check_input_size(text, config)?;
    let lines = tokenize(text)?;
    document::fold(&lines, config)
}

/// Tokenize INF text into a flat sequence of classified lines
pub fn tokenize(text: &str) -> ParseResult<Vec<Line>> {
    let mut tokens = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            tokens.push(Line {
                number,
                token: LineToken::Blank,
            });
        } else if let Some(rest) = trimmed
            .strip_prefix(';')
            .or_else(|| trimmed.strip_prefix('#'))
        {
            tokens.push(Line {
                number,
                token: LineToken::Comment {
                    text: rest.trim().to_string(),
                },
            });
        } else if trimmed.starts_with('[') {
            let end = trimmed.find(']').ok_or_else(|| {
                ParseError::new("Unterminated section header".to_string(), Some(number))
                    .with_preview(trimmed.to_string())
            })?;

            let name = trimmed[1..end].trim();
            if name.is_empty() {
                return Err(ParseError::new(
                    "Section header has an empty name".to_string(),
                    Some(number),
                )
                .with_preview(trimmed.to_string()));
            }

            tokens.push(Line {
                number,
                token: LineToken::Header {
                    name: name.to_string(),
                },
            });

            // Text after the closing bracket is only tolerated as a comment
            let rest = trimmed[end + 1..].trim();
            if !rest.is_empty() {
                if let Some(comment) = rest.strip_prefix(';') {
                    tokens.push(Line {
                        number,
                        token: LineToken::Comment {
                            text: comment.trim().to_string(),
                        },
                    });
                } else {
                    return Err(ParseError::new(
                        "Unexpected text after section header".to_string(),
                        Some(number),
                    )
                    .with_preview(trimmed.to_string()));
                }
            }
        } else if let Some((lhs, rhs)) = trimmed.split_once('=') {
            let key = lhs.trim();
            if key.is_empty() {
                return Err(ParseError::new(
                    "Key name is empty".to_string(),
                    Some(number),
                )
                .with_preview(trimmed.to_string()));
            }

            let (value, inline_comment) = split_inline_comment(rhs);
            tokens.push(Line {
                number,
                token: LineToken::KeyValue {
                    key: key.to_string(),
                    value,
                    inline_comment,
                },
            });
        } else {
            // Bare key with no `=` suffix: tolerated as a key with empty value
            tokens.push(Line {
                number,
                token: LineToken::KeyValue {
                    key: trimmed.to_string(),
                    value: String::new(),
                    inline_comment: None,
                },
            });
        }
    }

    Ok(tokens)
}

/// Split a raw value into value text and an optional same-line comment.
///
/// Only `;` starts an inline comment, and only at a whitespace boundary
/// outside quotes, so values like `path;v2` or quoted literals survive.
fn split_inline_comment(rhs: &str) -> (String, Option<String>) {
    let mut quote: Option<char> = None;
    let mut prev_is_boundary = true;

    for (i, ch) in rhs.char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                ';' if prev_is_boundary => {
                    let value = rhs[..i].trim().to_string();
                    let comment = rhs[i + 1..].trim().to_string();
                    return (value, Some(comment));
                }
                _ => {}
            },
        }
        prev_is_boundary = ch.is_whitespace();
    }

    (rhs.trim().to_string(), None)
}

/// Decode the content of a comment line as a commented-out section header
pub(crate) fn decode_commented_header(text: &str) -> Option<String> {
    let inner = text.trim().strip_prefix('[')?.strip_suffix(']')?;
    let name = inner.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Decode the content of a comment line as a commented-out key/value pair
pub(crate) fn decode_commented_key_value(text: &str) -> Option<(String, String)> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        return None;
    }
    let (lhs, rhs) = trimmed.split_once('=')?;
    let key = lhs.trim();
    if key.is_empty() {
        None
    } else {
        Some((key.to_string(), rhs.trim().to_string()))
    }
}
