//! JSON string escaping
//!
//! A single left-to-right scan emits one escape sequence per input
//! character. Chained find/replace passes over the same buffer are not
//! acceptable here: replacing `\` after `"` (or vice versa) re-escapes
//! characters introduced by the earlier pass and corrupts the output.

use crate::error::EscapeError;

/// Escape text into a JSON-string-body-safe sequence, best effort.
///
/// Control characters outside the short-escape set become `\uXXXX`.
pub fn escape(text: &str) -> String {
    // Best-effort mode cannot fail
    escape_impl(text, false).unwrap_or_default()
}

/// Escape text, rejecting control characters without a short escape
pub fn escape_strict(text: &str) -> Result<String, EscapeError> {
    escape_impl(text, true)
}

fn escape_impl(text: &str, strict: bool) -> Result<String, EscapeError> {
    let mut result = String::with_capacity(text.len() + 2);

    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            _ if ch.is_control() => {
                if strict {
                    return Err(EscapeError::new(ch));
                }
                result.push_str(&format!("\\u{:04x}", ch as u32));
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}
