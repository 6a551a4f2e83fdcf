//! Value type conversion for raw INF values
//!
//! Conversion is a pure, total function from the raw value text to a typed
//! value. Quote stripping is a textual pre-processing step and runs before
//! any literal detection, so a quoted `"Yes"` is still eligible for the
//! yes/no mapping once its quotes are gone.

use crate::conversion::config::ConversionConfig;

/// Typed view of a raw INF value
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

/// Convert a raw value into its typed form under the active flags.
///
/// Precedence, short-circuiting at the first match:
/// 1. NoTypeConversion: the raw text verbatim, not even quote-stripped
/// 2. EmptyAsNull on the empty value
/// 3. YesNoAsBoolean on case-insensitive yes/no
/// 4. Integer, float, and true/false literal detection
/// 5. String fallback
pub fn convert(raw: &str, config: &ConversionConfig) -> TypedValue {
    if config.no_type_conversion {
        return TypedValue::String(raw.to_string());
    }

    let text = if config.strip_quotes {
        strip_surrounding_quotes(raw)
    } else {
        raw
    };

    if config.empty_as_null && text.is_empty() {
        return TypedValue::Null;
    }

    if config.yes_no_as_boolean {
        if text.eq_ignore_ascii_case("yes") {
            return TypedValue::Boolean(true);
        }
        if text.eq_ignore_ascii_case("no") {
            return TypedValue::Boolean(false);
        }
    }

    if is_integer_literal(text) {
        if let Ok(value) = text.parse::<i64>() {
            return TypedValue::Integer(value);
        }
    }

    if is_float_literal(text) {
        if let Ok(value) = text.parse::<f64>() {
            return TypedValue::Float(value);
        }
    }

    if text.eq_ignore_ascii_case("true") {
        return TypedValue::Boolean(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return TypedValue::Boolean(false);
    }

    TypedValue::String(text.to_string())
}

/// Strip exactly one pair of matching unescaped surrounding quotes
fn strip_surrounding_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() < 2 {
        return text;
    }

    let first = bytes[0];
    let last = bytes[bytes.len() - 1];
    if first != last || (first != b'"' && first != b'\'') {
        return text;
    }

    // The closing quote must not itself be escaped
    if bytes.len() >= 3 && bytes[bytes.len() - 2] == b'\\' {
        return text;
    }

    &text[1..text.len() - 1]
}

/// `^-?\d+$`
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `^-?\d+\.\d+$`
fn is_float_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
