//! Structural validation and strict-mode escalation

use crate::conversion::config::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};
use crate::parser::document::Document;
use std::collections::HashSet;
use std::fmt;

/// Conditions tolerated as warnings unless strict mode is active
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    DuplicateKey { section: String, key: String },
    EmptySection { section: String },
    UnreconstructableEntry { section: String, key: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::DuplicateKey { section, key } => {
                write!(f, "Duplicate key '{}' in section [{}]", key, section)
            }
            Advisory::EmptySection { section } => {
                write!(f, "Section [{}] has no entries", section)
            }
            Advisory::UnreconstructableEntry { section, key } => write!(
                f,
                "Commented-out entry '{}' in section [{}] cannot be reconstructed",
                key, section
            ),
        }
    }
}

/// Reject out-of-range configuration before any parsing starts.
///
/// The CLI layer range-checks these too, but the core enforces them on its
/// own so library callers get the same guarantees.
pub fn check_config(config: &ConversionConfig) -> ConversionResult<()> {
    config.validate().map_err(ConversionError::validation)
}

/// Collect every advisory condition present in the parsed document
pub fn collect_advisories(document: &Document) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    for section in &document.sections {
        if section.is_active && section.entries.is_empty() {
            advisories.push(Advisory::EmptySection {
                section: section.name.clone(),
            });
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &section.entries {
            if entry.is_active && !seen.insert(entry.key.as_str()) {
                advisories.push(Advisory::DuplicateKey {
                    section: section.name.clone(),
                    key: entry.key.clone(),
                });
            }

            if !entry.is_active && !entry.is_reconstructable() {
                advisories.push(Advisory::UnreconstructableEntry {
                    section: section.name.clone(),
                    key: entry.key.clone(),
                });
            }
        }
    }

    advisories
}

/// Return the advisories, or fail on the first one under strict mode
pub fn enforce_strict(
    document: &Document,
    config: &ConversionConfig,
) -> ConversionResult<Vec<Advisory>> {
    let advisories = collect_advisories(document);
    if config.strict {
        if let Some(first) = advisories.first() {
            return Err(ConversionError::validation(first.to_string()));
        }
    }
    Ok(advisories)
}

/// Ceiling check on the emitter's nesting depth.
///
/// The document model nests two levels deep by construction; the check
/// keeps future structural extensions from silently exceeding the bound.
pub fn check_depth(required: usize, config: &ConversionConfig) -> ConversionResult<()> {
    if required > config.max_depth {
        return Err(ConversionError::validation(format!(
            "Output nesting depth {} exceeds configured maximum ({})",
            required, config.max_depth
        )));
    }
    Ok(())
}
