//! Core conversion engine for INF to JSON transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::stats::ConversionStatistics;
use crate::error::ConversionResult;
use crate::formatter;
use crate::parser;
use crate::validation;
use std::time::Instant;

/// Output of one conversion run
#[derive(Debug, Clone)]
pub struct JsonData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl JsonData {
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone)]
pub struct ConversionMetadata {
    pub input_size: u64,
    pub output_size: u64,
    pub section_count: usize,
    pub entry_count: usize,
    pub inactive_entry_count: usize,
    pub comment_count: usize,
    pub processing_time_ms: u64,
    /// Advisory conditions tolerated outside strict mode
    pub warnings: Vec<String>,
}

impl ConversionMetadata {
    pub fn statistics(&self) -> ConversionStatistics {
        ConversionStatistics::for_conversion(
            self.input_size,
            self.output_size,
            self.section_count,
            self.entry_count,
            self.inactive_entry_count,
            std::time::Duration::from_millis(self.processing_time_ms),
        )
    }
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Run the full parse, validate, serialize pipeline over INF text.
    ///
    /// Dry runs take this exact path; only the caller's final write is
    /// gated on the flag, so outcomes are identical either way.
    pub fn convert(&self, text: &str) -> ConversionResult<JsonData> {
        let start_time = Instant::now();

        // Configuration bounds are re-checked here even though the CLI
        // layer validates them, for library callers
        validation::check_config(&self.config)?;

        let document = parser::parse(text, &self.config)?;

        let advisories = validation::enforce_strict(&document, &self.config)?;

        let content = if self.config.preserve_comments {
            formatter::jsonc::serialize_with_comments(&document, &self.config)?
        } else {
            formatter::serialize(&document, &self.config)?
        };

        let metadata = ConversionMetadata {
            input_size: text.len() as u64,
            output_size: content.len() as u64,
            section_count: document.active_section_count(),
            entry_count: document.entry_count(),
            inactive_entry_count: document.inactive_entry_count(),
            comment_count: document.comment_count(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
            warnings: advisories.iter().map(|a| a.to_string()).collect(),
        };

        Ok(JsonData::new(content, metadata))
    }
}

/// Convert INF text with an explicit configuration
pub fn convert_inf_to_json(text: &str, config: &ConversionConfig) -> ConversionResult<JsonData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert(text)
}
