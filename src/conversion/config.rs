//! Configuration options for INF to JSON conversion

/// Output text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8 without BOM
    Utf8,
    /// 7-bit ASCII, rejects non-ASCII output
    Ascii,
    /// UTF-16 little endian with BOM (Windows "Unicode")
    Unicode,
    /// UTF-7 (recognized but not supported for output)
    Utf7,
    /// UTF-32 little endian with BOM
    Utf32,
    /// Platform default, treated as UTF-8
    Default,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Ascii => "ascii",
            Encoding::Unicode => "unicode",
            Encoding::Utf7 => "utf7",
            Encoding::Utf32 => "utf32",
            Encoding::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "ascii" => Ok(Encoding::Ascii),
            "unicode" | "utf16" | "utf-16" => Ok(Encoding::Unicode),
            "utf7" | "utf-7" => Ok(Encoding::Utf7),
            "utf32" | "utf-32" => Ok(Encoding::Utf32),
            "default" => Ok(Encoding::Default),
            other => Err(format!(
                "Invalid encoding '{}'. Use 'utf8', 'ascii', 'unicode', 'utf7', 'utf32', or 'default'",
                other
            )),
        }
    }
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Keep every value as a string, no literal detection
    pub no_type_conversion: bool,
    /// Strip one pair of surrounding quotes before type detection
    pub strip_quotes: bool,
    /// Map empty values to JSON null
    pub empty_as_null: bool,
    /// Map yes/no values (case-insensitive) to JSON booleans
    pub yes_no_as_boolean: bool,
    /// Emit JSONC with source comments preserved
    pub preserve_comments: bool,
    /// Escalate advisory conditions to hard failures
    pub strict: bool,
    /// Run the full pipeline but skip the final write
    pub dry_run: bool,
    /// Maximum number of sections accepted per file
    pub max_sections: usize,
    /// Maximum input file size in megabytes
    pub max_file_size_mb: usize,
    /// Maximum output nesting depth
    pub max_depth: usize,
    /// Section name for keys appearing before any header
    pub default_section: String,
    /// Output text encoding
    pub encoding: Encoding,
    /// Spaces per indentation level (0-8)
    pub indent_size: u8,
    /// Pretty-print output (vs compact)
    pub pretty: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            no_type_conversion: false,
            strip_quotes: false,
            empty_as_null: false,
            yes_no_as_boolean: false,
            preserve_comments: false,
            strict: false,
            dry_run: false,
            max_sections: 10_000,
            max_file_size_mb: 100,
            max_depth: 10,
            default_section: "_global_".to_string(),
            encoding: Encoding::Utf8,
            indent_size: 2,
            pretty: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable all value type detection
    pub fn with_no_type_conversion(mut self, enabled: bool) -> Self {
        self.no_type_conversion = enabled;
        self
    }

    /// Strip surrounding quotes from values
    pub fn with_strip_quotes(mut self, enabled: bool) -> Self {
        self.strip_quotes = enabled;
        self
    }

    /// Map empty values to null
    pub fn with_empty_as_null(mut self, enabled: bool) -> Self {
        self.empty_as_null = enabled;
        self
    }

    /// Map yes/no values to booleans
    pub fn with_yes_no_as_boolean(mut self, enabled: bool) -> Self {
        self.yes_no_as_boolean = enabled;
        self
    }

    /// Emit JSONC with comments preserved
    pub fn with_preserve_comments(mut self, enabled: bool) -> Self {
        self.preserve_comments = enabled;
        self
    }

    /// Escalate advisories to failures
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Skip the final write
    pub fn with_dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Set the maximum section count
    pub fn with_max_sections(mut self, max: usize) -> Self {
        self.max_sections = max;
        self
    }

    /// Set the maximum input size in megabytes
    pub fn with_max_file_size_mb(mut self, mb: usize) -> Self {
        self.max_file_size_mb = mb;
        self
    }

    /// Set the maximum output nesting depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the synthetic section name for headerless keys
    pub fn with_default_section(mut self, name: impl Into<String>) -> Self {
        self.default_section = name.into();
        self
    }

    /// Set the output encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.indent_size = size;
        Ok(self)
    }

    /// Enable/disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.max_sections < 1 {
            return Err("Maximum section count must be at least 1".to_string());
        }

        if self.max_file_size_mb < 1 {
            return Err("Maximum file size must be at least 1 MB".to_string());
        }

        if self.max_depth < 1 {
            return Err("Maximum depth must be at least 1".to_string());
        }

        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        if self.default_section.trim().is_empty() {
            return Err("Default section name must not be empty".to_string());
        }

        Ok(())
    }

    /// Maximum input size in bytes
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb as u64 * 1024 * 1024
    }

    /// Output file extension implied by this configuration
    pub fn output_extension(&self) -> &'static str {
        if self.preserve_comments {
            "jsonc"
        } else {
            "json"
        }
    }
}
