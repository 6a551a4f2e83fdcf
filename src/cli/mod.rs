//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::conversion::config::{ConversionConfig, Encoding};
use crate::error::{ConversionError, ConversionResult};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "infconv")]
#[command(about = "Convert INF/INI configuration files to JSON or JSONC")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input INF file or directory
    #[arg()]
    pub input: Option<PathBuf>,

    /// Output file path (default: derived from input, or stdout for stdin)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read INF text from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Keep every value as a string, no type detection
    #[arg(long)]
    pub no_type_conversion: bool,

    /// Strip one pair of surrounding quotes from values
    #[arg(long)]
    pub strip_quotes: bool,

    /// Convert empty values to JSON null
    #[arg(long)]
    pub empty_as_null: bool,

    /// Convert yes/no values (any case) to JSON booleans
    #[arg(long)]
    pub yes_no_as_boolean: bool,

    /// Emit JSONC preserving source comments
    #[arg(long)]
    pub preserve_comments: bool,

    /// Escalate warnings (duplicate keys, empty sections) to errors
    #[arg(long)]
    pub strict: bool,

    /// Run the full pipeline but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Maximum number of sections per file (default: 10000)
    #[arg(long)]
    pub max_sections: Option<usize>,

    /// Maximum input file size in MB (default: 100)
    #[arg(long)]
    pub max_file_size: Option<usize>,

    /// Maximum output nesting depth (default: 10)
    #[arg(long)]
    pub depth: Option<usize>,

    /// Section name for keys appearing before any header
    #[arg(long, default_value = "_global_")]
    pub default_section: String,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = EncodingArg::Utf8)]
    pub encoding: EncodingArg,

    /// Spaces per indentation level (0-8, default: 2)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Disable pretty-printing (plain JSON mode only)
    #[arg(long)]
    pub plain: bool,

    /// Overwrite existing output files without asking
    #[arg(long)]
    pub force: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// Output encodings accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingArg {
    #[value(name = "utf8")]
    Utf8,
    #[value(name = "ascii")]
    Ascii,
    #[value(name = "unicode", alias = "utf16")]
    Unicode,
    #[value(name = "utf7")]
    Utf7,
    #[value(name = "utf32")]
    Utf32,
    #[value(name = "default")]
    Default,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Utf8 => Encoding::Utf8,
            EncodingArg::Ascii => Encoding::Ascii,
            EncodingArg::Unicode => Encoding::Unicode,
            EncodingArg::Utf7 => Encoding::Utf7,
            EncodingArg::Utf32 => Encoding::Utf32,
            EncodingArg::Default => Encoding::Default,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let defaults = ConversionConfig::default();
        let config = ConversionConfig {
            no_type_conversion: args.no_type_conversion,
            strip_quotes: args.strip_quotes,
            empty_as_null: args.empty_as_null,
            yes_no_as_boolean: args.yes_no_as_boolean,
            preserve_comments: args.preserve_comments,
            strict: args.strict,
            dry_run: args.dry_run,
            max_sections: args.max_sections.unwrap_or(defaults.max_sections),
            max_file_size_mb: args.max_file_size.unwrap_or(defaults.max_file_size_mb),
            max_depth: args.depth.unwrap_or(defaults.max_depth),
            default_section: args.default_section.clone(),
            encoding: args.encoding.into(),
            indent_size: args.indent.unwrap_or(defaults.indent_size),
            pretty: !args.plain,
        };

        config.validate().map_err(ConversionError::validation)?;

        Ok(config)
    }

    /// Check if we should continue on error
    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        if self.args.stdin {
            "standard input".to_string()
        } else if let Some(input) = &self.args.input {
            format!("'{}'", input.display())
        } else {
            "no input specified".to_string()
        }
    }
}

/// Encode output text to bytes according to the configured encoding
pub fn encode_output(text: &str, encoding: Encoding) -> ConversionResult<Vec<u8>> {
    match encoding {
        Encoding::Utf8 | Encoding::Default => Ok(text.as_bytes().to_vec()),
        Encoding::Ascii => {
            if let Some(ch) = text.chars().find(|c| !c.is_ascii()) {
                return Err(ConversionError::validation(format!(
                    "Output contains non-ASCII character '{}' but encoding is ascii",
                    ch
                )));
            }
            Ok(text.as_bytes().to_vec())
        }
        Encoding::Unicode => {
            // UTF-16LE with BOM
            let mut bytes = vec![0xFF, 0xFE];
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
            Ok(bytes)
        }
        Encoding::Utf32 => {
            // UTF-32LE with BOM
            let mut bytes = vec![0xFF, 0xFE, 0x00, 0x00];
            for ch in text.chars() {
                bytes.extend_from_slice(&(ch as u32).to_le_bytes());
            }
            Ok(bytes)
        }
        Encoding::Utf7 => Err(ConversionError::unsupported_encoding("utf7")),
    }
}

/// Ask before overwriting an existing output file.
///
/// Returns false when the user declines; errors when no terminal is
/// available to ask and `--force` was not given.
pub fn confirm_overwrite(path: &Path, force: bool) -> ConversionResult<bool> {
    if force || !path.exists() {
        return Ok(true);
    }

    if !atty::is(atty::Stream::Stdin) {
        return Err(ConversionError::validation(format!(
            "Output file '{}' exists; use --force to overwrite",
            path.display()
        )));
    }

    eprint!("Overwrite '{}'? [y/N] ", path.display());
    std::io::stderr().flush().ok();

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer).map_err(|e| {
        ConversionError::io(format!("Failed to read confirmation: {}", e), None)
    })?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                println!("{} {}", console::style("✓").green(), message);
            } else {
                println!("✓ {}", message);
            }
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        if Self::should_use_color() {
            eprintln!("{} {}", console::style("✗").red(), message);
        } else {
            eprintln!("✗ {}", message);
        }
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                eprintln!("{} {}", console::style("⚠").yellow(), message);
            } else {
                eprintln!("⚠ {}", message);
            }
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Get the terminal size
    pub fn get_terminal_size() -> (u16, u16) {
        terminal_size::terminal_size()
            .map(|(width, height)| (width.0, height.0))
            .unwrap_or((80, 24))
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    match error {
        ConversionError::LimitExceeded(limit) => {
            if limit.to_string().contains("sections") {
                eprintln!("\nTip: Use --max-sections to raise the section limit");
            } else {
                eprintln!("\nTip: Use --max-file-size to raise the input size limit");
            }
        }
        ConversionError::Parse(_) => {
            eprintln!("\nTip: Check the reported line for a malformed header or key");
        }
        ConversionError::Validation { .. } => {
            eprintln!("\nTip: Run without --strict to downgrade advisories to warnings");
        }
        _ => {}
    }

    eprintln!("\nTry 'infconv --help' for usage information.");
}

/// Command execution result
pub type CliResult<T> = Result<T, ConversionError>;
