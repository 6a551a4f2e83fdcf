// Allow dead code for features exported but not yet used by the CLI
#![allow(dead_code)]

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

mod cli;
mod conversion;
mod error;
mod formatter;
mod parser;
mod validation;

use crate::cli::{path_mapping, Args, CliConfig, CliUtils};
use crate::conversion::stats::ConversionStatistics;
use crate::conversion::{limits, ConversionEngine};
use crate::error::{ConversionError, ConversionResult};

fn main() {
    let args = Args::parse();

    let cli_config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(error) => {
            cli::handle_error(&error);
            std::process::exit(2);
        }
    };

    if let Err(error) = run(&cli_config) {
        cli::handle_error(&error);
        std::process::exit(1);
    }
}

fn run(cli_config: &CliConfig) -> ConversionResult<()> {
    if cli_config.is_verbose() {
        eprintln!("Converting {}", cli_config.input_description());
    }

    if cli_config.args.stdin {
        convert_stdin(cli_config)
    } else if let Some(input) = cli_config.args.input.clone() {
        if input.is_file() {
            convert_file(&input, cli_config)
        } else if input.is_dir() {
            convert_directory(&input, cli_config)
        } else {
            Err(ConversionError::io(
                "Input path does not exist".to_string(),
                Some(input),
            ))
        }
    } else {
        Err(ConversionError::validation(
            "No input provided. Use --stdin or provide an input path",
        ))
    }
}

fn convert_stdin(cli_config: &CliConfig) -> ConversionResult<()> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| ConversionError::io(format!("Failed to read stdin: {}", e), None))?;

    let engine = ConversionEngine::new(cli_config.conversion_config.clone());
    let result = engine.convert(&text)?;

    report_warnings(&result.metadata.warnings, cli_config);

    match &cli_config.args.output {
        Some(output_path) => write_output(output_path, &result.content, cli_config)?,
        None => println!("{}", result.content),
    }

    if cli_config.want_stats() {
        print_statistics(&result.metadata.statistics(), cli_config.is_quiet());
    }

    Ok(())
}

fn convert_file(input_path: &Path, cli_config: &CliConfig) -> ConversionResult<()> {
    let config = &cli_config.conversion_config;

    // Reject oversized files before loading them
    limits::check_source_size_before_read(input_path, config)?;

    let text = read_input(input_path)?;
    let engine = ConversionEngine::new(config.clone());
    let result = engine.convert(&text)?;

    report_warnings(&result.metadata.warnings, cli_config);

    let output_path = cli_config.args.output.clone().unwrap_or_else(|| {
        path_mapping::derive_output_path(input_path, config.output_extension())
    });

    write_output(&output_path, &result.content, cli_config)?;

    if cli_config.want_stats() {
        print_statistics(&result.metadata.statistics(), cli_config.is_quiet());
    }

    Ok(())
}

fn convert_directory(input_dir: &Path, cli_config: &CliConfig) -> ConversionResult<()> {
    let config = &cli_config.conversion_config;

    let output_dir = cli_config.args.output.clone().ok_or_else(|| {
        ConversionError::validation("Output directory required for directory conversion")
    })?;

    let inf_files = find_inf_files(input_dir, cli_config.args.recursive)?;
    if inf_files.is_empty() {
        if !cli_config.is_quiet() {
            println!("No INF files found in {}", input_dir.display());
        }
        return Ok(());
    }

    if !cli_config.is_quiet() {
        println!("Found {} INF files", inf_files.len());
    }

    let progress = if !cli_config.is_quiet() && inf_files.len() > 1 {
        Some(CliUtils::create_progress_bar(inf_files.len() as u64))
    } else {
        None
    };

    let mut totals = ConversionStatistics::new();
    let mut failures = 0usize;

    for inf_file in &inf_files {
        let relative = inf_file.strip_prefix(input_dir).unwrap_or(inf_file);
        let output_file = path_mapping::map_input_to_output(
            input_dir,
            inf_file,
            &output_dir,
            config.output_extension(),
        );

        match convert_single_file(inf_file, &output_file, cli_config) {
            Ok(stats) => {
                totals.merge(&stats);
                if let Some(pb) = &progress {
                    pb.set_message(relative.display().to_string());
                    pb.inc(1);
                } else {
                    CliUtils::show_success(
                        &format!("{} -> {}", relative.display(), output_file.display()),
                        cli_config.is_quiet(),
                    );
                }
            }
            Err(error) => {
                failures += 1;
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
                CliUtils::show_error(&format!(
                    "Error converting {}: {}",
                    relative.display(),
                    error.user_message()
                ));
                if !cli_config.continue_on_error() {
                    if let Some(pb) = &progress {
                        pb.finish_and_clear();
                    }
                    return Err(error);
                }
            }
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    if cli_config.want_stats() {
        print_statistics(&totals, cli_config.is_quiet());
    }

    if failures > 0 {
        CliUtils::show_warning(
            &format!("{} of {} files failed", failures, inf_files.len()),
            cli_config.is_quiet(),
        );
    }

    Ok(())
}

fn convert_single_file(
    input_path: &Path,
    output_path: &Path,
    cli_config: &CliConfig,
) -> ConversionResult<ConversionStatistics> {
    let config = &cli_config.conversion_config;

    limits::check_source_size_before_read(input_path, config)?;

    let text = read_input(input_path)?;
    let engine = ConversionEngine::new(config.clone());
    let result = engine.convert(&text)?;

    if !config.dry_run {
        let bytes = cli::encode_output(&result.content, config.encoding)?;
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConversionError::io(
                    format!("Failed to create output directory: {}", e),
                    Some(parent.to_path_buf()),
                )
            })?;
        }
        std::fs::write(output_path, bytes).map_err(|e| {
            ConversionError::io(
                format!("Failed to write output: {}", e),
                Some(output_path.to_path_buf()),
            )
        })?;
    }

    Ok(result.metadata.statistics())
}

fn write_output(output_path: &Path, content: &str, cli_config: &CliConfig) -> ConversionResult<()> {
    let config = &cli_config.conversion_config;

    if !cli::confirm_overwrite(output_path, cli_config.args.force)? {
        CliUtils::show_warning(
            &format!("Skipped existing file {}", output_path.display()),
            cli_config.is_quiet(),
        );
        return Ok(());
    }

    let bytes = cli::encode_output(content, config.encoding)?;

    if config.dry_run {
        CliUtils::show_success(
            &format!(
                "Dry run: would write {} to {}",
                CliUtils::format_file_size(bytes.len() as u64),
                output_path.display()
            ),
            cli_config.is_quiet(),
        );
        return Ok(());
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConversionError::io(
                    format!("Failed to create output directory: {}", e),
                    Some(parent.to_path_buf()),
                )
            })?;
        }
    }

    std::fs::write(output_path, bytes).map_err(|e| {
        ConversionError::io(
            format!("Failed to write output: {}", e),
            Some(output_path.to_path_buf()),
        )
    })?;

    CliUtils::show_success(
        &format!("Converted to: {}", output_path.display()),
        cli_config.is_quiet(),
    );

    Ok(())
}

fn read_input(path: &Path) -> ConversionResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ConversionError::io(
            format!("Failed to read input: {}", e),
            Some(path.to_path_buf()),
        )
    })
}

fn find_inf_files(dir: &Path, recursive: bool) -> ConversionResult<Vec<PathBuf>> {
    let mut inf_files = Vec::new();

    let is_inf = |path: &Path| {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("inf") || ext.eq_ignore_ascii_case("ini"))
            .unwrap_or(false)
    };

    if recursive {
        for entry in walkdir::WalkDir::new(dir) {
            let entry = entry.map_err(|e| {
                ConversionError::io(format!("Failed to walk directory: {}", e), None)
            })?;
            let path = entry.path();
            if path.is_file() && is_inf(path) {
                inf_files.push(path.to_path_buf());
            }
        }
    } else {
        let entries = std::fs::read_dir(dir).map_err(|e| {
            ConversionError::io(
                format!("Failed to read directory: {}", e),
                Some(dir.to_path_buf()),
            )
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| {
                ConversionError::io(format!("Failed to read directory entry: {}", e), None)
            })?;
            let path = entry.path();
            if path.is_file() && is_inf(&path) {
                inf_files.push(path);
            }
        }
    }

    inf_files.sort();
    Ok(inf_files)
}

fn report_warnings(warnings: &[String], cli_config: &CliConfig) {
    for warning in warnings {
        CliUtils::show_warning(warning, cli_config.is_quiet());
    }
}

fn print_statistics(stats: &ConversionStatistics, quiet: bool) {
    if quiet {
        return;
    }

    println!("\nConversion Statistics:");
    println!(
        "Input size: {}",
        CliUtils::format_file_size(stats.input_size_bytes)
    );
    println!(
        "Output size: {}",
        CliUtils::format_file_size(stats.output_size_bytes)
    );
    println!("Sections: {}", stats.section_count);
    println!("Entries: {}", stats.entry_count);
    if stats.inactive_entry_count > 0 {
        println!("Commented-out entries: {}", stats.inactive_entry_count);
    }
    if stats.file_count > 1 {
        println!("Files: {}", stats.file_count);
    }
    println!(
        "Processing time: {}",
        CliUtils::format_duration(std::time::Duration::from_millis(stats.processing_time_ms))
    );
}
