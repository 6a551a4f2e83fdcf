//! Input size limit checks

use crate::conversion::config::ConversionConfig;
use crate::error::{ConversionError, ConversionResult, LimitExceededError};
use std::path::Path;

/// Check a file's size on disk before reading it, so oversized inputs are
/// rejected without ever being loaded into memory.
pub fn check_source_size_before_read(
    path: &Path,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        ConversionError::io(
            format!("Failed to stat input: {}", e),
            Some(path.to_path_buf()),
        )
    })?;

    if metadata.len() > config.max_file_size_bytes() {
        return Err(LimitExceededError::FileSize {
            size: metadata.len(),
            limit_mb: config.max_file_size_mb,
        }
        .into());
    }

    Ok(())
}

/// Check in-memory input text against the configured size limit.
///
/// Runs once before any scanning; on violation the parser does no work.
pub fn check_input_size(text: &str, config: &ConversionConfig) -> ConversionResult<()> {
    let size = text.len() as u64;
    if size > config.max_file_size_bytes() {
        return Err(LimitExceededError::FileSize {
            size,
            limit_mb: config.max_file_size_mb,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_input_size_within_limit() {
        let config = ConversionConfig::default();
        assert!(check_input_size("[A]\nKey=1\n", &config).is_ok());
    }

    #[test]
    fn test_check_input_size_exceeds() {
        let config = ConversionConfig::default().with_max_file_size_mb(1);
        let text = "x".repeat(1024 * 1024 + 1);
        let err = check_input_size(&text, &config).unwrap_err();
        assert_matches!(
            err,
            ConversionError::LimitExceeded(LimitExceededError::FileSize { limit_mb: 1, .. })
        );
    }

    #[test]
    fn test_check_source_size_before_read_small() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "[A]").unwrap();

        let config = ConversionConfig::default();
        assert!(check_source_size_before_read(tmp.path(), &config).is_ok());
    }

    #[test]
    fn test_check_source_size_before_read_large() {
        let mut tmp = NamedTempFile::new().unwrap();
        let payload = vec![b'a'; 1024 * 1024 + 10];
        tmp.write_all(&payload).unwrap();

        let config = ConversionConfig::default().with_max_file_size_mb(1);
        let res = check_source_size_before_read(tmp.path(), &config);
        assert_matches!(res.unwrap_err(), ConversionError::LimitExceeded(_));
    }
}
