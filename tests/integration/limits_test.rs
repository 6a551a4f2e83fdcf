//! Integration tests for resource limits and strict-mode enforcement

#[cfg(test)]
mod limits_tests {
    use assert_matches::assert_matches;
    use infconv::conversion::limits;
    use infconv::error::LimitExceededError;
    use infconv::{convert_inf_with_config, ConversionConfig, ConversionError};
    use std::fs;
    use tempfile::tempdir;

    fn sections(count: usize) -> String {
        (0..count)
            .map(|i| format!("[Section{}]\nKey=1\n", i))
            .collect()
    }

    #[test]
    fn test_section_count_at_limit_passes() {
        let config = ConversionConfig::default().with_max_sections(5);
        assert!(convert_inf_with_config(&sections(5), &config).is_ok());
    }

    #[test]
    fn test_section_count_over_limit_fails() {
        let config = ConversionConfig::default().with_max_sections(5);
        let err = convert_inf_with_config(&sections(6), &config).unwrap_err();
        assert_matches!(
            err,
            ConversionError::LimitExceeded(LimitExceededError::Sections { limit: 5 })
        );
        assert_eq!(
            err.user_message(),
            "Number of sections exceeds maximum allowed (5)"
        );
    }

    #[test]
    fn test_commented_section_headers_do_not_count() {
        let config = ConversionConfig::default().with_max_sections(2);
        let source = "[A]\nKey=1\n;[NotReal]\n;Gone=1\n[B]\nKey=2\n";
        assert!(convert_inf_with_config(source, &config).is_ok());
    }

    #[test]
    fn test_limit_failure_produces_no_partial_output() {
        let config = ConversionConfig::default().with_max_sections(1);
        assert!(convert_inf_with_config("[A]\nKey=1\n[B]\nKey=2\n", &config).is_err());
    }

    #[test]
    fn test_input_size_over_limit_fails() {
        let config = ConversionConfig::default().with_max_file_size_mb(1);
        let mut big = String::from("[A]\n");
        big.push_str(&"Key=aaaaaaaaaaaaaaaa\n".repeat(60_000));
        assert!(big.len() > 1024 * 1024);

        let err = convert_inf_with_config(&big, &config).unwrap_err();
        assert_matches!(
            err,
            ConversionError::LimitExceeded(LimitExceededError::FileSize { limit_mb: 1, .. })
        );
    }

    #[test]
    fn test_source_size_checked_before_read() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("big.inf");
        fs::write(&path, vec![b'x'; 2 * 1024 * 1024]).unwrap();

        let config = ConversionConfig::default().with_max_file_size_mb(1);
        let err = limits::check_source_size_before_read(&path, &config).unwrap_err();
        assert_matches!(err, ConversionError::LimitExceeded(_));

        let small = tmp.path().join("small.inf");
        fs::write(&small, "[A]\nKey=1\n").unwrap();
        assert!(limits::check_source_size_before_read(&small, &config).is_ok());
    }

    #[test]
    fn test_zero_bounds_rejected_as_validation_errors() {
        for config in [
            ConversionConfig::default().with_max_sections(0),
            ConversionConfig::default().with_max_file_size_mb(0),
            ConversionConfig::default().with_max_depth(0),
        ] {
            let err = convert_inf_with_config("[A]\nKey=1\n", &config).unwrap_err();
            assert_matches!(err, ConversionError::Validation { .. });
        }
    }

    #[test]
    fn test_depth_bound_below_output_shape_fails() {
        let config = ConversionConfig::default().with_max_depth(1);
        let err = convert_inf_with_config("[A]\nKey=1\n", &config).unwrap_err();
        assert_matches!(err, ConversionError::Validation { .. });
    }

    #[test]
    fn test_strict_escape_rejects_raw_control_characters() {
        let config = ConversionConfig::default().with_strict(true);
        let err = convert_inf_with_config("[A]\nKey=bad\u{0001}value\n", &config).unwrap_err();
        assert_matches!(err, ConversionError::Escape(_));
    }

    #[test]
    fn test_lenient_escape_encodes_control_characters() {
        let config = ConversionConfig::default();
        let output = convert_inf_with_config("[A]\nKey=bad\u{0001}value\n", &config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["A"]["Key"], "bad\u{0001}value");
    }

    #[test]
    fn test_dry_run_reports_same_errors() {
        let config = ConversionConfig::default()
            .with_max_sections(1)
            .with_dry_run(true);
        let err = convert_inf_with_config(&sections(2), &config).unwrap_err();
        assert_matches!(err, ConversionError::LimitExceeded(_));
    }
}
