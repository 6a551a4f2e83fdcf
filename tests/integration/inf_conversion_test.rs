//! Integration tests for the INF to JSON conversion pipeline

#[cfg(test)]
mod inf_conversion_tests {
    use infconv::{convert_inf, convert_inf_with_config, ConversionConfig, ConversionError};
    use pretty_assertions::assert_eq;

    fn parse_json(text: &str) -> serde_json::Value {
        serde_json::from_str(text).unwrap_or_else(|e| panic!("Invalid JSON output: {}\n{}", e, text))
    }

    #[test]
    fn test_setup_file_conversion() {
        let source = "\
[Version]
Signature=$CHICAGO$
Class=Media

[Strings]
DiskName=Driver Disk
Vendor=Acme
";
        let json = parse_json(&convert_inf(source).unwrap());
        assert_eq!(json["Version"]["Signature"], "$CHICAGO$");
        assert_eq!(json["Version"]["Class"], "Media");
        assert_eq!(json["Strings"]["DiskName"], "Driver Disk");
        assert_eq!(json["Strings"]["Vendor"], "Acme");
    }

    #[test]
    fn test_keys_before_first_header_use_default_section() {
        let json = parse_json(&convert_inf("Orphan=1\n[Named]\nKey=2\n").unwrap());
        assert_eq!(json["_global_"]["Orphan"], 1);
        assert_eq!(json["Named"]["Key"], 2);
    }

    #[test]
    fn test_custom_default_section_name() {
        let config = ConversionConfig::default().with_default_section("preamble");
        let json = parse_json(&convert_inf_with_config("Key=1\n", &config).unwrap());
        assert_eq!(json["preamble"]["Key"], 1);
    }

    #[test]
    fn test_default_section_absent_without_orphan_keys() {
        let json = parse_json(&convert_inf("[Only]\nKey=1\n").unwrap());
        assert!(json.get("_global_").is_none());
    }

    #[test]
    fn test_type_detection_defaults() {
        let source = "[T]\nInt=42\nNeg=-7\nFloat=3.25\nBool=true\nWord=hello\nVersion=1.2.3\n";
        let json = parse_json(&convert_inf(source).unwrap());
        assert_eq!(json["T"]["Int"], 42);
        assert_eq!(json["T"]["Neg"], -7);
        assert_eq!(json["T"]["Float"], 3.25);
        assert_eq!(json["T"]["Bool"], true);
        assert_eq!(json["T"]["Word"], "hello");
        // Dotted versions are not floats
        assert_eq!(json["T"]["Version"], "1.2.3");
    }

    #[test]
    fn test_no_type_conversion_overrides_all_other_flags() {
        let config = ConversionConfig::default()
            .with_no_type_conversion(true)
            .with_yes_no_as_boolean(true)
            .with_empty_as_null(true);
        let json = parse_json(
            &convert_inf_with_config("[T]\nN=42\nYes=Yes\nEmpty=\n", &config).unwrap(),
        );
        assert_eq!(json["T"]["N"], "42");
        assert_eq!(json["T"]["Yes"], "Yes");
        assert_eq!(json["T"]["Empty"], "");
    }

    #[test]
    fn test_empty_as_null_beats_yes_no() {
        let config = ConversionConfig::default()
            .with_empty_as_null(true)
            .with_yes_no_as_boolean(true);
        let json = parse_json(&convert_inf_with_config("[T]\nE=\nB=NO\n", &config).unwrap());
        assert_eq!(json["T"]["E"], serde_json::Value::Null);
        assert_eq!(json["T"]["B"], false);
    }

    #[test]
    fn test_strip_quotes_exposes_literals_to_detection() {
        let config = ConversionConfig::default()
            .with_strip_quotes(true)
            .with_yes_no_as_boolean(true);
        let json = parse_json(
            &convert_inf_with_config("[T]\nQ=\"quoted\"\nN=\"42\"\nB='yes'\n", &config).unwrap(),
        );
        assert_eq!(json["T"]["Q"], "quoted");
        assert_eq!(json["T"]["N"], 42);
        assert_eq!(json["T"]["B"], true);
    }

    #[test]
    fn test_backslash_values_round_trip() {
        let json = parse_json(
            &convert_inf("[Paths]\nDir=C:\\Program Files\\Acme\nQuote=say \"hi\"\n").unwrap(),
        );
        assert_eq!(json["Paths"]["Dir"], "C:\\Program Files\\Acme");
        assert_eq!(json["Paths"]["Quote"], "say \"hi\"");
    }

    #[test]
    fn test_duplicate_sections_merge() {
        let json = parse_json(&convert_inf("[A]\nOne=1\n[B]\nTwo=2\n[A]\nThree=3\n").unwrap());
        assert_eq!(json["A"]["One"], 1);
        assert_eq!(json["A"]["Three"], 3);
        assert_eq!(json["B"]["Two"], 2);
    }

    #[test]
    fn test_commented_out_entries_are_dropped_in_plain_mode() {
        let output = convert_inf("[A]\nLive=1\n;Dead=2\n# also dead\n").unwrap();
        let json = parse_json(&output);
        assert_eq!(json["A"]["Live"], 1);
        assert!(json["A"].get("Dead").is_none());
        assert!(!output.contains("//"));
    }

    #[test]
    fn test_compact_output() {
        let config = ConversionConfig::default().with_pretty(false);
        let output = convert_inf_with_config("[A]\nKey=1\n", &config).unwrap();
        assert!(!output.contains('\n'));
        assert_eq!(parse_json(&output)["A"]["Key"], 1);
    }

    #[test]
    fn test_malformed_header_reports_line() {
        let err = convert_inf("[Good]\nKey=1\n[Broken\n").unwrap_err();
        match err {
            ConversionError::Parse(parse) => {
                assert_eq!(parse.line, Some(3));
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_mode_rejects_duplicate_keys() {
        let config = ConversionConfig::default().with_strict(true);
        let err = convert_inf_with_config("[A]\nKey=1\nKey=2\n", &config).unwrap_err();
        assert!(err.user_message().contains("Duplicate key"));
    }

    #[test]
    fn test_strict_mode_rejects_empty_sections() {
        let config = ConversionConfig::default().with_strict(true);
        let err = convert_inf_with_config("[Empty]\n[Full]\nKey=1\n", &config).unwrap_err();
        assert!(err.user_message().contains("no entries"));
    }

    #[test]
    fn test_non_strict_mode_tolerates_advisories() {
        let json = parse_json(&convert_inf("[Empty]\n[A]\nKey=1\nKey=2\n").unwrap());
        assert_eq!(json["Empty"], serde_json::json!({}));
        // Last duplicate wins when re-parsed as JSON
        assert_eq!(json["A"]["Key"], 2);
    }

    #[test]
    fn test_crlf_input() {
        let json = parse_json(&convert_inf("[A]\r\nKey=1\r\n\r\n[B]\r\nOther=x\r\n").unwrap());
        assert_eq!(json["A"]["Key"], 1);
        assert_eq!(json["B"]["Other"], "x");
    }

    #[test]
    fn test_empty_input_produces_empty_object() {
        let json = parse_json(&convert_inf("").unwrap());
        assert_eq!(json, serde_json::json!({}));
    }
}
