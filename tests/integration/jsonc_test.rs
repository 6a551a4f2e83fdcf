//! Integration tests for comment-preserving JSONC output

#[cfg(test)]
mod jsonc_tests {
    use infconv::{convert_inf_with_config, ConversionConfig};
    use pretty_assertions::assert_eq;

    fn jsonc_config() -> ConversionConfig {
        ConversionConfig::default().with_preserve_comments(true)
    }

    fn convert(source: &str, config: &ConversionConfig) -> String {
        convert_inf_with_config(source, config).unwrap()
    }

    /// Drop every `//` line from JSONC output
    fn strip_comment_lines(text: &str) -> String {
        text.lines()
            .filter(|line| !line.trim_start().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_leading_and_inline_comments() {
        let source = "\
; Leading comment
[Section]
Name=Value ; trailing note
;Key=Disabled
";
        let output = convert(source, &jsonc_config());
        let expected = "\
{
  // Leading comment
  \"Section\": {
    \"Name\": \"Value\"
    // trailing note
    // \"Key\": \"Disabled\",
  }
}";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_inactive_entries_keep_type_conversion() {
        let config = jsonc_config().with_yes_no_as_boolean(true);
        let output = convert("[A]\nLive=1\n;Count=42\n;Flag=yes\n", &config);
        assert!(output.contains("// \"Count\": 42,"));
        assert!(output.contains("// \"Flag\": true,"));
    }

    #[test]
    fn test_fully_commented_section_is_one_block() {
        let source = "\
[Active]
Key=1
;[Extra]
;Num=1
;Word=two
";
        let output = convert(source, &jsonc_config());
        let lines: Vec<&str> = output.lines().collect();
        let start = lines
            .iter()
            .position(|l| l.trim() == "// \"Extra\": {")
            .expect("commented section header");
        assert_eq!(lines[start + 1].trim(), "//   \"Num\": 1,");
        assert_eq!(lines[start + 2].trim(), "//   \"Word\": \"two\"");
        assert_eq!(lines[start + 3].trim(), "// },");
    }

    #[test]
    fn test_stripping_comments_yields_plain_output() {
        let source = "\
; File header comment

[General]
Name=App ; inline
;Disabled=true
Count=3

; Section intro
[Paths]
Root=C:\\App

;[Commented]
;Inner=1

; trailing remark
";
        let jsonc = convert(source, &jsonc_config());
        let plain = convert(source, &ConversionConfig::default());
        assert_eq!(strip_comment_lines(&jsonc), plain);
    }

    #[test]
    fn test_stripping_section_with_only_inactive_entries() {
        let source = "[A]\n;One=1\n;Two=2\n[B]\nKey=3\n";
        let jsonc = convert(source, &jsonc_config());
        let plain = convert(source, &ConversionConfig::default());
        assert_eq!(strip_comment_lines(&jsonc), plain);
        // Section A survives as an empty object
        let json: serde_json::Value = serde_json::from_str(&plain).unwrap();
        assert_eq!(json["A"], serde_json::json!({}));
    }

    #[test]
    fn test_blank_line_separated_comment_blocks() {
        let source = "\
[A]
Key=1

; standalone block
; second line

[B]
Other=2
";
        let output = convert(source, &jsonc_config());
        assert!(output.contains("// standalone block"));
        assert!(output.contains("// second line"));
        // The block stays attached to section A, before B begins
        let pos_block = output.find("// standalone block").unwrap();
        let pos_b = output.find("\"B\"").unwrap();
        assert!(pos_block < pos_b);
    }

    #[test]
    fn test_comment_only_file() {
        let output = convert("; nothing here\n; at all\n", &jsonc_config());
        let expected = "{\n  // nothing here\n  // at all\n}";
        assert_eq!(output, expected);
        assert_eq!(strip_comment_lines(&output), "{\n}");
    }

    #[test]
    fn test_hash_comments_preserved() {
        let output = convert("# hash style\n[A]\nKey=1\n", &jsonc_config());
        assert!(output.contains("// hash style"));
    }

    #[test]
    fn test_jsonc_output_ignores_plain_flag() {
        // Comments need lines; JSONC is always pretty
        let config = jsonc_config().with_pretty(false);
        let output = convert("; note\n[A]\nKey=1\n", &config);
        assert!(output.contains('\n'));
        assert!(output.contains("// note"));
    }
}
