//! Tests for JSON output.

use super::*;

/// Writer that rejects every write.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

mod encoding {
    use super::*;

    #[test]
    fn compact_default_record() {
        let json = to_json(&ConfigRecord::default(), Format::Compact).unwrap();

        assert_eq!(
            json,
            r#"{"vec_starting_size":0,"vec_growth_factor":1.5,"dev_mode":false,"debug":false,"output_file":"main"}"#
        );
    }

    #[test]
    fn pretty_output_is_multiline() {
        let json = to_json(&ConfigRecord::default(), Format::Pretty).unwrap();

        assert!(json.starts_with("{\n"));
        assert!(json.contains("  \"vec_starting_size\": 0,\n"));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn pretty_and_compact_carry_same_values() {
        let record = ConfigRecord {
            vec_starting_size: 3,
            output_file: "with \"quotes\"".to_string(),
            ..ConfigRecord::default()
        };

        let compact: serde_json::Value =
            serde_json::from_str(&to_json(&record, Format::Compact).unwrap()).unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&to_json(&record, Format::Pretty).unwrap()).unwrap();

        assert_eq!(compact, pretty);
        assert_eq!(compact["output_file"], "with \"quotes\"");
    }

    #[test]
    fn non_finite_factor_is_encode_error() {
        let record = ConfigRecord {
            vec_growth_factor: f64::INFINITY,
            ..ConfigRecord::default()
        };

        let err = to_json(&record, Format::Compact).unwrap_err();

        assert!(matches!(err, EmitError::Encode(_)));
        assert!(err.to_string().starts_with("Failed to encode JSON"));
    }

    #[test]
    fn format_from_flag() {
        assert_eq!(Format::from_pretty(true), Format::Pretty);
        assert_eq!(Format::from_pretty(false), Format::Compact);
        assert_eq!(Format::default(), Format::Compact);
    }
}

mod writing {
    use super::*;

    #[test]
    fn writes_one_line() {
        let mut out: Vec<u8> = Vec::new();

        write_record(&mut out, &ConfigRecord::default(), Format::Compact).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn encode_failure_writes_nothing() {
        let mut out: Vec<u8> = Vec::new();
        let record = ConfigRecord {
            vec_growth_factor: f64::NAN,
            ..ConfigRecord::default()
        };

        let result = write_record(&mut out, &record, Format::Compact);

        assert!(matches!(result, Err(EmitError::Encode(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn write_failure_is_reported() {
        let result = write_record(&mut BrokenPipe, &ConfigRecord::default(), Format::Compact);

        assert!(matches!(result, Err(EmitError::Write(_))));
    }
}
