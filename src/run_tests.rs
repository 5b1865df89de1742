//! Tests for the run module.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::*;

fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["ndl-json"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

fn run_in(dir: &Path, extra: &[&str]) -> (Result<(), RunError>, String) {
    let (result, output, _) = run_with_diagnostics(dir, extra);
    (result, output)
}

fn run_with_diagnostics(dir: &Path, extra: &[&str]) -> (Result<(), RunError>, String, String) {
    let dir_arg = dir.to_str().unwrap();
    let mut args = extra.to_vec();
    args.push(dir_arg);

    let mut out: Vec<u8> = Vec::new();
    let mut diagnostics: Vec<u8> = Vec::new();
    let result = execute(&cli(&args), &mut out, &mut diagnostics);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(diagnostics).unwrap(),
    )
}

mod success {
    use super::*;

    #[test]
    fn prints_parsed_record() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("app.ndl"),
            "[vec_starting_size] 42;\n[debug] TRUE\n",
        )
        .unwrap();

        let (result, output) = run_in(dir.path(), &[]);

        result.unwrap();
        assert_eq!(
            output,
            "{\"vec_starting_size\":42,\"vec_growth_factor\":1.5,\"dev_mode\":false,\"debug\":true,\"output_file\":\"main\"}\n"
        );
    }

    #[test]
    fn empty_file_prints_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("empty.ndl"), "").unwrap();

        let (result, output) = run_in(dir.path(), &[]);

        result.unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, serde_json::to_value(ConfigRecord::default()).unwrap());
    }

    #[test]
    fn overflowing_growth_factor_keeps_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.ndl"), "[vec_growth_factor] 1e400;\n").unwrap();

        let (result, output) = run_in(dir.path(), &[]);

        result.unwrap();
        assert!(output.contains("\"vec_growth_factor\":1.5"));
    }

    #[test]
    fn latin1_bytes_do_not_drop_settings() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("app.ndl"),
            b"# caf\xe9\n[vec_starting_size] 42;\n[debug] true;\n",
        )
        .unwrap();

        let (result, output, diagnostics) = run_with_diagnostics(dir.path(), &[]);

        result.unwrap();
        assert!(output.contains("\"vec_starting_size\":42"));
        assert!(output.contains("\"debug\":true"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn pretty_flag_indents_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.ndl"), "[output] bin;\n").unwrap();

        let (result, output) = run_in(dir.path(), &["--pretty"]);

        result.unwrap();
        assert!(output.lines().count() > 1);
        assert!(output.contains("\"output_file\": \"bin\""));
    }
}

mod failures {
    use super::*;

    #[test]
    fn missing_directory_argument() {
        let mut out: Vec<u8> = Vec::new();

        let result = execute(&cli(&[]), &mut out, &mut Vec::<u8>::new());

        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::MissingDirectory))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn directory_without_config_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("readme.txt"), "").unwrap();

        let (result, output) = run_in(dir.path(), &[]);

        assert!(matches!(
            result,
            Err(RunError::Locate(LocateError::NoConfigFile { .. }))
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn non_finite_growth_factor_fails_to_encode() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.ndl"), "[vec_growth_factor] inf;\n").unwrap();

        let (result, output) = run_in(dir.path(), &[]);

        assert!(matches!(result, Err(RunError::Emit(EmitError::Encode(_)))));
        assert!(output.is_empty());
    }

    #[test]
    fn error_messages_pass_through() {
        let error = RunError::from(ConfigError::MissingDirectory);
        assert_eq!(error.to_string(), ConfigError::MissingDirectory.to_string());
    }
}

mod report_issues_tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn returns_record_from_report() {
        let report = ndl::parse_reader(Cursor::new("[dev_mode] true\n"), "test");
        let mut diagnostics: Vec<u8> = Vec::new();

        let record = report_issues(report, &mut diagnostics);

        assert!(record.dev_mode);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn open_failure_is_written_to_diagnostics() {
        let dir = tempdir().unwrap();
        let report = ndl::parse_file(&dir.path().join("gone.ndl"));
        let mut diagnostics: Vec<u8> = Vec::new();

        let record = report_issues(report, &mut diagnostics);

        assert_eq!(record, ConfigRecord::default());
        let text = String::from_utf8(diagnostics).unwrap();
        assert!(text.starts_with("warning: Failed to open config file"));
        assert!(text.contains("gone.ndl"));
        assert_eq!(text.lines().count(), 1);
    }
}
