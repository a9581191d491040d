use clap::{CommandFactory, FromArgMatches, Parser};
use fittrack::config::{Config, OutputFormat};
use std::fs;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command()
        .try_get_matches_from(args)
        .expect("args should parse");
    let cli = TestCli::from_arg_matches(&matches).expect("matches should convert");
    (cli.config, matches)
}

#[test]
fn defaults_match_plain_line_output() {
    let config = Config::default();
    assert_eq!(config.output.format, OutputFormat::Line);
    assert!(!config.output.fail_fast);

    let (parsed, _) = parse(&["fittrack"]);
    assert_eq!(parsed.output.format, OutputFormat::Line);
    assert!(!parsed.output.fail_fast);
}

#[test]
fn load_from_file_fills_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "output": { "format": "table" } }"#).unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Table);
    assert!(!config.output.fail_fast);
}

#[test]
fn load_from_file_reports_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("Configuration Error"));
}

#[test]
fn load_from_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load_from_file(dir.path().join("absent.json")).is_err());
}

#[test]
fn explicit_flags_override_file_values() {
    let mut from_file: Config =
        serde_json::from_str(r#"{ "output": { "format": "json", "fail_fast": false } }"#).unwrap();

    let (cli, matches) = parse(&["fittrack", "--fail-fast"]);
    from_file.merge_from_cli(&cli, &matches);

    // --format was not typed, so the file keeps it.
    assert_eq!(from_file.output.format, OutputFormat::Json);
    assert!(from_file.output.fail_fast);

    let (cli, matches) = parse(&["fittrack", "--format", "table"]);
    from_file.merge_from_cli(&cli, &matches);
    assert_eq!(from_file.output.format, OutputFormat::Table);
}
