//! Tests for CLI argument parsing and logging

use super::*;
use std::path::PathBuf;

#[test]
fn test_parse_eval_defaults() {
    let cli = parse_args(["hyperschedule", "eval", "schedule.yaml"]).unwrap();
    assert!(!cli.verbose);
    assert!(!cli.quiet);
    match cli.command {
        Command::Eval(args) => {
            assert_eq!(args.config, PathBuf::from("schedule.yaml"));
            assert_eq!(args.steps, 10);
            assert_eq!(args.start, 1);
            assert_eq!(args.format, OutputFormat::Text);
        }
        other => panic!("expected eval command, got {other:?}"),
    }
}

#[test]
fn test_parse_eval_options() {
    let cli = parse_args([
        "hyperschedule",
        "eval",
        "schedule.json",
        "--steps",
        "100",
        "--start",
        "5",
        "--format",
        "csv",
        "--verbose",
    ])
    .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Eval(args) => {
            assert_eq!(args.steps, 100);
            assert_eq!(args.start, 5);
            assert_eq!(args.format, OutputFormat::Csv);
        }
        other => panic!("expected eval command, got {other:?}"),
    }
}

#[test]
fn test_parse_info_format() {
    let cli = parse_args(["hyperschedule", "info", "s.yaml", "-f", "json"]).unwrap();
    assert!(matches!(cli.command, Command::Info(InfoArgs { format: OutputFormat::Json, .. })));
}

#[test]
fn test_parse_rejects_unknown_format() {
    assert!(parse_args(["hyperschedule", "eval", "s.yaml", "--format", "xml"]).is_err());
}

#[test]
fn test_parse_requires_command() {
    assert!(parse_args(["hyperschedule"]).is_err());
}

#[test]
fn test_output_format_round_trip() {
    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Csv] {
        assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
    }
    assert!("JSON".parse::<OutputFormat>().is_ok());
}

#[test]
fn test_log_level_from_flags() {
    assert_eq!(LogLevel::from_flags(false, false), LogLevel::Normal);
    assert_eq!(LogLevel::from_flags(true, false), LogLevel::Verbose);
    assert_eq!(LogLevel::from_flags(true, true), LogLevel::Quiet);
}

#[test]
fn test_log_level_filter() {
    use tracing_subscriber::filter::LevelFilter;
    assert_eq!(LogLevel::Verbose.filter(), LevelFilter::DEBUG);
    assert_eq!(LogLevel::Normal.filter(), LevelFilter::WARN);
    assert_eq!(LogLevel::Quiet.filter(), LevelFilter::ERROR);
}
