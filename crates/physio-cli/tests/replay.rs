use clap::Parser;
use physio_cli::cli::{Cli, Command, ConfigAction, ReportKind};
use physio_cli::commands::{compile, replay_file};
use physio_cli::config::LogFormat;

const LOG: &str = r#"[
    {"type": "setField", "document": "assessment", "path": "subjective.chiefComplaint", "value": "Knee pain"},
    {"type": "setField", "document": "assessment", "path": "subjective.painScore", "value": "6"},
    {"type": "setField", "document": "progressNote", "path": "session.number", "value": "3"},
    {"type": "setField", "document": "progressNote", "path": "subjective.selfProgress", "value": "Improved"}
]"#;

#[test]
fn parses_replay_arguments() {
    let cli = Cli::try_parse_from([
        "physio-notes",
        "replay",
        "actions.json",
        "--report",
        "progress",
        "--docx",
        "out.docx",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert_eq!(cli.log_format, Some(LogFormat::Json));
    match cli.command {
        Command::Replay(args) => {
            assert_eq!(args.report, ReportKind::Progress);
            assert_eq!(args.docx.as_deref(), Some(std::path::Path::new("out.docx")));
            assert!(!args.summarize);
            assert!(!args.markup);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn parses_config_init() {
    let cli = Cli::try_parse_from(["physio-notes", "config", "init", "--region", "eu-west-1", "--force"]).unwrap();
    match cli.command {
        Command::Config {
            action: ConfigAction::Init { region, force, .. },
        } => {
            assert_eq!(region.as_deref(), Some("eu-west-1"));
            assert!(force);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn replays_a_log_file_into_both_reports() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("actions.json");
    std::fs::write(&path, LOG).unwrap();

    let store = replay_file(&path).unwrap();
    assert_eq!(store.applied(), 4);

    let assessment = compile(store.state(), ReportKind::Assessment);
    assert!(assessment.contains("Patient presents with complaints of knee pain."));
    assert!(assessment.contains("Pain is rated at 6/10 on the VAS."));

    let progress = compile(store.state(), ReportKind::Progress);
    assert!(progress.contains("SESSION #3"));
    assert!(progress.contains("Patient reports their condition is improved."));
}

#[test]
fn missing_log_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = replay_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read action log"));
}
