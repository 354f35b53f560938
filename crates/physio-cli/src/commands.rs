use std::path::Path;

use eyre::WrapErr;
use tracing::info;

use physio_catalog::Catalog;
use physio_core::models::document::DocumentPair;
use physio_report::{compile_assessment, compile_progress, export_docx, to_plain_text};
use physio_state::Store;
use physio_state::action::parse_action_log;
use physio_state::protocol::{confirmation_prompt, selected_exercise};
use physio_summarize::bedrock::load_sdk_config;
use physio_summarize::{BedrockSummarizer, summarize_report};

use crate::cli::{ConfigAction, ProtocolsArgs, ReplayArgs, ReportKind};
use crate::config::{self, PhysioConfig};

/// Replay a recorded action log from disk into a fresh store.
pub fn replay_file(path: &Path) -> eyre::Result<Store> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read action log {}", path.display()))?;
    let actions = parse_action_log(&contents)?;
    let store = Store::replay(actions);
    info!(path = %path.display(), applied = store.applied(), "action log replayed");
    Ok(store)
}

pub fn compile(state: &DocumentPair, kind: ReportKind) -> String {
    match kind {
        ReportKind::Assessment => compile_assessment(&state.assessment),
        ReportKind::Progress => compile_progress(&state.progress_note),
    }
}

pub async fn run_replay(args: &ReplayArgs, config: &PhysioConfig) -> eyre::Result<()> {
    let store = replay_file(&args.actions)?;
    let markup = compile(store.state(), args.report);
    let text = to_plain_text(&markup);

    if args.markup {
        println!("{markup}");
    } else {
        println!("{text}");
    }

    if let Some(out) = &args.state {
        std::fs::write(out, store.state().to_json_pretty()?)
            .wrap_err_with(|| format!("failed to write {}", out.display()))?;
        info!(path = %out.display(), "documents written");
    }

    if let Some(out) = &args.docx {
        let bytes = export_docx(&markup, &config.docx)?;
        std::fs::write(out, bytes).wrap_err_with(|| format!("failed to write {}", out.display()))?;
        info!(path = %out.display(), "docx written");
    }

    if args.summarize {
        let sdk_config = load_sdk_config(&config.region, config.aws_profile.as_deref()).await;
        let summarizer = BedrockSummarizer::from_sdk_config(&sdk_config, &config.model_id);
        let summary = summarize_report(&summarizer, &text).await;
        println!("\nSUMMARY:\n{summary}");
    }

    Ok(())
}

pub fn run_protocols(args: &ProtocolsArgs) -> eyre::Result<()> {
    let catalog = Catalog::builtin()?;

    let Some(id) = &args.id else {
        for protocol in &catalog.protocols {
            println!(
                "{:<6} {} ({} phases)",
                protocol.id,
                protocol.title,
                protocol.phases.len()
            );
        }
        return Ok(());
    };

    let protocol = catalog
        .protocol(id)
        .ok_or_else(|| eyre::eyre!("unknown protocol: {id}"))?;

    println!("{}: {}", protocol.title, protocol.description);
    if let Some(phase) = protocol.phases.first() {
        println!("\n{} - {}", phase.name, phase.description);
        println!("Goals:");
        for goal in &phase.goals {
            println!("  - {goal}");
        }
        println!("Exercises:");
        for exercise in &phase.exercises {
            let selected = selected_exercise(exercise);
            println!("  - {} ({}x{})", selected.name, selected.sets, selected.reps);
        }
    }
    println!("\n{}", confirmation_prompt(protocol));

    Ok(())
}

pub fn run_config(action: &ConfigAction) -> eyre::Result<()> {
    let path = config::config_path()?;
    let output = run_config_at(action, &path)?;
    println!("{output}");
    Ok(())
}

/// Run a `config` subcommand against the file at `path`, returning what to
/// print. `init` never reads the existing file, so `--force` can replace one
/// that no longer parses.
pub fn run_config_at(action: &ConfigAction, path: &Path) -> eyre::Result<String> {
    match action {
        ConfigAction::Show => {
            let (loaded, source) = if path.exists() {
                let loaded = config::load_config(path)?;
                let source = match loaded.migrated_from {
                    Some(from) => format!("file, migrated from v{from}"),
                    None => "file".to_string(),
                };
                (loaded.config, source)
            } else {
                (PhysioConfig::default(), "defaults".to_string())
            };
            Ok(format!(
                "# {} ({source})\n{}",
                path.display(),
                serde_json::to_string_pretty(&loaded)?
            ))
        }
        ConfigAction::Init {
            region,
            model_id,
            profile,
            force,
        } => {
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {} (use --force to replace it)",
                    path.display()
                ));
            }

            let mut config = PhysioConfig::default();
            if let Some(region) = region {
                config.region = region.clone();
            }
            if let Some(model_id) = model_id {
                config.model_id = model_id.clone();
            }
            config.aws_profile = profile.clone();

            let dir = path
                .parent()
                .ok_or_else(|| eyre::eyre!("config path {} has no parent directory", path.display()))?;
            let written = config::save_config_in(dir, &config)?;
            Ok(format!("wrote {}", written.display()))
        }
    }
}
