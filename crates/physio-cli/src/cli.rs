use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "physio-notes",
    version,
    about = "Build physiotherapy SOAP reports from recorded form actions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log output format. Overrides the config file.
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay an action log and print the compiled report.
    Replay(ReplayArgs),

    /// List the built-in treatment protocols.
    Protocols(ProtocolsArgs),

    /// Show or create the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Parser)]
pub struct ReplayArgs {
    /// JSON array of actions.
    #[arg(value_name = "ACTIONS")]
    pub actions: PathBuf,

    /// Which document to report on.
    #[arg(long, value_enum, default_value = "assessment")]
    pub report: ReportKind,

    /// Print the report markup instead of plain text.
    #[arg(long)]
    pub markup: bool,

    /// Append an AI-generated summary of the report.
    #[arg(long)]
    pub summarize: bool,

    /// Also write the report to a DOCX file.
    #[arg(long, value_name = "OUT")]
    pub docx: Option<PathBuf>,

    /// Write the final documents as JSON.
    #[arg(long, value_name = "OUT")]
    pub state: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct ProtocolsArgs {
    /// Show the first phase of this protocol in detail.
    #[arg(value_name = "ID")]
    pub id: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration.
    Show,

    /// Write a configuration file with defaults.
    Init {
        #[arg(long)]
        region: Option<String>,

        #[arg(long = "model-id")]
        model_id: Option<String>,

        /// Named AWS profile to load credentials from.
        #[arg(long)]
        profile: Option<String>,

        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Assessment,
    Progress,
}
