//! Command-line interface definitions.

pub mod alerts;
pub mod board;
pub mod check;
pub mod diagnostic;
pub mod markets;
pub mod output;
pub mod suggest;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::AlertDirection;

/// Oddswise - terminal odds dashboard with price alerts and AI suggestions.
#[derive(Parser, Debug)]
#[command(name = "oddswise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the odds board with best prices per outcome
    Board(BoardArgs),

    /// List sports and their markets (the ids used by filters)
    Markets(MarketsArgs),

    /// Manage price alerts
    Alerts(AlertsArgs),

    /// Ask the model for a betting suggestion
    Suggest(SuggestArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Odds notation for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OddsFormat {
    #[default]
    Decimal,
    American,
}

/// Arguments for the `board` subcommand.
#[derive(Parser, Debug)]
pub struct BoardArgs {
    /// Restrict to one sport by id (see `oddswise markets`)
    #[arg(long)]
    pub sport: Option<String>,

    /// Restrict to one market by id
    #[arg(long)]
    pub market: Option<String>,

    /// Case-insensitive substring match on event names
    #[arg(long)]
    pub search: Option<String>,

    /// Odds notation to display
    #[arg(long, value_enum, default_value = "decimal")]
    pub format: OddsFormat,
}

/// Arguments for the `markets` subcommand.
#[derive(Parser, Debug)]
pub struct MarketsArgs {
    /// Restrict to one sport by id
    #[arg(long)]
    pub sport: Option<String>,
}

/// Shared arguments for the `alerts` command group.
#[derive(Parser, Debug)]
pub struct AlertsArgs {
    /// Override the alert store file path
    #[arg(long)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: AlertCommand,
}

#[derive(Subcommand, Debug)]
pub enum AlertCommand {
    /// Create an alert (interactive unless all flags are given)
    Add(AlertAddArgs),
    /// List stored alerts
    List,
    /// Remove an alert by id (unambiguous prefix is enough)
    Remove(AlertRemoveArgs),
    /// Evaluate alerts against the current best prices
    Check,
}

/// Threshold direction for `alerts add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Fire when odds reach or exceed the target (>=)
    AtLeast,
    /// Fire when odds drop to or below the target (<=)
    AtMost,
}

impl From<DirectionArg> for AlertDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::AtLeast => AlertDirection::AtLeast,
            DirectionArg::AtMost => AlertDirection::AtMost,
        }
    }
}

/// Arguments for `alerts add`.
#[derive(Parser, Debug)]
pub struct AlertAddArgs {
    /// Event id, e.g. event_1
    #[arg(long)]
    pub event: Option<String>,

    /// Outcome name, e.g. "FC Barcelona Win"
    #[arg(long)]
    pub outcome: Option<String>,

    /// Threshold direction
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,

    /// Target odds, American ("+150") or decimal ("2.5") notation
    #[arg(long)]
    pub target: Option<String>,
}

/// Arguments for `alerts remove`.
#[derive(Parser, Debug)]
pub struct AlertRemoveArgs {
    /// Alert id or unambiguous id prefix
    pub id: String,
}

/// Arguments for the `suggest` subcommand.
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Event id to analyze; prompts interactively when omitted
    #[arg(long)]
    pub event: Option<String>,

    /// Use odds JSON from a file instead of the catalog payload
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Override the configured model
    #[arg(long)]
    pub model: Option<String>,
}

/// Subcommands for `oddswise check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}
