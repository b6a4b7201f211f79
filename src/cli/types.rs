use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::model::FontWeight;
use crate::workflow::DialogKind;

#[derive(Debug, Parser)]
#[command(
    name = "reconcile",
    version,
    about = "Reconciles format dialog edits against multi-object selections"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Shows what a dialog opened on a selection file would display.
    Inspect {
        #[arg(long, value_enum)]
        dialog: DialogArg,
        #[arg(long)]
        selection: PathBuf,
    },
    /// Replays an edit script and prints the session report.
    Run {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long)]
        report: Option<PathBuf>,
        /// JSON file dialog preferences are restored from and stored to.
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Resolves the weight a typeface falls back to.
    Weights {
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long)]
        family: String,
        #[arg(long, default_value_t = 12.0)]
        size: f64,
        #[arg(long)]
        weight: FontWeight,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(super) enum DialogArg {
    Character,
    Image,
    Plot,
}

impl From<DialogArg> for DialogKind {
    fn from(value: DialogArg) -> Self {
        match value {
            DialogArg::Character => Self::Character,
            DialogArg::Image => Self::Image,
            DialogArg::Plot => Self::Plot,
        }
    }
}
