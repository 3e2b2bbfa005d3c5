use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::{coverage::CoverageArg, rate::RateArg};

mod coverage;
mod rate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to report on the team
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Classify the team, run the checklist and grade it
    Rate(#[clap(flatten)] RateArg),
    /// Report shared weaknesses, unresisted types and immunities
    Coverage(#[clap(flatten)] CoverageArg),
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments shared by every subcommand.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TeamArg {
    /// Team export file; reads stdin when omitted
    team: Option<PathBuf>,
    /// Species data JSON used to fill in types and base stats
    #[arg(long)]
    dex: Option<PathBuf>,
    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,
    /// Output file path; writes stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Rate(arg) => rate::run(&arg)?,
        Mode::Coverage(arg) => coverage::run(&arg)?,
    }
    Ok(())
}
