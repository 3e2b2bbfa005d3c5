use pokerate_evaluator::coverage::analyze_coverage;
use tracing::info;

use super::{OutputFormat, TeamArg};
use crate::{
    report::{self, Report},
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct CoverageArg {
    #[clap(flatten)]
    team: TeamArg,
}

pub(crate) fn run(arg: &CoverageArg) -> anyhow::Result<()> {
    let TeamArg {
        team,
        dex,
        format,
        output,
    } = &arg.team;

    let team = util::load_team(team.as_deref(), dex.as_deref())?;
    if dex.is_none() {
        info!("no species data given; every member counts as untyped");
    }
    let analysis = analyze_coverage(&team);

    let mut output = Output::from_output_path(output.clone())?;
    match format {
        OutputFormat::Text => output.write_text(&report::render_coverage(&team, &analysis))?,
        OutputFormat::Json => output.write_json(&Report::new(&team, analysis))?,
    }
    Ok(())
}
