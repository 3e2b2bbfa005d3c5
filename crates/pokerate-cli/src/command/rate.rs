use pokerate_evaluator::rating::TeamRater;
use tracing::info;

use super::{OutputFormat, TeamArg};
use crate::{
    report::{self, Report},
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RateArg {
    #[clap(flatten)]
    team: TeamArg,
}

pub(crate) fn run(arg: &RateArg) -> anyhow::Result<()> {
    let TeamArg {
        team,
        dex,
        format,
        output,
    } = &arg.team;

    let team = util::load_team(team.as_deref(), dex.as_deref())?;
    let rating = TeamRater::default().rate(&team);
    info!(
        archetype = %rating.archetype,
        grade = %rating.grade,
        "team rated"
    );

    let mut output = Output::from_output_path(output.clone())?;
    match format {
        OutputFormat::Text => output.write_text(&report::render_rating(&team, &rating))?,
        OutputFormat::Json => output.write_json(&Report::new(&team, rating))?,
    }
    Ok(())
}
