//! Report envelopes and plain-text rendering.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use pokerate_core::Creature;
use pokerate_evaluator::{
    coverage::TypeAnalysis,
    rating::TeamRating,
    team_check::CheckStatus,
};
use serde::Serialize;

/// JSON document written by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    /// Timestamp when the report was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    pub team: Vec<MemberSummary>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Report<T> {
    pub fn new(team: &[Creature], body: T) -> Self {
        Self {
            generated_at: Utc::now(),
            team: team.iter().map(MemberSummary::from_creature).collect(),
            body,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberSummary {
    pub species: String,
    pub nickname: Option<String>,
    pub item: Option<String>,
    pub ability: Option<String>,
    pub moves: Vec<String>,
    /// Set when species data was requested but not found.
    pub data_fetch_error: Option<String>,
}

impl MemberSummary {
    fn from_creature(creature: &Creature) -> Self {
        Self {
            species: creature.species.clone(),
            nickname: creature.nickname.clone(),
            item: creature.item.as_ref().map(ToString::to_string),
            ability: creature.ability.as_ref().map(ToString::to_string),
            moves: creature.moves.iter().map(|m| m.name.to_string()).collect(),
            data_fetch_error: creature.data_fetch_error.clone(),
        }
    }
}

fn status_tag(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "[PASS]",
        CheckStatus::Fail => "[FAIL]",
        CheckStatus::Warning => "[WARN]",
        CheckStatus::Skip => "[SKIP]",
    }
}

fn write_team(out: &mut String, team: &[Creature]) {
    let names: Vec<&str> = team.iter().map(Creature::display_name).collect();
    if names.is_empty() {
        out.push_str("Team: (empty)\n");
    } else {
        writeln!(out, "Team: {}", names.join(", ")).ok();
    }
    for creature in team {
        if let Some(error) = &creature.data_fetch_error {
            writeln!(out, "  note: {error}").ok();
        }
    }
}

pub fn render_rating(team: &[Creature], rating: &TeamRating) -> String {
    let mut out = String::new();
    write_team(&mut out, team);
    writeln!(
        out,
        "Archetype: {} - {}",
        rating.archetype, rating.archetype_description
    )
    .ok();
    out.push('\n');

    for check in &rating.checks {
        writeln!(out, "{} {}: {}", status_tag(check.status), check.name, check.description).ok();
        if let Some(details) = &check.details {
            writeln!(out, "       {details}").ok();
        }
    }

    out.push('\n');
    writeln!(
        out,
        "Grade: {} ({}) - {}/{} checks passed ({:.0}%)",
        rating.grade,
        rating.grade_description,
        rating.passed,
        rating.total,
        rating.pass_rate * 100.0
    )
    .ok();
    out
}

pub fn render_coverage(team: &[Creature], analysis: &TypeAnalysis) -> String {
    let mut out = String::new();
    write_team(&mut out, team);
    out.push('\n');

    let neutral: Vec<&str> = analysis
        .neutral_coverage
        .iter()
        .map(|ty| ty.display_name())
        .collect();
    if neutral.is_empty() {
        out.push_str("Unresisted types: none\n");
    } else {
        writeln!(out, "Unresisted types: {}", neutral.join(", ")).ok();
    }

    if analysis.super_effective.is_empty() {
        out.push_str("Shared weaknesses: none\n");
    } else {
        out.push_str("Shared weaknesses:\n");
        for entry in &analysis.super_effective {
            writeln!(
                out,
                "  {} x{}: {}",
                entry.attack_type,
                entry.count,
                entry.members.join(", ")
            )
            .ok();
        }
    }

    if !analysis.immunity_notes.is_empty() {
        out.push_str("Immunities:\n");
        for note in &analysis.immunity_notes {
            writeln!(out, "  {note}").ok();
        }
    }
    out
}
