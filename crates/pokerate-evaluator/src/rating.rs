//! One complete rating pass: classify, build the context, run the battery, grade.

use pokerate_core::Creature;
use serde::Serialize;
use tracing::debug;

use crate::{
    archetype::{self, Archetype, TeamContext},
    grade::{self, Grade},
    team_check::{BoxedTeamCheck, CheckResult, all_team_checks},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRating {
    pub archetype: Archetype,
    pub archetype_description: &'static str,
    /// One result per check, in battery order.
    pub checks: Vec<CheckResult>,
    pub passed: usize,
    /// Number of checks that were not skipped.
    pub total: usize,
    pub pass_rate: f64,
    pub grade: Grade,
    pub grade_description: &'static str,
}

/// Holds a check battery so it can be reused across rosters.
#[derive(Debug, Clone)]
pub struct TeamRater {
    checks: Vec<BoxedTeamCheck>,
}

impl Default for TeamRater {
    fn default() -> Self {
        Self::new(all_team_checks())
    }
}

impl TeamRater {
    #[must_use]
    pub fn new(checks: Vec<BoxedTeamCheck>) -> Self {
        Self { checks }
    }

    #[must_use]
    pub fn checks(&self) -> &[BoxedTeamCheck] {
        &self.checks
    }

    /// Rates `team`. The roster is only read; no state survives the call.
    #[must_use]
    pub fn rate(&self, team: &[Creature]) -> TeamRating {
        let archetype = archetype::classify(team);
        let context = TeamContext::new(archetype);

        let checks: Vec<CheckResult> = self
            .checks
            .iter()
            .map(|check| {
                let result = check.check(team, &context);
                debug!(check = result.id, status = %result.status, "ran check");
                result
            })
            .collect();

        let summary = grade::aggregate(&checks);
        debug!(
            grade = %summary.grade,
            passed = summary.passed,
            total = summary.total,
            "rated team"
        );

        TeamRating {
            archetype,
            archetype_description: archetype.description(),
            checks,
            passed: summary.passed,
            total: summary.total,
            pass_rate: summary.pass_rate,
            grade: summary.grade,
            grade_description: summary.grade.description(),
        }
    }
}

/// Rates `team` with the standard battery.
///
/// # Example
///
/// ```
/// use pokerate_evaluator::{archetype::Archetype, grade::Grade, rating::rate_team};
///
/// let rating = rate_team(&[]);
/// assert_eq!(rating.archetype, Archetype::Balanced);
/// assert_eq!(rating.checks.len(), 15);
/// assert_eq!(rating.grade, Grade::D);
/// ```
#[must_use]
pub fn rate_team(team: &[Creature]) -> TeamRating {
    TeamRater::default().rate(team)
}
