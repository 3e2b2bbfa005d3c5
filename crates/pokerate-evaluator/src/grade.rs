//! Reduction of check results to a pass rate and a letter grade.

use serde::Serialize;

use crate::team_check::{CheckResult, CheckStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Maps a pass rate in \[0.0, 1.0\] to a grade.
    ///
    /// | Pass rate | Grade |
    /// |-----------|-------|
    /// | ≥ 0.90    | S     |
    /// | ≥ 0.80    | A     |
    /// | ≥ 0.70    | B     |
    /// | ≥ 0.60    | C     |
    /// | otherwise | D     |
    #[must_use]
    pub fn from_pass_rate(pass_rate: f64) -> Self {
        if pass_rate >= 0.9 {
            Self::S
        } else if pass_rate >= 0.8 {
            Self::A
        } else if pass_rate >= 0.7 {
            Self::B
        } else if pass_rate >= 0.6 {
            Self::C
        } else {
            Self::D
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::S => "Excellent - Competitive Ready",
            Self::A => "Great - Minor improvements needed",
            Self::B => "Good - Some weaknesses to address",
            Self::C => "Average - Needs significant work",
            Self::D => "Poor - Major issues to fix",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeSummary {
    pub passed: usize,
    /// Number of checks that were not skipped.
    pub total: usize,
    pub pass_rate: f64,
    pub grade: Grade,
}

/// Counts passes over non-skipped checks and grades the ratio.
///
/// With no applicable checks the pass rate is 0 and the grade is [`Grade::D`].
#[must_use]
pub fn aggregate(results: &[CheckResult]) -> GradeSummary {
    let passed = results
        .iter()
        .filter(|r| r.status == CheckStatus::Pass)
        .count();
    let total = results.iter().filter(|r| !r.status.is_skip()).count();

    #[expect(clippy::cast_precision_loss)]
    let pass_rate = if total > 0 {
        passed as f64 / total as f64
    } else {
        0.0
    };

    GradeSummary {
        passed,
        total,
        pass_rate,
        grade: Grade::from_pass_rate(pass_rate),
    }
}
