//! The checklist: independent rule checks run against a roster.
//!
//! Each check implements [`TeamCheck`] and turns `(roster, context)` into exactly one
//! [`CheckResult`]. Checks never depend on each other's results and never fail: an empty
//! or sparsely populated roster yields a conservative Fail or Warning, not an error.
//!
//! A check may return [`CheckStatus::Skip`] when the team's archetype makes it
//! inapplicable (for example, Stall teams are not expected to carry priority moves).
//! Skipped checks are left out of the grade denominator, see [`crate::grade`].
//!
//! # Battery
//!
//! [`all_team_checks()`] returns the 15 checks in reporting order:
//!
//! **Speed** - [`rules::PriorityMoves`], [`rules::FastPokemon`]
//!
//! **Hazards** - [`rules::EntryHazards`], [`rules::HazardControl`], [`rules::ToxicSpikesAbsorber`]
//!
//! **Defensive profile** - [`rules::StatusImmunity`], [`rules::TypeResistance`],
//! [`rules::SteelType`], [`rules::GroundImmunity`], [`rules::ElectricImmunity`]
//!
//! **Utility** - [`rules::PivotingMoves`], [`rules::KnockOffUser`], [`rules::KnockOffAbsorber`]
//!
//! **Structure** - [`rules::DefensiveCore`], [`rules::DamageSplit`]

use std::fmt;

use pokerate_core::Creature;
use serde::Serialize;

use crate::archetype::TeamContext;

pub use self::rules::*;

pub mod rules;

#[must_use]
pub fn all_team_checks() -> Vec<BoxedTeamCheck> {
    vec![
        // speed
        Box::new(PriorityMoves),
        Box::new(FastPokemon),
        // hazards
        Box::new(EntryHazards),
        Box::new(HazardControl),
        Box::new(ToxicSpikesAbsorber),
        // defensive profile
        Box::new(StatusImmunity),
        Box::new(TypeResistance),
        Box::new(SteelType),
        Box::new(GroundImmunity),
        Box::new(ElectricImmunity),
        // utility
        Box::new(PivotingMoves),
        Box::new(KnockOffUser),
        Box::new(KnockOffAbsorber),
        // structure
        Box::new(DefensiveCore),
        Box::new(DamageSplit),
    ]
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub id: &'static str,
    pub name: &'static str,
    pub status: CheckStatus,
    pub description: String,
    pub details: Option<String>,
}

pub trait TeamCheck: fmt::Debug + Send + Sync {
    /// Stable snake_case identifier.
    #[must_use]
    fn id(&self) -> &'static str;
    #[must_use]
    fn name(&self) -> &'static str;
    #[must_use]
    fn clone_boxed(&self) -> BoxedTeamCheck;
    #[must_use]
    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult;

    /// A [`CheckStatus::Skip`] result carrying the reason as description.
    #[must_use]
    fn skipped(&self, reason: &str) -> CheckResult {
        CheckResult {
            id: self.id(),
            name: self.name(),
            status: CheckStatus::Skip,
            description: reason.to_owned(),
            details: None,
        }
    }

    #[must_use]
    fn evaluated(&self, status: CheckStatus, description: &str, details: String) -> CheckResult {
        CheckResult {
            id: self.id(),
            name: self.name(),
            status,
            description: description.to_owned(),
            details: Some(details),
        }
    }
}

pub type BoxedTeamCheck = Box<dyn TeamCheck>;

impl Clone for BoxedTeamCheck {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}
