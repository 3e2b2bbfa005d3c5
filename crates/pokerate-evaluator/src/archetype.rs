//! Team archetype classification.
//!
//! The classifier is an ordered decision list over the whole roster. The first rule that
//! matches decides the archetype; later rules are never consulted:
//!
//! 1. [`Archetype::SunTeam`] - a member has Drought
//! 2. [`Archetype::Stall`] - at least 5 bulky members
//! 3. [`Archetype::SemiStall`] - 3 or 4 bulky members
//! 4. [`Archetype::HyperOffense`] - Light Screen / Aurora Veil, Sticky Web, or at least 3 setup users
//! 5. [`Archetype::BulkyBalance`] - 3 to 5 bulky members and at least 2 offensive members
//! 6. [`Archetype::Offense`] - at least 4 offensive members, or at least 2 breaker items and 2 pivots
//! 7. [`Archetype::Balanced`] - everything else
//!
//! A member is *bulky* when it pairs a defensive ability or a recovery / passive-status
//! move with full HP and full Def or SpD investment. A member is *offensive* when it has
//! a setup move or full Atk, SpA or Spe investment.
//!
//! Rules 2 and 3 claim every roster with 3 or more bulky members, so rule 5 never
//! matches with the current thresholds.

use std::fmt;

use pokerate_core::{Ability, Creature, MoveName, Stat};
use serde::Serialize;
use tracing::debug;

use crate::category::{
    BREAKER_ITEMS, BULK_SUPPORT_MOVES, DEFENSIVE_ABILITIES, OFFENSIVE_SCREEN_MOVES, PIVOT_MOVES,
    SETUP_MOVES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    SunTeam,
    Stall,
    SemiStall,
    HyperOffense,
    BulkyBalance,
    Offense,
    Balanced,
}

impl Archetype {
    pub const ALL: [Self; 7] = [
        Self::SunTeam,
        Self::Stall,
        Self::SemiStall,
        Self::HyperOffense,
        Self::BulkyBalance,
        Self::Offense,
        Self::Balanced,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SunTeam => "Sun Team",
            Self::Stall => "Stall",
            Self::SemiStall => "Semi-Stall",
            Self::HyperOffense => "Hyper Offense",
            Self::BulkyBalance => "Bulky Balance",
            Self::Offense => "Offense",
            Self::Balanced => "Balanced",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SunTeam => {
                "Offensive weather team built around Drought, utilizing sun-boosted sweepers and speed control"
            }
            Self::Stall => "Defensive team focused on passive damage and outlasting opponents",
            Self::SemiStall => "Defensive core with offensive win conditions",
            Self::HyperOffense => {
                "Aggressive team focused on overwhelming opponents with multiple setup sweepers"
            }
            Self::BulkyBalance => {
                "Defensive core with offensive threats that can break through opponents while maintaining bulk"
            }
            Self::Offense => {
                "Fast-paced team with synergy and switching in mind, featuring minimal but strategic defensive presence"
            }
            Self::Balanced => "Well-rounded team with mix of offensive and defensive elements",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Archetype-derived flags the checklist consults to decide applicability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamContext {
    pub archetype: Archetype,
    pub is_stall: bool,
    pub is_semi_stall: bool,
    pub is_hyper_offense: bool,
}

impl TeamContext {
    #[must_use]
    pub const fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            is_stall: matches!(archetype, Archetype::Stall),
            is_semi_stall: matches!(archetype, Archetype::SemiStall),
            is_hyper_offense: matches!(archetype, Archetype::HyperOffense),
        }
    }

    /// Stall or Semi-Stall.
    #[must_use]
    pub const fn is_defensive(&self) -> bool {
        self.is_stall || self.is_semi_stall
    }
}

/// Defensive trait paired with full HP and Def or SpD investment.
#[must_use]
pub fn is_bulky(creature: &Creature) -> bool {
    let has_trait = creature.ability_in(DEFENSIVE_ABILITIES)
        || creature.has_any_move(BULK_SUPPORT_MOVES);
    has_trait && creature.evs.is_fully_bulky()
}

/// Setup move or full investment in an attacking stat or Speed.
#[must_use]
pub fn is_offensive(creature: &Creature) -> bool {
    creature.has_any_move(SETUP_MOVES)
        || [Stat::Atk, Stat::SpA, Stat::Spe]
            .into_iter()
            .any(|stat| creature.evs.is_maxed(stat))
}

fn count(team: &[Creature], pred: impl Fn(&Creature) -> bool) -> usize {
    team.iter().filter(|c| pred(c)).count()
}

/// Classifies a roster. Total over every input, including the empty roster.
///
/// # Example
///
/// ```
/// use pokerate_core::{Ability, Creature};
/// use pokerate_evaluator::archetype::{Archetype, classify};
///
/// assert_eq!(classify(&[]), Archetype::Balanced);
///
/// let team = [Creature::new("Torkoal").with_ability(Ability::Drought)];
/// assert_eq!(classify(&team), Archetype::SunTeam);
/// ```
#[must_use]
pub fn classify(team: &[Creature]) -> Archetype {
    let bulky = count(team, is_bulky);
    let offensive = count(team, is_offensive);

    let archetype = if team.iter().any(|c| c.ability_is(&Ability::Drought)) {
        Archetype::SunTeam
    } else if bulky >= 5 {
        Archetype::Stall
    } else if (3..=4).contains(&bulky) {
        Archetype::SemiStall
    } else if is_hyper_offense(team) {
        Archetype::HyperOffense
    } else if (3..=5).contains(&bulky) && offensive >= 2 {
        Archetype::BulkyBalance
    } else if offensive >= 4 || is_breaker_pivot_offense(team) {
        Archetype::Offense
    } else {
        Archetype::Balanced
    };

    debug!(%archetype, bulky, offensive, "classified team");
    archetype
}

fn is_hyper_offense(team: &[Creature]) -> bool {
    let has_screens = team.iter().any(|c| c.has_any_move(OFFENSIVE_SCREEN_MOVES));
    let has_webs = team.iter().any(|c| c.has_move(&MoveName::StickyWeb));
    let setup_users = count(team, |c| c.has_any_move(SETUP_MOVES));
    has_screens || has_webs || setup_users >= 3
}

fn is_breaker_pivot_offense(team: &[Creature]) -> bool {
    let breakers = count(team, |c| c.holds_any(BREAKER_ITEMS));
    let pivots = count(team, |c| c.has_any_move(PIVOT_MOVES));
    breakers >= 2 && pivots >= 2
}
