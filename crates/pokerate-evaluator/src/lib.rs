//! Rating engine for competitive teams.
//!
//! A rating pass reads a roster of [`Creature`](pokerate_core::Creature)s and produces a
//! [`TeamRating`](rating::TeamRating): the team's archetype, one result per rule check and a
//! letter grade. [`coverage`] reports the roster's type matchups separately.
//!
//! # Architecture
//!
//! ```text
//! Rating (classify -> context -> checks -> grade)
//!     ↓ uses
//! Archetype Classifier          Checklist (15 checks)
//!     ↓ uses                        ↓ uses
//! Type Effectiveness            Stat Calculator
//! ```
//!
//! - [`effectiveness`] - type chart lookups with ability and item immunity overrides
//! - [`stat_calculator`] - effective stats from base value, investment, level and nature
//! - [`archetype`] - ordered decision list assigning one of seven archetypes
//! - [`team_check`] - the independent rule checks and their shared contract
//! - [`grade`] - pass rate and letter grade
//! - [`rating`] - one complete pass
//! - [`category`] - named move, ability and item sets the heuristics share
//!
//! # Missing Data
//!
//! Species data may not be populated when a roster is rated. The engine never waits or
//! fails on it: a member without types reads as immune to every attack, and a zero base
//! stat yields a zero effective stat. Both are "no information" sentinels, so a roster of
//! unpopulated members resists everything and has no fast members.
//!
//! # Example
//!
//! ```
//! use pokerate_core::paste;
//! use pokerate_evaluator::rating::rate_team;
//!
//! let team = paste::parse_team(
//!     "Garchomp @ Life Orb\nAbility: Rough Skin\nEVs: 252 Atk / 4 SpD / 252 Spe\nJolly Nature\n- Stealth Rock\n- Earthquake\n",
//! );
//! let rating = rate_team(&team);
//! assert_eq!(rating.checks.len(), 15);
//! assert!(rating.passed <= rating.total);
//! ```

pub mod archetype;
pub mod category;
pub mod coverage;
pub mod effectiveness;
pub mod grade;
pub mod rating;
pub mod stat_calculator;
pub mod team_check;
