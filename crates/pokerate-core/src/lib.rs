//! Domain model for rating competitive teams.
//!
//! - [`Creature`] - one roster member as written in a team export, plus species data
//! - [`ElementType`], [`Stat`], [`Nature`] - closed vocabularies with case-insensitive parsing
//! - [`Ability`], [`Item`], [`MoveName`] - canonical names the rating heuristics reason about
//! - [`paste`] - parser for the line-oriented team export format
//! - [`dex`] - species data (types, base stats, move types) loaded from JSON
//!
//! Free text is canonicalized once, at the parsing boundary. Everything downstream
//! compares enum values instead of strings.

pub use self::{creature::*, element_type::*, names::*, stat::*};

pub mod dex;
pub mod paste;

mod creature;
mod element_type;
mod names;
mod stat;
