//! Parser for the line-oriented team export format.
//!
//! ```text
//! Chompy (Garchomp) (F) @ Rocky Helmet
//! Ability: Rough Skin
//! Tera Type: Steel
//! EVs: 252 HP / 4 Atk / 252 Spe
//! Jolly Nature
//! - Stealth Rock
//! - Earthquake
//! ```
//!
//! A line that is not an attribute line starts a new creature. Parsing never fails:
//! unknown attributes are skipped and unparseable values are left unset, so a partial
//! or malformed export still yields a best-effort roster.
//!
//! This is also where free text is canonicalized into [`Ability`], [`Item`],
//! [`MoveName`], [`Nature`] and [`ElementType`] values.

use tracing::{debug, warn};

use crate::{Ability, Creature, ElementType, EvSpread, Gender, Item, MAX_MOVES, Move, MoveName};

/// Prefixes of attribute lines that carry no information the engine uses.
const IGNORED_PREFIXES: &[&str] = &[
    "Shiny:",
    "Happiness:",
    "Gigantamax:",
    "Dynamax Level:",
    "Hidden Power:",
    "Pokeball:",
];

/// Parses an exported team into creatures, in the order they appear.
///
/// # Example
///
/// ```
/// use pokerate_core::{Ability, Item, MoveName, Nature, paste};
///
/// let team = paste::parse_team(
///     "Toxapex @ Black Sludge\nAbility: Regenerator\nBold Nature\n- Recover\n- Toxic Spikes\n",
/// );
/// assert_eq!(team.len(), 1);
/// assert_eq!(team[0].species, "Toxapex");
/// assert_eq!(team[0].ability, Some(Ability::Regenerator));
/// assert_eq!(team[0].nature, Some(Nature::Bold));
/// assert!(team[0].has_move(&MoveName::Recover));
/// assert!(team[0].item.as_ref().is_some_and(Item::is_other));
/// ```
#[must_use]
pub fn parse_team(text: &str) -> Vec<Creature> {
    let mut team = vec![];
    let mut current: Option<Creature> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_attribute_line(line) {
            if let Some(creature) = &mut current {
                apply_attribute(creature, line);
            } else {
                debug!(line, "attribute line before any creature header");
            }
            continue;
        }
        if let Some(creature) = current.take() {
            team.push(creature);
        }
        current = Some(parse_header(line));
    }
    team.extend(current);
    team
}

fn is_attribute_line(line: &str) -> bool {
    line.starts_with('-')
        || line.starts_with("Ability:")
        || line.starts_with("Tera Type:")
        || line.starts_with("EVs:")
        || line.starts_with("IVs:")
        || line.starts_with("Level:")
        || line.ends_with("Nature")
        || IGNORED_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Parses `Nickname (Species) (G) @ Item`, where every part but the name is optional.
fn parse_header(line: &str) -> Creature {
    let (name_part, item) = match line.split_once('@') {
        Some((name, item)) => (name.trim(), Some(item.trim())),
        None => (line.trim(), None),
    };

    let mut name_part = name_part;
    let mut gender = None;
    if let Some(rest) = name_part
        .strip_suffix("(M)")
        .or_else(|| name_part.strip_suffix("(F)"))
    {
        gender = name_part.chars().nth_back(1).and_then(Gender::from_tag);
        name_part = rest.trim_end();
    }

    let (species, nickname) = match name_part
        .strip_suffix(')')
        .and_then(|rest| rest.rsplit_once('('))
    {
        Some((nickname, species)) => (species.trim(), Some(nickname.trim())),
        None => (name_part, None),
    };

    let mut creature = Creature::new(species);
    creature.nickname = nickname.filter(|n| !n.is_empty()).map(str::to_owned);
    creature.gender = gender;
    creature.item = item.filter(|i| !i.is_empty()).map(Item::from_text);
    creature
}

fn apply_attribute(creature: &mut Creature, line: &str) {
    if let Some(name) = line.strip_prefix('-') {
        let name = MoveName::from_text(name);
        if creature.moves.len() < MAX_MOVES {
            creature.moves.push(Move::new(name));
        } else {
            warn!(species = %creature.species, %name, "dropping move past the fourth slot");
        }
    } else if let Some(value) = line.strip_prefix("Ability:") {
        creature.ability = Some(Ability::from_text(value));
    } else if let Some(value) = line.strip_prefix("Tera Type:") {
        creature.tera_type = value.parse::<ElementType>().ok();
    } else if let Some(value) = line.strip_prefix("Level:") {
        creature.level = value.trim().parse().ok();
        if creature.level.is_none() {
            debug!(species = %creature.species, value, "unparseable level");
        }
    } else if let Some(value) = line.strip_prefix("EVs:") {
        creature.evs = EvSpread::parse_spread(value);
    } else if let Some(value) = line.strip_prefix("IVs:") {
        value.trim().clone_into(&mut creature.ivs);
    } else if line.ends_with("Nature") {
        let word = line.split_whitespace().next().unwrap_or_default();
        creature.nature = word.parse().ok();
        if creature.nature.is_none() {
            debug!(species = %creature.species, word, "unknown nature");
        }
    }
}
