use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown stat label: {label:?}")]
pub struct ParseStatError {
    label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown nature: {name:?}")]
pub struct ParseNatureError {
    name: String,
}

/// One of the six battle stats.
///
/// Labels follow the export format (`HP`, `Atk`, `Def`, `SpA`, `SpD`, `Spe`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    #[serde(rename = "hp")]
    Hp,
    #[serde(rename = "atk")]
    Atk,
    #[serde(rename = "def")]
    Def,
    #[serde(rename = "spa")]
    SpA,
    #[serde(rename = "spd")]
    SpD,
    #[serde(rename = "spe")]
    Spe,
}

impl Stat {
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Atk,
        Self::Def,
        Self::SpA,
        Self::SpD,
        Self::Spe,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Atk => "Atk",
            Self::Def => "Def",
            Self::SpA => "SpA",
            Self::SpD => "SpD",
            Self::Spe => "Spe",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stat {
    type Err = ParseStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|stat| stat.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseStatError {
                label: trimmed.to_owned(),
            })
    }
}

/// A nature: neutral, or boosting one stat by 10% and hindering another by 10%.
///
/// # Example
///
/// ```
/// use pokerate_core::{Nature, Stat};
///
/// let jolly: Nature = "jolly".parse().unwrap();
/// assert_eq!(jolly.boosted(), Some(Stat::Spe));
/// assert_eq!(jolly.hindered(), Some(Stat::SpA));
/// assert_eq!(Nature::Hardy.boosted(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Adamant,
    Bashful,
    Bold,
    Brave,
    Calm,
    Careful,
    Docile,
    Gentle,
    Hardy,
    Hasty,
    Impish,
    Jolly,
    Lax,
    Lonely,
    Mild,
    Modest,
    Naive,
    Naughty,
    Quiet,
    Quirky,
    Rash,
    Relaxed,
    Sassy,
    Serious,
    Timid,
}

impl Nature {
    pub const ALL: [Self; 25] = [
        Self::Adamant,
        Self::Bashful,
        Self::Bold,
        Self::Brave,
        Self::Calm,
        Self::Careful,
        Self::Docile,
        Self::Gentle,
        Self::Hardy,
        Self::Hasty,
        Self::Impish,
        Self::Jolly,
        Self::Lax,
        Self::Lonely,
        Self::Mild,
        Self::Modest,
        Self::Naive,
        Self::Naughty,
        Self::Quiet,
        Self::Quirky,
        Self::Rash,
        Self::Relaxed,
        Self::Sassy,
        Self::Serious,
        Self::Timid,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adamant => "Adamant",
            Self::Bashful => "Bashful",
            Self::Bold => "Bold",
            Self::Brave => "Brave",
            Self::Calm => "Calm",
            Self::Careful => "Careful",
            Self::Docile => "Docile",
            Self::Gentle => "Gentle",
            Self::Hardy => "Hardy",
            Self::Hasty => "Hasty",
            Self::Impish => "Impish",
            Self::Jolly => "Jolly",
            Self::Lax => "Lax",
            Self::Lonely => "Lonely",
            Self::Mild => "Mild",
            Self::Modest => "Modest",
            Self::Naive => "Naive",
            Self::Naughty => "Naughty",
            Self::Quiet => "Quiet",
            Self::Quirky => "Quirky",
            Self::Rash => "Rash",
            Self::Relaxed => "Relaxed",
            Self::Sassy => "Sassy",
            Self::Serious => "Serious",
            Self::Timid => "Timid",
        }
    }

    /// `(boosted, hindered)`; both `None` for the five neutral natures.
    #[must_use]
    pub const fn modifiers(self) -> (Option<Stat>, Option<Stat>) {
        use Stat::{Atk, Def, SpA, SpD, Spe};
        match self {
            Self::Bashful | Self::Docile | Self::Hardy | Self::Quirky | Self::Serious => {
                (None, None)
            }
            Self::Adamant => (Some(Atk), Some(SpA)),
            Self::Bold => (Some(Def), Some(Atk)),
            Self::Brave => (Some(Atk), Some(Spe)),
            Self::Calm => (Some(SpD), Some(Atk)),
            Self::Careful => (Some(SpD), Some(SpA)),
            Self::Gentle => (Some(SpD), Some(Def)),
            Self::Hasty => (Some(Spe), Some(Def)),
            Self::Impish => (Some(Def), Some(SpA)),
            Self::Jolly => (Some(Spe), Some(SpA)),
            Self::Lax => (Some(Def), Some(SpD)),
            Self::Lonely => (Some(Atk), Some(Def)),
            Self::Mild => (Some(SpA), Some(Def)),
            Self::Modest => (Some(SpA), Some(Atk)),
            Self::Naive => (Some(Spe), Some(SpD)),
            Self::Naughty => (Some(Atk), Some(SpD)),
            Self::Quiet => (Some(SpA), Some(Spe)),
            Self::Rash => (Some(SpA), Some(SpD)),
            Self::Relaxed => (Some(Def), Some(Spe)),
            Self::Sassy => (Some(SpD), Some(Spe)),
            Self::Timid => (Some(Spe), Some(Atk)),
        }
    }

    #[must_use]
    pub const fn boosted(self) -> Option<Stat> {
        self.modifiers().0
    }

    #[must_use]
    pub const fn hindered(self) -> Option<Stat> {
        self.modifiers().1
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nature {
    type Err = ParseNatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|nature| nature.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseNatureError {
                name: trimmed.to_owned(),
            })
    }
}

/// Six per-stat values indexed by [`Stat`].
///
/// Used for base stats (where 0 means "not yet available") and for EV investment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u16,
    #[serde(default)]
    pub atk: u16,
    #[serde(default)]
    pub def: u16,
    #[serde(default)]
    pub spa: u16,
    #[serde(default)]
    pub spd: u16,
    #[serde(default)]
    pub spe: u16,
}

/// Base stats of a species. A zero entry means the data has not been populated.
pub type BaseStats = StatTable;

/// EV investment of a creature.
pub type EvSpread = StatTable;

impl StatTable {
    #[must_use]
    pub const fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpA => self.spa,
            Stat::SpD => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u16) {
        let slot = match stat {
            Stat::Hp => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpA => &mut self.spa,
            Stat::SpD => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *slot = value;
    }

    /// Whether `stat` carries a full 252 investment.
    #[must_use]
    pub const fn is_maxed(&self, stat: Stat) -> bool {
        self.get(stat) == 252
    }

    /// Full HP investment paired with full Def or SpD investment.
    #[must_use]
    pub const fn is_fully_bulky(&self) -> bool {
        self.is_maxed(Stat::Hp) && (self.is_maxed(Stat::Def) || self.is_maxed(Stat::SpD))
    }

    /// Parses an export-format spread such as `"252 Atk / 4 SpD / 252 Spe"`.
    ///
    /// Each `/`-separated segment is `<value> <stat>`. Segments that do not parse are
    /// ignored, so unlisted or malformed stats stay at 0. When a stat appears twice the
    /// first occurrence wins.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerate_core::{EvSpread, Stat};
    ///
    /// let evs = EvSpread::parse_spread("252 Atk / 4 SpD / 252 Spe");
    /// assert_eq!(evs.get(Stat::Atk), 252);
    /// assert_eq!(evs.get(Stat::SpD), 4);
    /// assert_eq!(evs.get(Stat::Hp), 0);
    /// ```
    #[must_use]
    pub fn parse_spread(text: &str) -> Self {
        let mut table = Self::default();
        let mut seen = [false; 6];
        for segment in text.split('/') {
            let mut tokens = segment.split_whitespace();
            let (Some(value), Some(label), None) = (tokens.next(), tokens.next(), tokens.next())
            else {
                continue;
            };
            let (Ok(value), Ok(stat)) = (value.parse::<u16>(), label.parse::<Stat>()) else {
                continue;
            };
            if !seen[stat.index()] {
                seen[stat.index()] = true;
                table.set(stat, value);
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_non_neutral_nature_boosts_and_hinders_different_stats() {
        for nature in Nature::ALL {
            match nature.modifiers() {
                (None, None) => {}
                (Some(boosted), Some(hindered)) => assert_ne!(boosted, hindered),
                other => panic!("{nature} has one-sided modifiers: {other:?}"),
            }
        }
    }

    #[test]
    fn test_neutral_natures() {
        let neutral = Nature::ALL
            .into_iter()
            .filter(|n| n.boosted().is_none())
            .count();
        assert_eq!(neutral, 5);
    }

    #[test]
    fn test_parse_spread_ignores_malformed_segments() {
        let evs = EvSpread::parse_spread("252 HP / lots Def / 252 SpD / 8");
        assert_eq!(evs.hp, 252);
        assert_eq!(evs.def, 0);
        assert_eq!(evs.spd, 252);
        assert!(evs.is_fully_bulky());
    }

    #[test]
    fn test_parse_spread_empty() {
        assert_eq!(EvSpread::parse_spread(""), EvSpread::default());
    }

    #[test]
    fn test_fully_bulky_requires_hp() {
        let evs = EvSpread::parse_spread("252 Def / 252 SpD / 4 HP");
        assert!(!evs.is_fully_bulky());
    }
}
