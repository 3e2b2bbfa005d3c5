//! Effective stat derivation from base value, investment, level and nature.
//!
//! # Formula
//!
//! With `iv = 31`, `ev` the invested points in the stat and `level` the creature's level
//! (100 when unset):
//!
//! ```text
//! core = floor((2 * base + iv + floor(ev / 4)) * level / 100)
//! HP   = core + level + 10
//! other = floor((core + 5) * nature)     nature ∈ {0.9, 1.0, 1.1}
//! ```
//!
//! The nature multiplier is applied in integer arithmetic (`* 11 / 10`, `* 9 / 10`), which
//! gives the truncated result without floating point rounding surprises.
//!
//! A base value of 0 means species data is not available yet; the stat is then 0
//! regardless of every other input.

use pokerate_core::{Creature, Stat};

/// Individual value assumed for every stat.
pub const ASSUMED_IV: u32 = 31;

/// Level used when the creature does not state one.
pub const DEFAULT_LEVEL: u32 = 100;

/// Computes the effective value of `stat` for `creature`.
///
/// # Example
///
/// ```
/// use pokerate_core::{BaseStats, Creature, Nature, Stat};
/// use pokerate_evaluator::stat_calculator::calculate_stat;
///
/// let base = BaseStats { hp: 108, atk: 130, def: 95, spa: 80, spd: 85, spe: 102 };
/// let garchomp = Creature::new("Garchomp")
///     .with_base_stats(base)
///     .with_nature(Nature::Jolly)
///     .with_evs("252 Atk / 4 SpD / 252 Spe");
/// assert_eq!(calculate_stat(&garchomp, Stat::Spe), 333);
/// assert_eq!(calculate_stat(&garchomp, Stat::Hp), 357);
/// ```
#[must_use]
pub fn calculate_stat(creature: &Creature, stat: Stat) -> u32 {
    let base = u32::from(creature.base_stats.get(stat));
    if base == 0 {
        return 0;
    }

    let ev = u32::from(creature.evs.get(stat));
    let level = creature.level.map_or(DEFAULT_LEVEL, u32::from);
    let core = (2 * base + ASSUMED_IV + ev / 4) * level / 100;

    if stat == Stat::Hp {
        return core + level + 10;
    }

    let value = core + 5;
    let nature = creature.nature;
    if nature.and_then(|n| n.boosted()) == Some(stat) {
        value * 11 / 10
    } else if nature.and_then(|n| n.hindered()) == Some(stat) {
        value * 9 / 10
    } else {
        value
    }
}

/// Effective Speed, the stat the speed checks compare against thresholds.
#[must_use]
pub fn final_speed(creature: &Creature) -> u32 {
    calculate_stat(creature, Stat::Spe)
}

#[cfg(test)]
mod tests {
    use pokerate_core::{BaseStats, Nature};

    use super::*;

    fn with_speed(base_spe: u16) -> Creature {
        Creature::new("Test").with_base_stats(BaseStats {
            spe: base_spe,
            ..BaseStats::default()
        })
    }

    #[test]
    fn test_max_speed_jolly() {
        let dragapult = with_speed(142)
            .with_nature(Nature::Jolly)
            .with_evs("252 Atk / 4 SpD / 252 Spe");
        assert_eq!(final_speed(&dragapult), 421);

        let garchomp = with_speed(102)
            .with_nature(Nature::Jolly)
            .with_evs("252 Atk / 4 SpD / 252 Spe");
        assert_eq!(final_speed(&garchomp), 333);
    }

    #[test]
    fn test_hindering_nature() {
        let slow = with_speed(100).with_nature(Nature::Brave).with_evs("252 Spe");
        // (200 + 31 + 63) + 5 = 299, * 0.9 = 269.1
        assert_eq!(final_speed(&slow), 269);
    }

    #[test]
    fn test_zero_base_is_zero_for_every_input() {
        let creature = Creature::new("Unknown")
            .with_nature(Nature::Timid)
            .with_level(50)
            .with_evs("252 HP / 252 SpA / 4 Spe");
        for stat in Stat::ALL {
            assert_eq!(calculate_stat(&creature, stat), 0, "{stat}");
        }
    }

    #[test]
    fn test_neutral_nature_matches_no_nature() {
        let base = BaseStats {
            hp: 95,
            atk: 115,
            def: 90,
            spa: 80,
            spd: 90,
            spe: 60,
        };
        let plain = Creature::new("Test")
            .with_base_stats(base)
            .with_evs("252 HP / 252 Atk / 4 Def");
        for nature in [
            Nature::Hardy,
            Nature::Docile,
            Nature::Bashful,
            Nature::Quirky,
            Nature::Serious,
        ] {
            let natured = plain.clone().with_nature(nature);
            for stat in Stat::ALL {
                assert_eq!(
                    calculate_stat(&natured, stat),
                    calculate_stat(&plain, stat),
                    "{nature} {stat}"
                );
            }
        }
    }

    #[test]
    fn test_level_scaling() {
        let base = BaseStats {
            hp: 100,
            ..BaseStats::default()
        };
        let creature = Creature::new("Test").with_base_stats(base).with_level(50);
        // floor((200 + 31) * 50 / 100) + 50 + 10
        assert_eq!(calculate_stat(&creature, Stat::Hp), 175);
    }

    #[test]
    fn test_level_above_hundred() {
        let base = BaseStats {
            hp: 100,
            ..BaseStats::default()
        };
        let creature = Creature::new("Ditto").with_base_stats(base).with_level(300);
        // floor(231 * 300 / 100) + 300 + 10
        assert_eq!(calculate_stat(&creature, Stat::Hp), 1003);
    }

    #[test]
    fn test_investment_is_floored_to_multiples_of_four() {
        let three = with_speed(100).with_evs("3 Spe");
        let none = with_speed(100);
        assert_eq!(final_speed(&three), final_speed(&none));
    }
}
