//! The individual rule checks.
//!
//! Every check is a unit struct implementing [`TeamCheck`]. Skip conditions are evaluated
//! first; an applicable check always produces a status plus a details line.

use pokerate_core::{Ability, Creature, ElementType, Item, MoveName, Stat};

use super::{BoxedTeamCheck, CheckResult, CheckStatus, TeamCheck};
use crate::{
    archetype::{Archetype, TeamContext},
    category::{
        DEFENSIVE_ABILITIES, ELECTRIC_ABSORBING_ABILITIES, GROUND_IMMUNE_ABILITIES,
        HAZARD_REMOVAL_MOVES, PIVOT_MOVES, PRIORITY_MOVES, RECOVERY_MOVES, SCREEN_MOVES,
        STATUS_ABSORBING_ABILITIES, is_knock_off_absorber,
    },
    effectiveness::standard_effectiveness,
    stat_calculator::final_speed,
};

/// Speed a team needs on at least one member to pass [`FastPokemon`].
pub const FAST_SPEED_THRESHOLD: u32 = 350;

/// Number of Heavy-Duty Boots holders at which hazard checks no longer apply.
const BOOTS_SPAM_THRESHOLD: usize = 3;

/// Maximum number of unresisted types [`TypeResistance`] tolerates.
const MAX_UNRESISTED_TYPES: usize = 3;

fn pass_or(pass: bool, otherwise: CheckStatus) -> CheckStatus {
    if pass { CheckStatus::Pass } else { otherwise }
}

fn count(team: &[Creature], pred: impl Fn(&Creature) -> bool) -> usize {
    team.iter().filter(|c| pred(c)).count()
}

fn boots_holders(team: &[Creature]) -> usize {
    count(team, |c| c.holds(&Item::HeavyDutyBoots))
}

macro_rules! check_identity {
    ($id:literal, $name:literal) => {
        fn id(&self) -> &'static str {
            $id
        }
        fn name(&self) -> &'static str {
            $name
        }
        fn clone_boxed(&self) -> BoxedTeamCheck {
            Box::new(self.clone())
        }
    };
}

/// At least one member carries a priority move.
///
/// Skipped for Stall and Semi-Stall.
#[derive(Debug, Clone)]
pub struct PriorityMoves;

impl TeamCheck for PriorityMoves {
    check_identity!("priority_moves", "Priority Moves");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        if context.is_defensive() {
            return self.skipped(&format!("{} teams rely less on priority", context.archetype));
        }

        let users: Vec<String> = team
            .iter()
            .filter(|c| c.has_any_move(PRIORITY_MOVES))
            .map(|c| {
                let moves: Vec<&str> = c.moves_in(PRIORITY_MOVES).map(|m| m.name.name()).collect();
                format!("{} ({})", c.species, moves.join("/"))
            })
            .collect();

        let details = if users.is_empty() {
            "No priority moves found".to_owned()
        } else {
            format!("Users: {}", users.join(", "))
        };
        self.evaluated(
            pass_or(!users.is_empty(), CheckStatus::Warning),
            "At least one priority move is recommended for speed control",
            details,
        )
    }
}

/// At least one member reaches [`FAST_SPEED_THRESHOLD`] Speed.
///
/// Skipped for Stall and Semi-Stall.
#[derive(Debug, Clone)]
pub struct FastPokemon;

impl TeamCheck for FastPokemon {
    check_identity!("fast_pokemon", "Fast Pokemon");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        if context.is_defensive() {
            return self.skipped("Defensive teams don't prioritize speed tiers");
        }

        let fastest = team.iter().map(final_speed).max().unwrap_or(0);
        self.evaluated(
            pass_or(fastest >= FAST_SPEED_THRESHOLD, CheckStatus::Fail),
            &format!(
                "Team needs a Pokemon with at least {FAST_SPEED_THRESHOLD} Speed to avoid being swept"
            ),
            format!("Fastest speed: {fastest}"),
        )
    }
}

/// Stealth Rock is set, or the team uses Sticky Web or screens instead.
///
/// Never skipped.
#[derive(Debug, Clone)]
pub struct EntryHazards;

impl TeamCheck for EntryHazards {
    check_identity!("entry_hazards", "Entry Hazards");

    fn check(&self, team: &[Creature], _context: &TeamContext) -> CheckResult {
        let has_sticky_web = team.iter().any(|c| c.has_move(&MoveName::StickyWeb));
        let has_screens = team.iter().any(|c| c.has_any_move(SCREEN_MOVES));
        if has_sticky_web || has_screens {
            let details = if has_sticky_web {
                "Has Sticky Web"
            } else {
                "Has Screens"
            };
            return self.evaluated(
                CheckStatus::Pass,
                "Sticky Web or Screens team detected",
                details.to_owned(),
            );
        }

        let has_stealth_rock = team.iter().any(|c| c.has_move(&MoveName::StealthRock));
        let details = if has_stealth_rock {
            "Has Stealth Rock"
        } else {
            "Missing Stealth Rock"
        };
        self.evaluated(
            pass_or(has_stealth_rock, CheckStatus::Fail),
            "Stealth Rock is essential for chip damage",
            details.to_owned(),
        )
    }
}

/// A hazard removal move or Magic Bounce.
///
/// Skipped for Hyper Offense and for teams with three or more Heavy-Duty Boots holders.
#[derive(Debug, Clone)]
pub struct HazardControl;

impl TeamCheck for HazardControl {
    check_identity!("hazard_control", "Hazard Control");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        if context.is_hyper_offense {
            return self.skipped("HO teams often skip removal");
        }
        if boots_holders(team) >= BOOTS_SPAM_THRESHOLD {
            return self.skipped("Team relies on Heavy-Duty Boots spam");
        }

        let has_removal = team.iter().any(|c| c.has_any_move(HAZARD_REMOVAL_MOVES));
        let has_magic_bounce = team.iter().any(|c| c.ability_is(&Ability::MagicBounce));
        let details = if has_removal {
            "Has removal move"
        } else if has_magic_bounce {
            "Has Magic Bounce"
        } else {
            "No hazard removal found"
        };
        self.evaluated(
            pass_or(has_removal || has_magic_bounce, CheckStatus::Fail),
            "Rapid Spin or Defog is needed to remove hazards",
            details.to_owned(),
        )
    }
}

/// A grounded Poison type to absorb Toxic Spikes.
///
/// Skipped for Hyper Offense, Heavy-Duty Boots spam, and teams with three or more
/// Steel or Flying members (counted per type, so a Steel/Flying member counts twice).
#[derive(Debug, Clone)]
pub struct ToxicSpikesAbsorber;

impl TeamCheck for ToxicSpikesAbsorber {
    check_identity!("toxic_spikes_absorber", "Toxic Spikes Absorber");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        if context.is_hyper_offense {
            return self.skipped("Hyper Offense teams don't require hazard control");
        }
        if boots_holders(team) >= BOOTS_SPAM_THRESHOLD {
            return self.skipped("Team relies on Heavy-Duty Boots");
        }
        let steel = count(team, |c| c.has_type(ElementType::Steel));
        let flying = count(team, |c| c.has_type(ElementType::Flying));
        if steel + flying >= 3 {
            return self.skipped("Team has enough immunities to Toxic Spikes");
        }

        let grounded_poison = count(team, |c| {
            c.has_type(ElementType::Poison)
                && !c.has_type(ElementType::Flying)
                && !c.ability_is(&Ability::Levitate)
                && !c.holds(&Item::AirBalloon)
        });
        let details = if grounded_poison > 0 {
            format!("Has {grounded_poison} grounded Poison-type(s)")
        } else {
            "No grounded Poison-type found".to_owned()
        };
        self.evaluated(
            pass_or(grounded_poison > 0, CheckStatus::Warning),
            "A grounded Poison-type absorbs Toxic Spikes",
            details,
        )
    }
}

/// A status-absorbing ability or Lum Berry, or typing immunities to at least two kinds
/// of status.
///
/// Never skipped.
#[derive(Debug, Clone)]
pub struct StatusImmunity;

impl TeamCheck for StatusImmunity {
    check_identity!("status_immunity", "Status Immunity");

    fn check(&self, team: &[Creature], _context: &TeamContext) -> CheckResult {
        let has_absorber = team
            .iter()
            .any(|c| c.ability_in(STATUS_ABSORBING_ABILITIES) || c.holds(&Item::LumBerry));

        let any_type = |types: &[ElementType]| {
            team.iter()
                .any(|c| types.iter().any(|ty| c.has_type(*ty)))
        };
        let immunities: Vec<&str> = [
            (&[ElementType::Ground, ElementType::Electric][..], "Paralysis"),
            (&[ElementType::Fire][..], "Burn"),
            (&[ElementType::Grass][..], "Powder/Spore"),
            (&[ElementType::Poison, ElementType::Steel][..], "Poison"),
        ]
        .into_iter()
        .filter(|(types, _)| any_type(types))
        .map(|(_, status)| status)
        .collect();

        let details = if immunities.is_empty() {
            "No status immunities found".to_owned()
        } else {
            format!("Immune to: {}", immunities.join(", "))
        };
        self.evaluated(
            pass_or(has_absorber || immunities.len() >= 2, CheckStatus::Warning),
            "Team should handle status conditions (Burn, Para, Sleep)",
            details,
        )
    }
}

/// At most [`MAX_UNRESISTED_TYPES`] attacking types go unresisted by every member.
///
/// A member without recorded types reads as immune to everything, so it resists every
/// type; the details name such members so the result can be read with that in mind.
///
/// Skipped for Hyper Offense.
#[derive(Debug, Clone)]
pub struct TypeResistance;

impl TeamCheck for TypeResistance {
    check_identity!("type_resistance", "Type Resistance");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        if context.is_hyper_offense {
            return self.skipped("HO teams don't require full type coverage");
        }

        let unresisted: Vec<&str> = ElementType::ALL
            .into_iter()
            .filter(|ty| !team.iter().any(|c| standard_effectiveness(*ty, c) < 1.0))
            .map(ElementType::as_str)
            .collect();

        let mut details = if unresisted.is_empty() {
            "Resists all types".to_owned()
        } else {
            format!("Weak to: {}", unresisted.join(", "))
        };
        let untyped: Vec<&str> = team
            .iter()
            .filter(|c| c.is_untyped())
            .map(|c| c.species.as_str())
            .collect();
        if !untyped.is_empty() {
            details.push_str(&format!(
                " (no type data for {}; counted as resisting every type)",
                untyped.join(", ")
            ));
        }

        self.evaluated(
            pass_or(unresisted.len() <= MAX_UNRESISTED_TYPES, CheckStatus::Warning),
            "Team should resist most common types",
            details,
        )
    }
}

/// At least one Steel-type member.
///
/// Skipped for Stall and Hyper Offense.
#[derive(Debug, Clone)]
pub struct SteelType;

impl TeamCheck for SteelType {
    check_identity!("steel_type", "Steel Type");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        if context.is_stall || context.is_hyper_offense {
            return self.skipped(&format!(
                "{} teams have different structural requirements",
                context.archetype
            ));
        }

        let steel = count(team, |c| c.has_type(ElementType::Steel));
        let details = if steel > 0 {
            format!("Has {steel} Steel-type(s)")
        } else {
            "No Steel-type found".to_owned()
        };
        self.evaluated(
            pass_or(steel > 0, CheckStatus::Warning),
            "Having a Steel-type is highly recommended",
            details,
        )
    }
}

/// A Flying type, Levitate / Earth Eater, or an Air Balloon holder.
///
/// Never skipped.
#[derive(Debug, Clone)]
pub struct GroundImmunity;

impl TeamCheck for GroundImmunity {
    check_identity!("ground_immunity", "Ground Immunity");

    fn check(&self, team: &[Creature], _context: &TeamContext) -> CheckResult {
        let immune = team.iter().any(|c| {
            c.has_type(ElementType::Flying)
                || c.ability_in(GROUND_IMMUNE_ABILITIES)
                || c.holds(&Item::AirBalloon)
        });
        let details = if immune {
            "Has Ground immunity"
        } else {
            "No Ground immunity found"
        };
        self.evaluated(
            pass_or(immune, CheckStatus::Fail),
            "Must have a switch-in for Earthquake",
            details.to_owned(),
        )
    }
}

/// A Ground type, Lightning Rod or Volt Absorb.
///
/// Skipped for Hyper Offense.
#[derive(Debug, Clone)]
pub struct ElectricImmunity;

impl TeamCheck for ElectricImmunity {
    check_identity!("electric_immunity", "Electric Immunity");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        if context.is_hyper_offense {
            return self.skipped("HO teams prioritize offense over blocking Volt Switch");
        }

        let immune = team.iter().any(|c| {
            c.has_type(ElementType::Ground) || c.ability_in(ELECTRIC_ABSORBING_ABILITIES)
        });
        let details = if immune {
            "Has Electric immunity"
        } else {
            "No Electric immunity found"
        };
        self.evaluated(
            pass_or(immune, CheckStatus::Warning),
            "Need to stop Volt Switch momentum",
            details.to_owned(),
        )
    }
}

/// At least one pivot move.
///
/// Skipped for Stall and Hyper Offense.
#[derive(Debug, Clone)]
pub struct PivotingMoves;

impl TeamCheck for PivotingMoves {
    check_identity!("pivoting_moves", "Pivoting Moves");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        if context.is_stall || context.is_hyper_offense {
            return self.skipped(&format!(
                "{} teams don't require pivoting moves",
                context.archetype
            ));
        }

        let has_pivot = team.iter().any(|c| c.has_any_move(PIVOT_MOVES));
        let details = if has_pivot {
            "Has pivoting moves"
        } else {
            "No pivoting moves found - consider U-turn or Volt Switch"
        };
        self.evaluated(
            pass_or(has_pivot, CheckStatus::Warning),
            "Recommended to have pivoting moves for momentum",
            details.to_owned(),
        )
    }
}

/// At least one Knock Off user.
///
/// Skipped for Hyper Offense.
#[derive(Debug, Clone)]
pub struct KnockOffUser;

impl TeamCheck for KnockOffUser {
    check_identity!("knock_off_user", "Knock Off User");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        if context.is_hyper_offense {
            return self.skipped("HO teams focus on KOing rather than item removal");
        }

        let has_knock_off = team.iter().any(|c| c.has_move(&MoveName::KnockOff));
        let details = if has_knock_off {
            "Has Knock Off user"
        } else {
            "No Knock Off user found"
        };
        self.evaluated(
            pass_or(has_knock_off, CheckStatus::Warning),
            "Knock Off is one of the best utility moves",
            details.to_owned(),
        )
    }
}

/// Sticky Hold, a known absorber species, or a Booster Energy holder.
///
/// Never skipped.
#[derive(Debug, Clone)]
pub struct KnockOffAbsorber;

impl TeamCheck for KnockOffAbsorber {
    check_identity!("knock_off_absorber", "Knock Off Absorber");

    fn check(&self, team: &[Creature], _context: &TeamContext) -> CheckResult {
        let has_absorber = team.iter().any(|c| {
            c.ability_is(&Ability::StickyHold)
                || is_knock_off_absorber(&c.species)
                || c.holds(&Item::BoosterEnergy)
        });
        let details = if has_absorber {
            "Has Knock Off absorber"
        } else {
            "No dedicated Knock Off absorber"
        };
        self.evaluated(
            pass_or(has_absorber, CheckStatus::Warning),
            "Nice to have a Knock Off absorber",
            details.to_owned(),
        )
    }
}

/// At least two defensive members: a recovery move, a defensive ability, or full HP plus
/// full Def or SpD investment.
///
/// Evaluated for Stall, Semi-Stall, Bulky Balance and Balanced; skipped otherwise.
#[derive(Debug, Clone)]
pub struct DefensiveCore;

impl TeamCheck for DefensiveCore {
    check_identity!("defensive_core", "Defensive Core");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        let applies = matches!(
            context.archetype,
            Archetype::Stall | Archetype::SemiStall | Archetype::BulkyBalance | Archetype::Balanced
        );
        if !applies {
            return self.skipped("Offensive teams rely on speed and power");
        }

        let defensive = count(team, |c| {
            c.has_any_move(RECOVERY_MOVES)
                || c.ability_in(DEFENSIVE_ABILITIES)
                || c.evs.is_fully_bulky()
        });
        self.evaluated(
            pass_or(defensive >= 2, CheckStatus::Fail),
            "Team needs a defensive backbone",
            format!("Has {defensive} defensive Pokemon"),
        )
    }
}

/// A fully invested physical attacker and a fully invested special attacker.
///
/// Skipped for Stall and Semi-Stall.
#[derive(Debug, Clone)]
pub struct DamageSplit;

impl TeamCheck for DamageSplit {
    check_identity!("damage_split", "Damage Split");

    fn check(&self, team: &[Creature], context: &TeamContext) -> CheckResult {
        if context.is_defensive() {
            return self.skipped("Stall teams rely on passive damage");
        }

        let physical = team.iter().any(|c| c.evs.is_maxed(Stat::Atk));
        let special = team.iter().any(|c| c.evs.is_maxed(Stat::SpA));
        let details = if physical && special {
            "Has mixed damage sources"
        } else {
            "Lacks damage diversity"
        };
        self.evaluated(
            pass_or(physical && special, CheckStatus::Warning),
            "Team should have both Physical and Special attackers",
            details.to_owned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pokerate_core::{BaseStats, Nature};

    use super::*;
    use crate::{archetype::classify, team_check::all_team_checks};

    fn balanced() -> TeamContext {
        TeamContext::new(Archetype::Balanced)
    }

    fn wall() -> Creature {
        Creature::new("Toxapex")
            .with_types([ElementType::Poison, ElementType::Water])
            .with_ability(Ability::Regenerator)
            .with_moves([MoveName::Recover, MoveName::Other("Haze".to_owned())])
            .with_evs("252 HP / 252 Def / 4 SpD")
    }

    #[test]
    fn test_stall_team_skips_priority() {
        let team = vec![wall(); 5];
        let context = TeamContext::new(classify(&team));
        assert_eq!(context.archetype, Archetype::Stall);
        let result = PriorityMoves.check(&team, &context);
        assert_eq!(result.status, CheckStatus::Skip);
        assert_eq!(result.description, "Stall teams rely less on priority");
    }

    #[test]
    fn test_missing_stealth_rock_fails() {
        let team = [Creature::new("Garchomp").with_moves([MoveName::Spikes, MoveName::UTurn])];
        let result = EntryHazards.check(&team, &balanced());
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.details.as_deref(), Some("Missing Stealth Rock"));
    }

    #[test]
    fn test_screens_replace_stealth_rock() {
        let team = [Creature::new("Grimmsnarl").with_moves([MoveName::Reflect])];
        let result = EntryHazards.check(&team, &balanced());
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.details.as_deref(), Some("Has Screens"));
    }

    #[test]
    fn test_priority_users_are_listed() {
        let team = [Creature::new("Dragonite")
            .with_moves([MoveName::ExtremeSpeed, MoveName::DragonDance])];
        let result = PriorityMoves.check(&team, &balanced());
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(
            result.details.as_deref(),
            Some("Users: Dragonite (Extreme Speed)")
        );
    }

    #[test]
    fn test_fast_pokemon_threshold() {
        let fast = Creature::new("Dragapult")
            .with_base_stats(BaseStats {
                spe: 142,
                ..BaseStats::default()
            })
            .with_evs("252 Spe")
            .with_nature(pokerate_core::Nature::Timid);
        let result = FastPokemon.check(&[fast], &balanced());
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.details.as_deref(), Some("Fastest speed: 421"));

        let unknown = FastPokemon.check(&[Creature::new("Dragapult")], &balanced());
        assert_eq!(unknown.status, CheckStatus::Fail);
        assert_eq!(unknown.details.as_deref(), Some("Fastest speed: 0"));
    }

    #[test]
    fn test_boots_spam_skips_hazard_checks() {
        let booted = Creature::new("Dragapult").with_item(Item::HeavyDutyBoots);
        let team = vec![booted; 3];
        assert!(HazardControl.check(&team, &balanced()).status.is_skip());
        assert!(ToxicSpikesAbsorber.check(&team, &balanced()).status.is_skip());
    }

    #[test]
    fn test_toxic_spikes_absorber_must_be_grounded() {
        let floating = Creature::new("Weezing")
            .with_types([ElementType::Poison])
            .with_ability(Ability::Levitate);
        let result = ToxicSpikesAbsorber.check(&[floating], &balanced());
        assert_eq!(result.status, CheckStatus::Warning);

        let result = ToxicSpikesAbsorber.check(&[wall()], &balanced());
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(
            result.details.as_deref(),
            Some("Has 1 grounded Poison-type(s)")
        );
    }

    #[test]
    fn test_status_immunity_from_typing() {
        let team = [
            Creature::new("Heatran").with_types([ElementType::Fire, ElementType::Steel]),
        ];
        let result = StatusImmunity.check(&team, &balanced());
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.details.as_deref(), Some("Immune to: Burn, Poison"));

        let single = [Creature::new("Arcanine").with_types([ElementType::Fire])];
        assert_eq!(
            StatusImmunity.check(&single, &balanced()).status,
            CheckStatus::Warning
        );
    }

    #[test]
    fn test_type_resistance_flags_untyped_members() {
        let team = [Creature::new("Missingno")];
        let result = TypeResistance.check(&team, &balanced());
        assert_eq!(result.status, CheckStatus::Pass);
        let details = result.details.unwrap_or_default();
        assert!(details.starts_with("Resists all types"));
        assert!(details.contains("Missingno"));
    }

    #[test]
    fn test_type_resistance_counts_unresisted_types() {
        let team = [Creature::new("Snorlax").with_types([ElementType::Normal])];
        let result = TypeResistance.check(&team, &balanced());
        // Normal resists only Ghost (immune)
        assert_eq!(result.status, CheckStatus::Warning);
        assert!(!result.details.unwrap_or_default().contains("ghost"));
    }

    #[test]
    fn test_ground_and_electric_immunity() {
        let team = [
            Creature::new("Rotom-Wash")
                .with_types([ElementType::Electric, ElementType::Water])
                .with_ability(Ability::Levitate),
            Creature::new("Lanturn")
                .with_types([ElementType::Water, ElementType::Electric])
                .with_ability(Ability::VoltAbsorb),
        ];
        assert!(GroundImmunity.check(&team, &balanced()).status.is_pass());
        assert!(ElectricImmunity.check(&team, &balanced()).status.is_pass());
    }

    #[test]
    fn test_knock_off_absorber_by_species() {
        let team = [Creature::new("ting-lu")];
        assert!(KnockOffAbsorber.check(&team, &balanced()).status.is_pass());
    }

    #[test]
    fn test_defensive_core_applicability() {
        let team = vec![wall(); 2];
        assert!(DefensiveCore.check(&team, &balanced()).status.is_pass());
        let offense = TeamContext::new(Archetype::Offense);
        assert!(DefensiveCore.check(&team, &offense).status.is_skip());
        let sun = TeamContext::new(Archetype::SunTeam);
        assert!(DefensiveCore.check(&team, &sun).status.is_skip());
    }

    #[test]
    fn test_damage_split_requires_both_sides() {
        let physical = Creature::new("Garchomp").with_evs("252 Atk / 252 Spe");
        let special = Creature::new("Gholdengo").with_evs("252 SpA / 252 Spe");
        let result = DamageSplit.check(&[physical.clone()], &balanced());
        assert_eq!(result.status, CheckStatus::Warning);
        let result = DamageSplit.check(&[physical, special], &balanced());
        assert_eq!(result.status, CheckStatus::Pass);
    }

    /// A roster that passes every check that applies to it.
    fn complete_team() -> Vec<Creature> {
        vec![
            wall(),
            Creature::new("Corviknight")
                .with_types([ElementType::Steel, ElementType::Flying])
                .with_ability(Ability::Pressure)
                .with_moves([MoveName::Roost, MoveName::Defog])
                .with_evs("252 HP / 4 Def / 252 SpD"),
            Creature::new("Garchomp")
                .with_types([ElementType::Dragon, ElementType::Ground])
                .with_item(Item::LumBerry)
                .with_moves([MoveName::StealthRock, MoveName::KnockOff])
                .with_evs("252 Atk / 4 SpD / 252 Spe"),
            Creature::new("Dragapult")
                .with_types([ElementType::Dragon, ElementType::Ghost])
                .with_item(Item::BoosterEnergy)
                .with_base_stats(BaseStats {
                    spe: 142,
                    ..BaseStats::default()
                })
                .with_nature(Nature::Timid)
                .with_moves([MoveName::UTurn, MoveName::ShadowSneak])
                .with_evs("252 SpA / 4 SpD / 252 Spe"),
        ]
    }

    fn skipped_for(id: &str) -> &'static [Archetype] {
        use Archetype::{HyperOffense, Offense, SemiStall, Stall, SunTeam};
        match id {
            "priority_moves" | "fast_pokemon" | "damage_split" => &[Stall, SemiStall],
            "hazard_control" | "toxic_spikes_absorber" | "type_resistance"
            | "electric_immunity" | "knock_off_user" => &[HyperOffense],
            "steel_type" | "pivoting_moves" => &[Stall, HyperOffense],
            "defensive_core" => &[SunTeam, HyperOffense, Offense],
            "entry_hazards" | "status_immunity" | "ground_immunity" | "knock_off_absorber" => {
                &[]
            }
            other => panic!("unexpected check {other}"),
        }
    }

    #[test]
    fn test_skip_matrix_by_archetype() {
        let team = complete_team();
        for archetype in Archetype::ALL {
            let context = TeamContext::new(archetype);
            for check in all_team_checks() {
                let expected = if skipped_for(check.id()).contains(&archetype) {
                    CheckStatus::Skip
                } else {
                    CheckStatus::Pass
                };
                let result = check.check(&team, &context);
                assert_eq!(result.status, expected, "{archetype} {}", check.id());
            }
        }
    }

    #[test]
    fn test_steel_and_flying_types_skip_toxic_spikes() {
        let skarmory = Creature::new("Skarmory").with_types([ElementType::Steel, ElementType::Flying]);
        let tinkaton = Creature::new("Tinkaton").with_types([ElementType::Fairy, ElementType::Steel]);
        let result = ToxicSpikesAbsorber.check(&[skarmory.clone(), tinkaton], &balanced());
        assert_eq!(result.status, CheckStatus::Skip);
        assert_eq!(
            result.description,
            "Team has enough immunities to Toxic Spikes"
        );

        // two is not enough
        let result = ToxicSpikesAbsorber.check(&[skarmory], &balanced());
        assert_eq!(result.status, CheckStatus::Warning);
    }

    #[test]
    fn test_status_immunity_from_ability_or_lum_berry() {
        let plain = Creature::new("Snorlax").with_types([ElementType::Normal]);
        assert_eq!(
            StatusImmunity.check(std::slice::from_ref(&plain), &balanced()).status,
            CheckStatus::Warning
        );
        let gutsy = plain.clone().with_ability(Ability::Guts);
        assert!(StatusImmunity.check(&[gutsy], &balanced()).status.is_pass());
        let berry = plain.with_item(Item::LumBerry);
        let result = StatusImmunity.check(&[berry], &balanced());
        assert!(result.status.is_pass());
        assert_eq!(result.details.as_deref(), Some("No status immunities found"));
    }

    #[test]
    fn test_magic_bounce_counts_as_hazard_control() {
        let team = [Creature::new("Hatterene").with_ability(Ability::MagicBounce)];
        let result = HazardControl.check(&team, &balanced());
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.details.as_deref(), Some("Has Magic Bounce"));

        let result = HazardControl.check(&[Creature::new("Hatterene")], &balanced());
        assert_eq!(result.status, CheckStatus::Fail);
    }
}
