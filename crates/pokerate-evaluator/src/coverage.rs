//! Elemental type coverage of a roster.
//!
//! For every attacking type the roster is scanned member by member with
//! [`standard_effectiveness`]:
//!
//! - the type is *neutral coverage* when no member takes less than neutral damage from it
//!   (an empty roster covers every type);
//! - the type is a *shared weakness* when two or more members take super effective damage.
//!
//! Shared weaknesses are reported worst first. Ability and item immunities are listed as
//! free-text notes.

use pokerate_core::{Creature, ElementType};
use serde::Serialize;

use crate::effectiveness::{
    ABILITY_IMMUNITIES, ITEM_IMMUNITIES, ImmunityTarget, standard_effectiveness,
};

/// Minimum number of weak members for a type to be reported as a shared weakness.
pub const SHARED_WEAKNESS_MIN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuperEffectiveCoverage {
    pub attack_type: ElementType,
    pub count: usize,
    /// Species of the members hit super effectively, in roster order.
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeAnalysis {
    pub neutral_coverage: Vec<ElementType>,
    pub super_effective: Vec<SuperEffectiveCoverage>,
    pub immunity_notes: Vec<String>,
}

/// Analyzes the roster's type matchups.
///
/// # Example
///
/// ```
/// use pokerate_core::{Creature, ElementType};
/// use pokerate_evaluator::coverage::analyze_coverage;
///
/// let ice_weak = Creature::new("Garchomp").with_types([ElementType::Dragon, ElementType::Ground]);
/// let analysis = analyze_coverage(&[ice_weak.clone(), ice_weak]);
/// assert_eq!(analysis.super_effective[0].attack_type, ElementType::Ice);
/// assert_eq!(analysis.super_effective[0].count, 2);
/// ```
#[must_use]
pub fn analyze_coverage(team: &[Creature]) -> TypeAnalysis {
    let mut analysis = TypeAnalysis::default();

    for attack in ElementType::ALL {
        let multipliers: Vec<f32> = team
            .iter()
            .map(|c| standard_effectiveness(attack, c))
            .collect();

        if multipliers.iter().all(|m| *m >= 1.0) {
            analysis.neutral_coverage.push(attack);
        }

        let members: Vec<String> = team
            .iter()
            .zip(&multipliers)
            .filter(|(_, m)| **m > 1.0)
            .map(|(c, _)| c.species.clone())
            .collect();
        if members.len() >= SHARED_WEAKNESS_MIN {
            analysis.super_effective.push(SuperEffectiveCoverage {
                attack_type: attack,
                count: members.len(),
                members,
            });
        }
    }

    // stable: ties keep chart order
    analysis
        .super_effective
        .sort_by(|a, b| b.count.cmp(&a.count));

    for creature in team {
        if let Some(ability) = &creature.ability
            && let Some(targets) = ABILITY_IMMUNITIES.get(ability)
            && !targets.is_empty()
        {
            analysis.immunity_notes.push(format!(
                "{} with {ability} is immune to {} type moves",
                creature.species,
                join_targets(targets)
            ));
        }
        if let Some(item) = &creature.item
            && let Some(targets) = ITEM_IMMUNITIES.get(item)
            && !targets.is_empty()
        {
            analysis.immunity_notes.push(format!(
                "{} holding {item} is immune to {} type moves",
                creature.species,
                join_targets(targets)
            ));
        }
    }

    analysis
}

fn join_targets(targets: &[ImmunityTarget]) -> String {
    targets
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pokerate_core::{Ability, Item};

    use super::*;

    #[test]
    fn test_empty_roster_covers_everything() {
        let analysis = analyze_coverage(&[]);
        assert_eq!(analysis.neutral_coverage, ElementType::ALL.to_vec());
        assert!(analysis.super_effective.is_empty());
        assert!(analysis.immunity_notes.is_empty());
    }

    #[test]
    fn test_shared_weaknesses_sorted_by_count() {
        let team = [
            Creature::new("Garchomp").with_types([ElementType::Dragon, ElementType::Ground]),
            Creature::new("Dragonite").with_types([ElementType::Dragon, ElementType::Flying]),
            Creature::new("Mamoswine").with_types([ElementType::Ice, ElementType::Ground]),
            Creature::new("Landorus").with_types([ElementType::Ground, ElementType::Flying]),
        ];
        let analysis = analyze_coverage(&team);
        let first = &analysis.super_effective[0];
        // Ice hits Garchomp, Dragonite and Landorus
        assert_eq!(first.attack_type, ElementType::Ice);
        assert_eq!(first.count, 3);
        assert_eq!(first.members, ["Garchomp", "Dragonite", "Landorus"]);
        assert!(
            analysis
                .super_effective
                .windows(2)
                .all(|w| w[0].count >= w[1].count)
        );
    }

    #[test]
    fn test_resisted_type_is_not_neutral_coverage() {
        let team = [Creature::new("Ferrothorn").with_types([ElementType::Grass, ElementType::Steel])];
        let analysis = analyze_coverage(&team);
        assert!(!analysis.neutral_coverage.contains(&ElementType::Water));
        assert!(analysis.neutral_coverage.contains(&ElementType::Fire));
    }

    #[test]
    fn test_immunity_notes() {
        let team = [
            Creature::new("Heatran")
                .with_types([ElementType::Fire, ElementType::Steel])
                .with_ability(Ability::FlashFire)
                .with_item(Item::AirBalloon),
            Creature::new("Gholdengo").with_ability(Ability::GoodAsGold),
            Creature::new("Mamoswine").with_ability(Ability::ThickFat),
        ];
        let analysis = analyze_coverage(&team);
        assert_eq!(
            analysis.immunity_notes,
            [
                "Heatran with Flash Fire is immune to fire type moves",
                "Heatran holding Air Balloon is immune to ground type moves",
                "Gholdengo with Good as Gold is immune to status type moves",
            ]
        );
    }
}
