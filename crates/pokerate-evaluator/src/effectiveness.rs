//! Type effectiveness with ability and item immunity overrides.
//!
//! # Algorithm
//!
//! For an attack of type `T` against a creature:
//!
//! 1. If the creature's ability grants immunity to `T`, the multiplier is `0.0`
//! 2. Else if its held item grants immunity to `T`, the multiplier is `0.0`
//! 3. Else if the creature has no recorded types, the multiplier is `0.0`
//! 4. Else the multiplier is the product of `chart[T][t]` over its types
//!
//! The ability lookup strictly precedes the item lookup. Step 3 is the "no information"
//! sentinel: species data that has not been populated yet reads as an immunity, which
//! keeps coverage reports from flagging weaknesses that cannot be confirmed.
//!
//! # Example
//!
//! ```
//! use pokerate_core::{Ability, Creature, ElementType};
//! use pokerate_evaluator::effectiveness::standard_effectiveness;
//!
//! let gyarados = Creature::new("Gyarados").with_types([ElementType::Water, ElementType::Flying]);
//! assert_eq!(standard_effectiveness(ElementType::Electric, &gyarados), 4.0);
//! assert_eq!(standard_effectiveness(ElementType::Ground, &gyarados), 0.0);
//!
//! let rotom = Creature::new("Rotom-Wash")
//!     .with_types([ElementType::Electric, ElementType::Water])
//!     .with_ability(Ability::Levitate);
//! assert_eq!(standard_effectiveness(ElementType::Ground, &rotom), 0.0);
//! ```

use std::fmt;

use pokerate_core::{Ability, Creature, ElementType, Item};
use serde::Serialize;

/// Dense attack-by-defense multiplier table.
#[derive(Debug, Clone)]
pub struct TypeChart {
    multipliers: [[f32; ElementType::LEN]; ElementType::LEN],
}

impl TypeChart {
    /// Builds a chart from sparse `(attack, defense, multiplier)` entries; unlisted pairs are neutral.
    #[must_use]
    pub const fn from_entries(entries: &[(ElementType, ElementType, f32)]) -> Self {
        let mut multipliers = [[1.0; ElementType::LEN]; ElementType::LEN];
        let mut i = 0;
        while i < entries.len() {
            let (attack, defense, multiplier) = entries[i];
            multipliers[attack.index()][defense.index()] = multiplier;
            i += 1;
        }
        Self { multipliers }
    }

    #[must_use]
    pub const fn multiplier(&self, attack: ElementType, defense: ElementType) -> f32 {
        self.multipliers[attack.index()][defense.index()]
    }
}

pub static TYPE_CHART: TypeChart = {
    use ElementType::{
        Bug, Dark, Dragon, Electric, Fairy, Fighting, Fire, Flying, Ghost, Grass, Ground, Ice,
        Normal, Poison, Psychic, Rock, Steel, Water,
    };
    TypeChart::from_entries(&[
        (Normal, Rock, 0.5),
        (Normal, Ghost, 0.0),
        (Normal, Steel, 0.5),
        (Fire, Fire, 0.5),
        (Fire, Water, 0.5),
        (Fire, Grass, 2.0),
        (Fire, Ice, 2.0),
        (Fire, Bug, 2.0),
        (Fire, Rock, 0.5),
        (Fire, Dragon, 0.5),
        (Fire, Steel, 2.0),
        (Water, Fire, 2.0),
        (Water, Water, 0.5),
        (Water, Grass, 0.5),
        (Water, Ground, 2.0),
        (Water, Rock, 2.0),
        (Water, Dragon, 0.5),
        (Electric, Water, 2.0),
        (Electric, Electric, 0.5),
        (Electric, Grass, 0.5),
        (Electric, Ground, 0.0),
        (Electric, Flying, 2.0),
        (Electric, Dragon, 0.5),
        (Grass, Fire, 0.5),
        (Grass, Water, 2.0),
        (Grass, Grass, 0.5),
        (Grass, Poison, 0.5),
        (Grass, Ground, 2.0),
        (Grass, Flying, 0.5),
        (Grass, Bug, 0.5),
        (Grass, Rock, 2.0),
        (Grass, Dragon, 0.5),
        (Grass, Steel, 0.5),
        (Ice, Fire, 0.5),
        (Ice, Water, 0.5),
        (Ice, Grass, 2.0),
        (Ice, Ice, 0.5),
        (Ice, Ground, 2.0),
        (Ice, Flying, 2.0),
        (Ice, Dragon, 2.0),
        (Ice, Steel, 0.5),
        (Fighting, Normal, 2.0),
        (Fighting, Ice, 2.0),
        (Fighting, Poison, 0.5),
        (Fighting, Flying, 0.5),
        (Fighting, Psychic, 0.5),
        (Fighting, Bug, 0.5),
        (Fighting, Rock, 2.0),
        (Fighting, Ghost, 0.0),
        (Fighting, Dark, 2.0),
        (Fighting, Steel, 2.0),
        (Fighting, Fairy, 0.5),
        (Poison, Grass, 2.0),
        (Poison, Poison, 0.5),
        (Poison, Ground, 0.5),
        (Poison, Rock, 0.5),
        (Poison, Ghost, 0.5),
        (Poison, Steel, 0.0),
        (Poison, Fairy, 2.0),
        (Ground, Fire, 2.0),
        (Ground, Electric, 2.0),
        (Ground, Grass, 0.5),
        (Ground, Poison, 2.0),
        (Ground, Flying, 0.0),
        (Ground, Bug, 0.5),
        (Ground, Rock, 2.0),
        (Ground, Steel, 2.0),
        (Flying, Electric, 0.5),
        (Flying, Grass, 2.0),
        (Flying, Fighting, 2.0),
        (Flying, Bug, 2.0),
        (Flying, Rock, 0.5),
        (Flying, Steel, 0.5),
        (Psychic, Fighting, 2.0),
        (Psychic, Poison, 2.0),
        (Psychic, Psychic, 0.5),
        (Psychic, Dark, 0.0),
        (Psychic, Steel, 0.5),
        (Bug, Fire, 0.5),
        (Bug, Grass, 2.0),
        (Bug, Fighting, 0.5),
        (Bug, Poison, 0.5),
        (Bug, Flying, 0.5),
        (Bug, Psychic, 2.0),
        (Bug, Ghost, 0.5),
        (Bug, Dark, 2.0),
        (Bug, Steel, 0.5),
        (Bug, Fairy, 0.5),
        (Rock, Fire, 2.0),
        (Rock, Ice, 2.0),
        (Rock, Fighting, 0.5),
        (Rock, Ground, 0.5),
        (Rock, Flying, 2.0),
        (Rock, Bug, 2.0),
        (Rock, Steel, 0.5),
        (Ghost, Normal, 0.0),
        (Ghost, Psychic, 2.0),
        (Ghost, Ghost, 2.0),
        (Ghost, Dark, 0.5),
        (Dragon, Dragon, 2.0),
        (Dragon, Steel, 0.5),
        (Dragon, Fairy, 0.0),
        (Dark, Fighting, 0.5),
        (Dark, Psychic, 2.0),
        (Dark, Ghost, 2.0),
        (Dark, Dark, 0.5),
        (Dark, Fairy, 0.5),
        (Steel, Fire, 0.5),
        (Steel, Water, 0.5),
        (Steel, Electric, 0.5),
        (Steel, Ice, 2.0),
        (Steel, Rock, 2.0),
        (Steel, Steel, 0.5),
        (Steel, Fairy, 2.0),
        (Fairy, Fire, 0.5),
        (Fairy, Fighting, 2.0),
        (Fairy, Poison, 0.5),
        (Fairy, Dragon, 2.0),
        (Fairy, Dark, 2.0),
        (Fairy, Steel, 0.5),
    ])
};

/// What an ability or item makes its holder immune to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImmunityTarget {
    Type(ElementType),
    /// Status moves (not an elemental type; never affects multipliers).
    Status,
}

impl fmt::Display for ImmunityTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => f.write_str(ty.as_str()),
            Self::Status => f.write_str("status"),
        }
    }
}

/// Immunities keyed by ability or held item.
#[derive(Debug)]
pub struct ImmunityTable<K: 'static> {
    entries: &'static [(K, &'static [ImmunityTarget])],
}

impl<K> ImmunityTable<K>
where
    K: PartialEq + 'static,
{
    #[must_use]
    pub const fn new(entries: &'static [(K, &'static [ImmunityTarget])]) -> Self {
        Self { entries }
    }

    /// Immunities granted by `key`, or `None` when `key` is not in the table.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&'static [ImmunityTarget]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, targets)| *targets)
    }

    #[must_use]
    pub fn grants_type_immunity(&self, key: &K, attack: ElementType) -> bool {
        self.get(key)
            .is_some_and(|targets| targets.contains(&ImmunityTarget::Type(attack)))
    }
}

pub static ABILITY_IMMUNITIES: ImmunityTable<Ability> = {
    use ImmunityTarget::{Status, Type};
    ImmunityTable::<Ability>::new(&[
        (Ability::FlashFire, &[Type(ElementType::Fire)]),
        (Ability::WaterAbsorb, &[Type(ElementType::Water)]),
        (Ability::DrySkin, &[Type(ElementType::Water)]),
        (Ability::StormDrain, &[Type(ElementType::Water)]),
        (Ability::SapSipper, &[Type(ElementType::Grass)]),
        (Ability::Levitate, &[Type(ElementType::Ground)]),
        (Ability::VoltAbsorb, &[Type(ElementType::Electric)]),
        (Ability::LightningRod, &[Type(ElementType::Electric)]),
        (Ability::MotorDrive, &[Type(ElementType::Electric)]),
        (Ability::GoodAsGold, &[Status]),
        (Ability::ThickFat, &[]),
        (Ability::WonderGuard, &[]),
    ])
};

pub static ITEM_IMMUNITIES: ImmunityTable<Item> =
    ImmunityTable::<Item>::new(&[(Item::AirBalloon, &[ImmunityTarget::Type(ElementType::Ground)])]);

/// Damage multiplier of an `attack`-typed move against `creature`.
///
/// Returns one of `0.0`, `0.25`, `0.5`, `1.0`, `2.0`, `4.0`. See the module docs for the
/// order in which immunities and the chart are consulted.
#[must_use]
pub fn effectiveness(
    attack: ElementType,
    creature: &Creature,
    ability_immunities: &ImmunityTable<Ability>,
    item_immunities: &ImmunityTable<Item>,
) -> f32 {
    if let Some(ability) = &creature.ability
        && ability_immunities.grants_type_immunity(ability, attack)
    {
        return 0.0;
    }
    if let Some(item) = &creature.item
        && item_immunities.grants_type_immunity(item, attack)
    {
        return 0.0;
    }
    if creature.is_untyped() {
        return 0.0;
    }
    creature
        .types
        .iter()
        .map(|defense| TYPE_CHART.multiplier(attack, *defense))
        .product()
}

/// [`effectiveness`] with the built-in ability and item immunity tables.
#[must_use]
pub fn standard_effectiveness(attack: ElementType, creature: &Creature) -> f32 {
    effectiveness(attack, creature, &ABILITY_IMMUNITIES, &ITEM_IMMUNITIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(types: &[ElementType]) -> Creature {
        Creature::new("Test").with_types(types.iter().copied())
    }

    #[test]
    fn test_dual_type_is_product_of_single_types() {
        for attack in ElementType::ALL {
            for t1 in ElementType::ALL {
                for t2 in ElementType::ALL {
                    let dual = standard_effectiveness(attack, &typed(&[t1, t2]));
                    let product = standard_effectiveness(attack, &typed(&[t1]))
                        * standard_effectiveness(attack, &typed(&[t2]));
                    assert_eq!(dual, product, "{attack} vs {t1}/{t2}");
                }
            }
        }
    }

    #[test]
    fn test_multipliers_are_in_expected_set() {
        const ALLOWED: [f32; 6] = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];
        for attack in ElementType::ALL {
            for t1 in ElementType::ALL {
                for t2 in ElementType::ALL {
                    let value = standard_effectiveness(attack, &typed(&[t1, t2]));
                    assert!(ALLOWED.contains(&value), "{attack} vs {t1}/{t2} = {value}");
                }
            }
        }
    }

    #[test]
    fn test_ability_immunity_overrides_weakness() {
        // Ground is 4x against Electric/Steel without Levitate
        let magnezone = typed(&[ElementType::Electric, ElementType::Steel]);
        assert_eq!(standard_effectiveness(ElementType::Ground, &magnezone), 4.0);
        let levitating = magnezone.with_ability(Ability::Levitate);
        assert_eq!(standard_effectiveness(ElementType::Ground, &levitating), 0.0);
    }

    #[test]
    fn test_ability_and_item_immunities_cover_only_their_types() {
        static ABILITIES: ImmunityTable<Ability> = ImmunityTable::<Ability>::new(&[(
            Ability::FlashFire,
            &[ImmunityTarget::Type(ElementType::Fire)],
        )]);
        static NO_ABILITIES: ImmunityTable<Ability> = ImmunityTable::<Ability>::new(&[]);
        static NO_ITEMS: ImmunityTable<Item> = ImmunityTable::<Item>::new(&[]);
        let creature = typed(&[ElementType::Grass])
            .with_ability(Ability::FlashFire)
            .with_item(Item::AirBalloon);

        // Fire is 2x on Grass; the ability alone decides it, whatever the item table says
        assert_eq!(
            effectiveness(ElementType::Fire, &creature, &NO_ABILITIES, &NO_ITEMS),
            2.0
        );
        assert_eq!(
            effectiveness(ElementType::Fire, &creature, &ABILITIES, &NO_ITEMS),
            0.0
        );
        assert_eq!(
            effectiveness(ElementType::Fire, &creature, &ABILITIES, &ITEM_IMMUNITIES),
            0.0
        );

        // Ground is resisted by Grass; the ability does not reach it, the balloon does
        assert_eq!(
            effectiveness(ElementType::Ground, &creature, &ABILITIES, &NO_ITEMS),
            0.5
        );
        assert_eq!(
            effectiveness(ElementType::Ground, &creature, &ABILITIES, &ITEM_IMMUNITIES),
            0.0
        );
    }

    #[test]
    fn test_status_immunity_does_not_affect_types() {
        let gholdengo = typed(&[ElementType::Steel, ElementType::Ghost])
            .with_ability(Ability::GoodAsGold);
        assert_eq!(standard_effectiveness(ElementType::Fire, &gholdengo), 2.0);
    }

    #[test]
    fn test_untyped_creature_is_treated_as_immune() {
        let unknown = Creature::new("Unknown");
        for attack in ElementType::ALL {
            assert_eq!(standard_effectiveness(attack, &unknown), 0.0);
        }
    }

    #[test]
    fn test_empty_immunity_lists() {
        let creature = typed(&[ElementType::Ice]).with_ability(Ability::ThickFat);
        assert_eq!(ABILITY_IMMUNITIES.get(&Ability::ThickFat), Some(&[][..]));
        assert_eq!(standard_effectiveness(ElementType::Fire, &creature), 2.0);
    }
}
