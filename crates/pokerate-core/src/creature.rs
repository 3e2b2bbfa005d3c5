use arrayvec::ArrayVec;

use crate::{Ability, BaseStats, ElementType, EvSpread, Item, MoveName, Nature};

/// Maximum number of moves a creature carries.
pub const MAX_MOVES: usize = 4;

/// Maximum number of elemental types a creature has.
pub const MAX_TYPES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'M' => Some(Self::Male),
            'F' => Some(Self::Female),
            _ => None,
        }
    }
}

/// A move slot: canonical name plus the elemental type once it has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub name: MoveName,
    pub ty: Option<ElementType>,
}

impl Move {
    #[must_use]
    pub fn new(name: MoveName) -> Self {
        Self { name, ty: None }
    }
}

/// One member of a roster.
///
/// Fields populated by the export parser describe the set as written. `types` and
/// `base_stats` come from species data and stay empty / zero until populated; the
/// rating engine treats those as "no information" rather than waiting for them.
///
/// The engine reads creatures and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub species: String,
    pub nickname: Option<String>,
    pub gender: Option<Gender>,
    pub item: Option<Item>,
    pub ability: Option<Ability>,
    pub tera_type: Option<ElementType>,
    pub evs: EvSpread,
    /// IV text as written; ratings assume 31 in every stat.
    pub ivs: String,
    /// Parsed level; `None` when absent or unparseable.
    pub level: Option<u16>,
    pub nature: Option<Nature>,
    pub moves: ArrayVec<Move, MAX_MOVES>,
    pub types: ArrayVec<ElementType, MAX_TYPES>,
    pub base_stats: BaseStats,
    /// Set when species data could not be obtained for this creature.
    pub data_fetch_error: Option<String>,
}

impl Creature {
    #[must_use]
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            nickname: None,
            gender: None,
            item: None,
            ability: None,
            tera_type: None,
            evs: EvSpread::default(),
            ivs: String::new(),
            level: None,
            nature: None,
            moves: ArrayVec::new(),
            types: ArrayVec::new(),
            base_stats: BaseStats::default(),
            data_fetch_error: None,
        }
    }

    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    #[must_use]
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.nature = Some(nature);
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u16) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_evs(mut self, spread: &str) -> Self {
        self.evs = EvSpread::parse_spread(spread);
        self
    }

    #[must_use]
    pub fn with_base_stats(mut self, base_stats: BaseStats) -> Self {
        self.base_stats = base_stats;
        self
    }

    /// Replaces the type list; entries past [`MAX_TYPES`] are ignored.
    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = ElementType>) -> Self {
        self.types = types.into_iter().take(MAX_TYPES).collect();
        self
    }

    /// Replaces the move list; entries past [`MAX_MOVES`] are ignored.
    #[must_use]
    pub fn with_moves(mut self, moves: impl IntoIterator<Item = MoveName>) -> Self {
        self.moves = moves.into_iter().take(MAX_MOVES).map(Move::new).collect();
        self
    }

    /// Name shown in reports: the nickname when present, else the species.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.species)
    }

    #[must_use]
    pub fn has_type(&self, ty: ElementType) -> bool {
        self.types.contains(&ty)
    }

    #[must_use]
    pub fn is_untyped(&self) -> bool {
        self.types.is_empty()
    }

    #[must_use]
    pub fn has_move(&self, name: &MoveName) -> bool {
        self.moves.iter().any(|m| m.name == *name)
    }

    #[must_use]
    pub fn has_any_move(&self, names: &[MoveName]) -> bool {
        self.moves.iter().any(|m| names.contains(&m.name))
    }

    /// Moves of this creature that belong to `names`, in slot order.
    pub fn moves_in<'a>(&'a self, names: &'a [MoveName]) -> impl Iterator<Item = &'a Move> + 'a {
        self.moves.iter().filter(move |m| names.contains(&m.name))
    }

    #[must_use]
    pub fn ability_is(&self, ability: &Ability) -> bool {
        self.ability.as_ref() == Some(ability)
    }

    #[must_use]
    pub fn ability_in(&self, abilities: &[Ability]) -> bool {
        self.ability.as_ref().is_some_and(|a| abilities.contains(a))
    }

    #[must_use]
    pub fn holds(&self, item: &Item) -> bool {
        self.item.as_ref() == Some(item)
    }

    #[must_use]
    pub fn holds_any(&self, items: &[Item]) -> bool {
        self.item.as_ref().is_some_and(|i| items.contains(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_respect_capacity() {
        let creature = Creature::new("Ditto")
            .with_types([ElementType::Normal, ElementType::Fire, ElementType::Water])
            .with_moves([
                MoveName::Protect,
                MoveName::Toxic,
                MoveName::Rest,
                MoveName::Wish,
                MoveName::Roost,
            ]);
        assert_eq!(creature.types.len(), MAX_TYPES);
        assert_eq!(creature.moves.len(), MAX_MOVES);
        assert!(!creature.has_move(&MoveName::Roost));
    }

    #[test]
    fn test_predicates() {
        let creature = Creature::new("Corviknight")
            .with_ability(Ability::Pressure)
            .with_item(Item::Other("Leftovers".to_owned()))
            .with_types([ElementType::Flying, ElementType::Steel])
            .with_moves([MoveName::Roost, MoveName::UTurn]);
        assert!(creature.has_type(ElementType::Steel));
        assert!(creature.ability_in(&[Ability::Unaware, Ability::Pressure]));
        assert!(!creature.holds(&Item::HeavyDutyBoots));
        assert!(creature.has_any_move(&[MoveName::VoltSwitch, MoveName::UTurn]));
        let pivots: Vec<_> = creature.moves_in(&[MoveName::UTurn]).collect();
        assert_eq!(pivots.len(), 1);
    }

    #[test]
    fn test_display_name_prefers_nickname() {
        let mut creature = Creature::new("Garchomp");
        assert_eq!(creature.display_name(), "Garchomp");
        creature.nickname = Some("Chompy".to_owned());
        assert_eq!(creature.display_name(), "Chompy");
    }
}
