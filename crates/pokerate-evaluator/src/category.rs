//! Named move, ability and item categories used by the classifier and the checklist.

use pokerate_core::{Ability, Item, MoveName};

/// Moves with increased priority.
pub static PRIORITY_MOVES: &[MoveName] = &[
    MoveName::ExtremeSpeed,
    MoveName::SuckerPunch,
    MoveName::ShadowSneak,
    MoveName::AquaJet,
    MoveName::IceShard,
    MoveName::MachPunch,
    MoveName::BulletPunch,
    MoveName::VacuumWave,
    MoveName::WaterShuriken,
    MoveName::Accelerock,
    MoveName::QuickAttack,
    MoveName::FirstImpression,
    MoveName::JetPunch,
    MoveName::AquaStep,
    MoveName::GrassyGlide,
    MoveName::FakeOut,
    MoveName::Thunderclap,
];

pub static HAZARD_REMOVAL_MOVES: &[MoveName] = &[
    MoveName::RapidSpin,
    MoveName::Defog,
    MoveName::MortalSpin,
    MoveName::TidyUp,
    MoveName::CourtChange,
];

pub static PIVOT_MOVES: &[MoveName] = &[
    MoveName::UTurn,
    MoveName::VoltSwitch,
    MoveName::FlipTurn,
    MoveName::PartingShot,
    MoveName::Teleport,
    MoveName::ChillingReception,
];

/// Reliable recovery, used to find the members of a defensive core.
pub static RECOVERY_MOVES: &[MoveName] = &[
    MoveName::Rest,
    MoveName::Recover,
    MoveName::Roost,
    MoveName::SoftBoiled,
    MoveName::Wish,
    MoveName::SlackOff,
];

/// Recovery and passive-status moves that mark a member as bulky for classification.
pub static BULK_SUPPORT_MOVES: &[MoveName] = &[
    MoveName::Recover,
    MoveName::Roost,
    MoveName::SlackOff,
    MoveName::SoftBoiled,
    MoveName::Wish,
    MoveName::Protect,
    MoveName::Toxic,
    MoveName::WillOWisp,
    MoveName::ThunderWave,
];

pub static SETUP_MOVES: &[MoveName] = &[
    MoveName::SwordsDance,
    MoveName::DragonDance,
    MoveName::NastyPlot,
    MoveName::CalmMind,
    MoveName::Agility,
    MoveName::QuiverDance,
    MoveName::ShiftGear,
];

/// Screens that mark a hyper offense team.
pub static OFFENSIVE_SCREEN_MOVES: &[MoveName] = &[MoveName::LightScreen, MoveName::AuroraVeil];

/// Every screen, as accepted in place of Stealth Rock.
pub static SCREEN_MOVES: &[MoveName] = &[
    MoveName::LightScreen,
    MoveName::Reflect,
    MoveName::AuroraVeil,
];

pub static DEFENSIVE_ABILITIES: &[Ability] = &[
    Ability::Unaware,
    Ability::Regenerator,
    Ability::NaturalCure,
    Ability::PoisonHeal,
    Ability::Pressure,
    Ability::MagicBounce,
];

/// Abilities that cure, ignore or block status conditions.
pub static STATUS_ABSORBING_ABILITIES: &[Ability] = &[
    Ability::NaturalCure,
    Ability::Guts,
    Ability::MagicGuard,
    Ability::PurifyingSalt,
    Ability::GoodAsGold,
];

pub static GROUND_IMMUNE_ABILITIES: &[Ability] = &[Ability::Levitate, Ability::EarthEater];

pub static ELECTRIC_ABSORBING_ABILITIES: &[Ability] = &[Ability::LightningRod, Ability::VoltAbsorb];

/// Items of wallbreakers.
pub static BREAKER_ITEMS: &[Item] = &[
    Item::ChoiceBand,
    Item::ChoiceSpecs,
    Item::LifeOrb,
    Item::AssaultVest,
];

/// Species that take Knock Off well regardless of their item.
pub static KNOCK_OFF_ABSORBERS: &[&str] = &[
    "Kingambit",
    "Tyranitar",
    "Ting-Lu",
    "Zamazenta",
    "Dondozo",
    "Clefable",
    "Great Tusk",
];

#[must_use]
pub fn is_knock_off_absorber(species: &str) -> bool {
    KNOCK_OFF_ABSORBERS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(species.trim()))
}
