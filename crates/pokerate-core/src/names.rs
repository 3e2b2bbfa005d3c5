//! Canonical names for abilities, held items and moves.
//!
//! Export text names these freely, but the rating heuristics only ever reason about a
//! fixed vocabulary. Each enumeration lists that vocabulary and keeps anything else in
//! an `Other` variant, so unrecognised text survives a round trip without being
//! mistaken for a known name.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! canonical_names {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $text:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )*
            /// Text outside the known vocabulary, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Every known name, as written in export text.
            pub const NAMES: &'static [&'static str] = &[$( $text, )*];

            /// Display name as written in export text.
            #[must_use]
            pub fn name(&self) -> &str {
                match self {
                    $( Self::$variant => $text, )*
                    Self::Other(text) => text,
                }
            }

            #[must_use]
            pub fn is_other(&self) -> bool {
                matches!(self, Self::Other(_))
            }

            fn from_exact(text: &str) -> Option<Self> {
                $(
                    if text.eq_ignore_ascii_case($text) {
                        return Some(Self::$variant);
                    }
                )*
                None
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from_text(&s))
            }
        }
    };
}

canonical_names! {
    /// An ability the rating heuristics know about.
    pub enum Ability {
        Drought => "Drought",
        // defensive
        Unaware => "Unaware",
        Regenerator => "Regenerator",
        NaturalCure => "Natural Cure",
        PoisonHeal => "Poison Heal",
        Pressure => "Pressure",
        MagicBounce => "Magic Bounce",
        // immunities
        FlashFire => "Flash Fire",
        WaterAbsorb => "Water Absorb",
        DrySkin => "Dry Skin",
        StormDrain => "Storm Drain",
        SapSipper => "Sap Sipper",
        Levitate => "Levitate",
        EarthEater => "Earth Eater",
        VoltAbsorb => "Volt Absorb",
        LightningRod => "Lightning Rod",
        MotorDrive => "Motor Drive",
        GoodAsGold => "Good as Gold",
        ThickFat => "Thick Fat",
        WonderGuard => "Wonder Guard",
        // status
        Guts => "Guts",
        MagicGuard => "Magic Guard",
        PurifyingSalt => "Purifying Salt",
        StickyHold => "Sticky Hold",
    }
}

canonical_names! {
    /// A held item the rating heuristics know about.
    pub enum Item {
        ChoiceBand => "Choice Band",
        ChoiceSpecs => "Choice Specs",
        LifeOrb => "Life Orb",
        AssaultVest => "Assault Vest",
        HeavyDutyBoots => "Heavy-Duty Boots",
        AirBalloon => "Air Balloon",
        LumBerry => "Lum Berry",
        BoosterEnergy => "Booster Energy",
    }
}

canonical_names! {
    /// A move the rating heuristics know about.
    pub enum MoveName {
        // priority
        ExtremeSpeed => "Extreme Speed",
        SuckerPunch => "Sucker Punch",
        ShadowSneak => "Shadow Sneak",
        AquaJet => "Aqua Jet",
        IceShard => "Ice Shard",
        MachPunch => "Mach Punch",
        BulletPunch => "Bullet Punch",
        VacuumWave => "Vacuum Wave",
        WaterShuriken => "Water Shuriken",
        Accelerock => "Accelerock",
        QuickAttack => "Quick Attack",
        FirstImpression => "First Impression",
        JetPunch => "Jet Punch",
        AquaStep => "Aqua Step",
        GrassyGlide => "Grassy Glide",
        FakeOut => "Fake Out",
        Thunderclap => "Thunderclap",
        // hazards and their removal
        StealthRock => "Stealth Rock",
        Spikes => "Spikes",
        ToxicSpikes => "Toxic Spikes",
        StickyWeb => "Sticky Web",
        RapidSpin => "Rapid Spin",
        Defog => "Defog",
        MortalSpin => "Mortal Spin",
        TidyUp => "Tidy Up",
        CourtChange => "Court Change",
        // pivoting
        UTurn => "U-turn",
        VoltSwitch => "Volt Switch",
        FlipTurn => "Flip Turn",
        PartingShot => "Parting Shot",
        Teleport => "Teleport",
        ChillingReception => "Chilling Reception",
        // recovery and status
        Rest => "Rest",
        Recover => "Recover",
        Roost => "Roost",
        SoftBoiled => "Soft-Boiled",
        Wish => "Wish",
        SlackOff => "Slack Off",
        Protect => "Protect",
        Toxic => "Toxic",
        WillOWisp => "Will-O-Wisp",
        ThunderWave => "Thunder Wave",
        // setup
        SwordsDance => "Swords Dance",
        DragonDance => "Dragon Dance",
        NastyPlot => "Nasty Plot",
        CalmMind => "Calm Mind",
        Agility => "Agility",
        QuiverDance => "Quiver Dance",
        ShiftGear => "Shift Gear",
        // screens
        LightScreen => "Light Screen",
        Reflect => "Reflect",
        AuroraVeil => "Aurora Veil",
        // utility
        KnockOff => "Knock Off",
    }
}

impl Ability {
    /// Canonicalizes ability text by exact, case-insensitive name.
    ///
    /// ```
    /// use pokerate_core::Ability;
    ///
    /// assert_eq!(Ability::from_text("regenerator"), Ability::Regenerator);
    /// assert_eq!(
    ///     Ability::from_text("Intimidate"),
    ///     Ability::Other("Intimidate".to_owned())
    /// );
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        Self::from_exact(text).unwrap_or_else(|| Self::Other(text.to_owned()))
    }
}

impl Item {
    /// Canonicalizes held-item text.
    ///
    /// Exact names match first; otherwise the longest known item name contained in the
    /// text wins, mirroring how item text is matched by containment.
    ///
    /// ```
    /// use pokerate_core::Item;
    ///
    /// assert_eq!(Item::from_text("heavy-duty boots"), Item::HeavyDutyBoots);
    /// assert_eq!(Item::from_text("Choice Band (spare)"), Item::ChoiceBand);
    /// assert!(Item::from_text("Leftovers").is_other());
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        Self::from_exact(text)
            .or_else(|| Self::from_contained(text))
            .unwrap_or_else(|| Self::Other(text.to_owned()))
    }

    /// Longest known item name contained in `text`, ignoring ASCII case.
    fn from_contained(text: &str) -> Option<Self> {
        let lower = text.to_ascii_lowercase();
        Self::NAMES
            .iter()
            .filter(|name| lower.contains(&name.to_ascii_lowercase()))
            .max_by_key(|name| name.len())
            .and_then(|name| Self::from_exact(name))
    }
}

impl MoveName {
    /// Canonicalizes move text by exact, case-insensitive name.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        Self::from_exact(text).unwrap_or_else(|| Self::Other(text.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_match_is_exact() {
        assert_eq!(MoveName::from_text("u-TURN"), MoveName::UTurn);
        assert_eq!(MoveName::from_text("Toxic Spikes"), MoveName::ToxicSpikes);
        // "Rest" must not be found inside unrelated move names
        assert!(MoveName::from_text("Forest's Curse").is_other());
    }

    #[test]
    fn test_item_prefers_longest_contained_name() {
        assert_eq!(Item::from_text("My Air Balloon"), Item::AirBalloon);
        assert_eq!(Item::from_text("  Life Orb  "), Item::LifeOrb);
        assert_eq!(Item::from_text("life orb or choice band"), Item::ChoiceBand);
    }

    #[test]
    fn test_names_follow_declaration_order() {
        assert_eq!(Item::NAMES.len(), 8);
        assert_eq!(Item::NAMES[0], "Choice Band");
        assert!(MoveName::NAMES.contains(&"U-turn"));
    }

    #[test]
    fn test_other_keeps_text() {
        let ability = Ability::from_text(" Protosynthesis ");
        assert_eq!(ability.name(), "Protosynthesis");
        assert!(ability.is_other());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&MoveName::WillOWisp).unwrap();
        assert_eq!(json, "\"Will-O-Wisp\"");
        let item: Item = serde_json::from_str("\"Assault Vest\"").unwrap();
        assert_eq!(item, Item::AssaultVest);
    }
}
