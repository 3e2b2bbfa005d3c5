//! Species data: elemental types and base stats per species, plus move types.
//!
//! The data is a JSON document:
//!
//! ```json
//! {
//!   "species": {
//!     "Garchomp": {
//!       "types": ["dragon", "ground"],
//!       "base_stats": { "hp": 108, "atk": 130, "def": 95, "spa": 80, "spd": 85, "spe": 102 }
//!     }
//!   },
//!   "moves": { "Earthquake": "ground" }
//! }
//! ```
//!
//! Lookups ignore ASCII case. Species missing from the data are flagged on the creature
//! through [`Creature::data_fetch_error`] and otherwise left untouched, which the rating
//! engine reads as "no information".

use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{BaseStats, Creature, ElementType, MAX_TYPES};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DexError {
    #[display("failed to read species data")]
    Io(io::Error),
    #[display("malformed species data")]
    Json(serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesData {
    #[serde(default)]
    pub types: Vec<ElementType>,
    #[serde(default)]
    pub base_stats: BaseStats,
}

#[derive(Debug, Default, Deserialize)]
struct DexDocument {
    #[serde(default)]
    species: HashMap<String, SpeciesData>,
    #[serde(default)]
    moves: HashMap<String, ElementType>,
}

#[derive(Debug, Clone, Default)]
pub struct Dex {
    species: HashMap<String, SpeciesData>,
    moves: HashMap<String, ElementType>,
}

fn key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

impl Dex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, DexError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R>(reader: R) -> Result<Self, DexError>
    where
        R: Read,
    {
        let document: DexDocument = serde_json::from_reader(reader)?;
        let mut dex = Self::new();
        for (name, data) in document.species {
            dex.insert_species(&name, data);
        }
        for (name, ty) in document.moves {
            dex.insert_move(&name, ty);
        }
        debug!(
            species = dex.species.len(),
            moves = dex.moves.len(),
            "loaded species data"
        );
        Ok(dex)
    }

    pub fn insert_species(&mut self, name: &str, data: SpeciesData) {
        self.species.insert(key(name), data);
    }

    pub fn insert_move(&mut self, name: &str, ty: ElementType) {
        self.moves.insert(key(name), ty);
    }

    #[must_use]
    pub fn species(&self, name: &str) -> Option<&SpeciesData> {
        self.species.get(&key(name))
    }

    #[must_use]
    pub fn move_type(&self, name: &str) -> Option<ElementType> {
        self.moves.get(&key(name)).copied()
    }

    /// Fills types, base stats and move types for every creature of `team`.
    pub fn populate(&self, team: &mut [Creature]) {
        for creature in team {
            self.populate_creature(creature);
        }
    }

    pub fn populate_creature(&self, creature: &mut Creature) {
        if let Some(data) = self.species(&creature.species) {
            creature.types = data.types.iter().copied().take(MAX_TYPES).collect();
            creature.base_stats = data.base_stats;
            creature.data_fetch_error = None;
        } else {
            warn!(species = %creature.species, "no species data");
            creature.data_fetch_error = Some(format!("No data found for {}", creature.species));
        }

        for mv in &mut creature.moves {
            if mv.ty.is_none() {
                mv.ty = self.move_type(mv.name.name());
            }
        }
    }
}
