use crate::core::error::{BattleError, Result};
use crate::data::type_chart::ElementType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub spa: i32,
    pub spd: i32,
    pub spe: i32,
}

impl BaseStats {
    pub fn total(&self) -> i32 {
        self.hp + self.atk + self.def + self.spa + self.spd + self.spe
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    #[serde(rename = "speciesId")]
    pub species_id: u32,
    pub level: u32,
    pub name: String,
}

fn default_base_xp() -> u32 {
    64
}

fn default_capture_rate() -> u32 {
    45
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpeciesData {
    pub id: u32,
    pub name: String,
    #[serde(default, alias = "type")]
    pub types: Vec<ElementType>,
    #[serde(rename = "baseStats")]
    pub base_stats: BaseStats,
    #[serde(rename = "baseXp", default = "default_base_xp")]
    pub base_xp: u32,
    #[serde(rename = "captureRate", default = "default_capture_rate")]
    pub capture_rate: u32,
    #[serde(default)]
    pub evolution: Option<Evolution>,
}

#[derive(Clone, Debug, Default)]
pub struct SpeciesDatabase {
    species: HashMap<u32, SpeciesData>,
}

impl SpeciesDatabase {
    pub fn new() -> Self {
        Self {
            species: HashMap::new(),
        }
    }

    pub fn insert(&mut self, data: SpeciesData) {
        self.species.insert(data.id, data);
    }

    pub fn get(&self, species_id: u32) -> Option<&SpeciesData> {
        self.species.get(&species_id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&SpeciesData> {
        self.species
            .values()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn require_by_name(&self, name: &str) -> Result<&SpeciesData> {
        self.get_by_name(name)
            .ok_or_else(|| BattleError::UnknownSpecies(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// All species, ordered by id.
    pub fn all(&self) -> Vec<&SpeciesData> {
        let mut list: Vec<&SpeciesData> = self.species.values().collect();
        list.sort_by_key(|s| s.id);
        list
    }

    /// Accepts a bare array, or an object wrapping the array under
    /// `species` (or the legacy `pokemons` key).
    pub fn load_from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let list_value = match value {
            Value::Object(mut obj) => obj
                .remove("species")
                .or_else(|| obj.remove("pokemons"))
                .unwrap_or(Value::Array(Vec::new())),
            other => other,
        };
        let list: Vec<SpeciesData> = serde_json::from_value(list_value)?;
        let mut db = Self::new();
        for data in list {
            db.insert(data);
        }
        tracing::debug!(count = db.len(), "species loaded");
        Ok(db)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::load_from_json_str(&json)
    }

    pub fn load_default() -> Result<Self> {
        const DEFAULT_SPECIES_JSON: &str = include_str!("../../data/species.json");
        Self::load_from_json_str(DEFAULT_SPECIES_JSON)
    }
}
