use crate::core::creature::Combatant;
use crate::core::error::Result;
use crate::core::experience::Stats;
use crate::data::type_chart::ElementType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const TOTAL_SPECIES: u32 = 1025;

/// Records which species were encountered and caught.
pub trait DexRecorder {
    /// Returns false when the species is already known.
    fn record_seen(&mut self, combatant: &Combatant) -> bool;
    fn record_captured(&mut self, combatant: &Combatant) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DexState {
    Seen,
    Captured,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DexEntry {
    pub name: String,
    pub types: Vec<ElementType>,
    pub state: DexState,
    #[serde(default)]
    pub stats: Option<Stats>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DexStats {
    pub seen: u32,
    pub captured: u32,
    pub total: u32,
    pub seen_percent: f64,
    pub captured_percent: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DexFile {
    stats: DexStats,
    entries: BTreeMap<u32, DexEntry>,
}

#[derive(Clone, Debug, Default)]
pub struct Dex {
    entries: BTreeMap<u32, DexEntry>,
}

impl Dex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_seen(&self, species_id: u32) -> bool {
        self.entries.contains_key(&species_id)
    }

    pub fn is_captured(&self, species_id: u32) -> bool {
        self.entries
            .get(&species_id)
            .map(|e| e.state == DexState::Captured)
            .unwrap_or(false)
    }

    pub fn entry(&self, species_id: u32) -> Option<&DexEntry> {
        self.entries.get(&species_id)
    }

    pub fn seen_count(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn captured_count(&self) -> u32 {
        self.entries
            .values()
            .filter(|e| e.state == DexState::Captured)
            .count() as u32
    }

    pub fn entries_of_type(&self, element: ElementType) -> Vec<(u32, &DexEntry)> {
        self.entries
            .iter()
            .filter(|(_, e)| e.types.contains(&element))
            .map(|(id, e)| (*id, e))
            .collect()
    }

    pub fn entries_in_state(&self, state: DexState) -> Vec<(u32, &DexEntry)> {
        self.entries
            .iter()
            .filter(|(_, e)| e.state == state)
            .map(|(id, e)| (*id, e))
            .collect()
    }

    pub fn stats(&self) -> DexStats {
        let seen = self.seen_count();
        let captured = self.captured_count();
        let pct = |n: u32| (n as f64 / TOTAL_SPECIES as f64 * 1000.0).round() / 10.0;
        DexStats {
            seen,
            captured,
            total: TOTAL_SPECIES,
            seen_percent: pct(seen),
            captured_percent: pct(captured),
        }
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn to_json(&self) -> Result<String> {
        let file = DexFile {
            stats: self.stats(),
            entries: self.entries.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: DexFile = serde_json::from_str(json)?;
        Ok(Self { entries: file.entries })
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl DexRecorder for Dex {
    fn record_seen(&mut self, combatant: &Combatant) -> bool {
        if self.entries.contains_key(&combatant.species_id) {
            return false;
        }
        self.entries.insert(
            combatant.species_id,
            DexEntry {
                name: combatant.name.clone(),
                types: combatant.types.clone(),
                state: DexState::Seen,
                stats: None,
            },
        );
        true
    }

    fn record_captured(&mut self, combatant: &Combatant) -> bool {
        self.entries.insert(
            combatant.species_id,
            DexEntry {
                name: combatant.name.clone(),
                types: combatant.types.clone(),
                state: DexState::Captured,
                stats: Some(combatant.stats),
            },
        );
        true
    }
}
