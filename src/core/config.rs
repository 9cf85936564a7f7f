use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_miss_chance() -> f64 {
    0.10
}

fn default_participants() -> u32 {
    1
}

fn default_record_dex() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleOptions {
    #[serde(default = "default_miss_chance")]
    pub miss_chance: f64,
    #[serde(default)]
    pub trainer_battle: bool,
    #[serde(default = "default_participants")]
    pub participants: u32,
    /// Location/time tag consulted by context-dependent balls.
    #[serde(default)]
    pub capture_context: Option<String>,
    #[serde(default = "default_record_dex")]
    pub record_dex: bool,
}

impl Default for BattleOptions {
    fn default() -> Self {
        Self {
            miss_chance: default_miss_chance(),
            trainer_battle: false,
            participants: default_participants(),
            capture_context: None,
            record_dex: default_record_dex(),
        }
    }
}

impl BattleOptions {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}
