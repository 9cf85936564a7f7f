use thiserror::Error;

#[derive(Error, Debug)]
pub enum BattleError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Level {0} is outside 1..=100")]
    InvalidLevel(u32),

    #[error("Invalid species '{species}': {reason}")]
    InvalidSpecies { species: String, reason: String },

    #[error("{0} has fainted and cannot start a battle")]
    FaintedCombatant(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

pub type Result<T> = std::result::Result<T, BattleError>;
