use crate::data::type_chart::ElementType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleOutcome {
    InProgress,
    PlayerWon,
    OpponentWon,
    Captured,
    Fled,
}

impl BattleOutcome {
    pub fn is_terminal(self) -> bool {
        self != BattleOutcome::InProgress
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Read-only view of a combatant for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub name: String,
    pub types: Vec<ElementType>,
    pub hp: i32,
    pub max_hp: i32,
    pub level: u32,
    pub status: Option<String>,
    pub confused: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub turn: u32,
    pub terminal: bool,
    pub outcome: BattleOutcome,
    pub player: CombatantView,
    pub opponent: CombatantView,
}
