use crate::core::error::{BattleError, Result};
use crate::core::statuses::StatusCondition;
use crate::data::type_chart::ElementType;
use serde::{Deserialize, Serialize};

/// Extra requirement for a ball's bonus. When unmet the ball counts as x1.0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BallCondition {
    Types { types: Vec<ElementType> },
    FirstTurn,
    Context { context: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Ball {
        multiplier: f64,
        #[serde(default)]
        condition: Option<BallCondition>,
    },
    /// `None` restores all HP.
    Heal { amount: Option<i32> },
    /// `None` cures every condition, confusion included.
    StatusCure { cures: Option<StatusCondition> },
    Revive { fraction: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: &str, description: &str, kind: ItemKind) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind,
        }
    }

    pub fn is_ball(&self) -> bool {
        matches!(self.kind, ItemKind::Ball { .. })
    }

    pub fn is_healing(&self) -> bool {
        !self.is_ball()
    }
}

pub const NIGHT_CAVE: &str = "night_cave";

fn ball(name: &str, description: &str, multiplier: f64, condition: Option<BallCondition>) -> Item {
    Item::new(name, description, ItemKind::Ball { multiplier, condition })
}

pub fn poke_ball() -> Item {
    ball("Poke Ball", "A standard ball.", 1.0, None)
}

pub fn great_ball() -> Item {
    ball("Great Ball", "Better catch rate (x1.5).", 1.5, None)
}

pub fn ultra_ball() -> Item {
    ball("Ultra Ball", "High catch rate (x2).", 2.0, None)
}

pub fn master_ball() -> Item {
    ball("Master Ball", "Never fails.", 255.0, None)
}

pub fn net_ball() -> Item {
    ball(
        "Net Ball",
        "Works well on Water and Bug types (x3.5).",
        3.5,
        Some(BallCondition::Types {
            types: vec![ElementType::Water, ElementType::Bug],
        }),
    )
}

pub fn dusk_ball() -> Item {
    ball(
        "Dusk Ball",
        "Works well at night or in caves (x3).",
        3.0,
        Some(BallCondition::Context {
            context: NIGHT_CAVE.to_string(),
        }),
    )
}

pub fn quick_ball() -> Item {
    ball("Quick Ball", "Very effective on the first turn (x5).", 5.0, Some(BallCondition::FirstTurn))
}

pub fn potion() -> Item {
    Item::new("Potion", "Restores 20 HP.", ItemKind::Heal { amount: Some(20) })
}

pub fn super_potion() -> Item {
    Item::new("Super Potion", "Restores 50 HP.", ItemKind::Heal { amount: Some(50) })
}

pub fn hyper_potion() -> Item {
    Item::new("Hyper Potion", "Restores 200 HP.", ItemKind::Heal { amount: Some(200) })
}

pub fn max_potion() -> Item {
    Item::new("Max Potion", "Restores all HP.", ItemKind::Heal { amount: None })
}

fn cure(name: &str, description: &str, cures: Option<StatusCondition>) -> Item {
    Item::new(name, description, ItemKind::StatusCure { cures })
}

pub fn antidote() -> Item {
    cure("Antidote", "Cures poison.", Some(StatusCondition::Poison))
}

pub fn burn_heal() -> Item {
    cure("Burn Heal", "Heals a burn.", Some(StatusCondition::Burn))
}

pub fn paralyze_heal() -> Item {
    cure("Paralyze Heal", "Cures paralysis.", Some(StatusCondition::Paralysis))
}

pub fn awakening() -> Item {
    cure("Awakening", "Wakes the target up.", Some(StatusCondition::Sleep))
}

pub fn ice_heal() -> Item {
    cure("Ice Heal", "Thaws the target out.", Some(StatusCondition::Freeze))
}

pub fn full_heal() -> Item {
    cure("Full Heal", "Cures every status condition.", None)
}

pub fn revive() -> Item {
    Item::new("Revive", "Revives a fainted combatant at 50% HP.", ItemKind::Revive { fraction: 0.5 })
}

pub fn max_revive() -> Item {
    Item::new("Max Revive", "Revives a fainted combatant at full HP.", ItemKind::Revive { fraction: 1.0 })
}

pub fn catalogue() -> Vec<Item> {
    vec![
        poke_ball(),
        great_ball(),
        ultra_ball(),
        master_ball(),
        net_ball(),
        dusk_ball(),
        quick_ball(),
        potion(),
        super_potion(),
        hyper_potion(),
        max_potion(),
        antidote(),
        burn_heal(),
        paralyze_heal(),
        awakening(),
        ice_heal(),
        full_heal(),
        revive(),
        max_revive(),
    ]
}

pub fn find(name: &str) -> Option<Item> {
    catalogue()
        .into_iter()
        .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
}

pub fn lookup(name: &str) -> Result<Item> {
    find(name).ok_or_else(|| BattleError::UnknownItem(name.to_string()))
}
