pub mod core;
pub mod data;

pub use crate::core::{
    battle::Battle,
    capture::{approximate_probability, attempt_capture, CaptureResult, MASTER_BALL_MULTIPLIER},
    config::BattleOptions,
    creature::{calc_damage, AttackOutcome, Combatant, DamageResult, DamageRolls},
    dex::{Dex, DexRecorder, DexState},
    error::{BattleError, Result},
    factory::{create_combatant, CreateCombatantOptions},
    inventory::{Bag, Inventory, ItemUse},
    state::{BattleOutcome, BattleSnapshot, CombatantView, Side},
    statuses::{ActionCheck, StatusCondition, StatusState},
    utils::seeded_rng,
};
pub use crate::data::{
    items::{Item, ItemKind},
    species::{BaseStats, Evolution, SpeciesData, SpeciesDatabase},
    type_chart::{ElementType, TypeChart},
};
