//! Medium-fast experience curve: reaching level `n` takes `n^3` total XP.

use crate::data::species::BaseStats;
use serde::{Deserialize, Serialize};

pub const MAX_LEVEL: u32 = 100;

/// Stats derived from base stats and level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub sp_attack: i32,
    pub sp_defense: i32,
    pub speed: i32,
}

pub fn xp_for_level(level: u32) -> u64 {
    let n = level as u64;
    n * n * n
}

/// XP awarded for defeating (or catching) a combatant.
pub fn xp_gained(base_xp: u32, defeated_level: u32, participants: u32, trainer_battle: bool) -> u64 {
    let mut xp = (base_xp as f64 * defeated_level as f64) / (7.0 * participants.max(1) as f64);
    if trainer_battle {
        xp *= 1.5;
    }
    (xp.floor() as u64).max(1)
}

pub fn can_level_up(current_xp: u64, level: u32) -> bool {
    level < MAX_LEVEL && current_xp >= xp_for_level(level + 1)
}

/// Level reached with `current_xp`, starting from `level`. May jump several
/// levels at once.
pub fn level_for_xp(current_xp: u64, level: u32) -> u32 {
    let mut reached = level;
    while can_level_up(current_xp, reached) {
        reached += 1;
    }
    reached
}

pub fn calc_stat(base: i32, is_hp: bool, level: u32) -> i32 {
    let scaled = (base as i64 * 2 * level as i64) / 100;
    let value = if is_hp {
        scaled + level as i64 + 10
    } else {
        scaled + 5
    };
    (value as i32).max(1)
}

pub fn derive_stats(base: &BaseStats, level: u32) -> Stats {
    Stats {
        hp: calc_stat(base.hp, true, level),
        attack: calc_stat(base.atk, false, level),
        defense: calc_stat(base.def, false, level),
        sp_attack: calc_stat(base.spa, false, level),
        sp_defense: calc_stat(base.spd, false, level),
        speed: calc_stat(base.spe, false, level),
    }
}

pub fn xp_to_next_level(current_xp: u64, level: u32) -> u64 {
    if level >= MAX_LEVEL {
        return 0;
    }
    xp_for_level(level + 1).saturating_sub(current_xp)
}

/// Progress toward the next level in whole percent, 100 at max level.
pub fn progress_percent(current_xp: u64, level: u32) -> u32 {
    if level >= MAX_LEVEL {
        return 100;
    }
    let start = xp_for_level(level) as f64;
    let end = xp_for_level(level + 1) as f64;
    let span = end - start;
    if span <= 0.0 {
        return 100;
    }
    let pct = ((current_xp as f64 - start) / span) * 100.0;
    pct.clamp(0.0, 100.0).floor() as u32
}
