use creature_battle::core::experience::{
    calc_stat, can_level_up, derive_stats, level_for_xp, progress_percent, xp_for_level, xp_gained,
    xp_to_next_level, MAX_LEVEL,
};
use creature_battle::data::species::BaseStats;

#[test]
fn cubic_curve() {
    assert_eq!(xp_for_level(1), 1);
    assert_eq!(xp_for_level(5), 125);
    assert_eq!(xp_for_level(10), 1000);
    assert_eq!(xp_for_level(100), 1_000_000);
}

#[test]
fn level_can_jump_several_steps() {
    assert_eq!(level_for_xp(8000, 5), 20);
    assert_eq!(level_for_xp(124, 4), 4);
    assert_eq!(level_for_xp(u64::MAX / 2, 90), MAX_LEVEL);
    assert!(!can_level_up(u64::MAX / 2, MAX_LEVEL));
}

#[test]
fn xp_reward_formula() {
    assert_eq!(xp_gained(64, 10, 1, false), 91);
    assert_eq!(xp_gained(64, 10, 1, true), 137);
    assert_eq!(xp_gained(64, 10, 2, false), 45);
    assert_eq!(xp_gained(1, 1, 4, false), 1);
}

#[test]
fn stats_from_base_and_level() {
    let squirtle = BaseStats {
        hp: 44,
        atk: 48,
        def: 65,
        spa: 50,
        spd: 64,
        spe: 43,
    };
    let stats = derive_stats(&squirtle, 10);
    assert_eq!(stats.hp, 28);
    assert_eq!(stats.attack, 14);
    assert_eq!(stats.defense, 18);
    assert_eq!(stats.speed, 13);
    assert_eq!(calc_stat(1, false, 1), 5);
    assert_eq!(calc_stat(1, true, 1), 11);
}

#[test]
fn progress_toward_next_level() {
    assert_eq!(xp_to_next_level(125, 5), 91);
    assert_eq!(progress_percent(125, 5), 0);
    assert_eq!(progress_percent(170, 5), 49);
    assert_eq!(progress_percent(1_000_000, MAX_LEVEL), 100);
    assert_eq!(xp_to_next_level(1_000_000, MAX_LEVEL), 0);
}
