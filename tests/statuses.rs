use creature_battle::core::statuses::{ActionCheck, StatusCondition, StatusState};
use creature_battle::data::type_chart::ElementType;

#[test]
fn type_immunities_block_application() {
    let mut rng = || 0.5;
    let mut status = StatusState::new();
    assert!(!status.apply_persistent(StatusCondition::Burn, &[ElementType::Fire], &mut rng));
    assert!(!status.apply_persistent(StatusCondition::Poison, &[ElementType::Steel], &mut rng));
    assert!(!status.apply_persistent(
        StatusCondition::Paralysis,
        &[ElementType::Water, ElementType::Electric],
        &mut rng
    ));
    assert!(!status.apply_persistent(StatusCondition::Freeze, &[ElementType::Ice], &mut rng));
    assert!(status.is_clear());

    assert!(status.apply_persistent(StatusCondition::Sleep, &[ElementType::Fire], &mut rng));
    assert_eq!(status.persistent(), Some(StatusCondition::Sleep));
}

#[test]
fn only_one_persistent_status() {
    let mut rng = || 0.5;
    let mut status = StatusState::new();
    assert!(status.apply_persistent(StatusCondition::Poison, &[ElementType::Normal], &mut rng));
    assert!(!status.apply_persistent(StatusCondition::Burn, &[ElementType::Normal], &mut rng));
    assert_eq!(status.persistent(), Some(StatusCondition::Poison));

    assert!(status.apply_confusion(&mut rng));
    assert!(!status.apply_confusion(&mut rng));
    assert_eq!(status.to_string(), "Poisoned | Confused");
}

#[test]
fn sleep_counts_down_then_wakes() {
    let mut rng = || 0.99;
    let mut status = StatusState::new();
    status.apply_persistent(StatusCondition::Sleep, &[ElementType::Normal], &mut rng);
    assert_eq!(status.sleep_turns(), 3);

    assert_eq!(status.can_act("Snorlax", &mut rng), ActionCheck::Blocked("Snorlax is fast asleep.".to_string()));
    assert_eq!(status.can_act("Snorlax", &mut rng), ActionCheck::Blocked("Snorlax is fast asleep.".to_string()));
    assert_eq!(
        status.can_act("Snorlax", &mut rng),
        ActionCheck::Allowed(Some("Snorlax woke up!".to_string()))
    );
    assert_eq!(status.persistent(), None);
}

#[test]
fn one_turn_sleep_wakes_on_first_check() {
    let mut rng = || 0.0;
    let mut status = StatusState::new();
    status.apply_persistent(StatusCondition::Sleep, &[ElementType::Normal], &mut rng);
    assert_eq!(status.sleep_turns(), 1);
    assert!(status.can_act("Drowzee", &mut rng).can_act());
}

#[test]
fn freeze_thaws_on_low_roll() {
    let mut status = StatusState::new();
    status.apply_persistent(StatusCondition::Freeze, &[ElementType::Water], &mut || 0.5);

    let mut stuck = || 0.5;
    assert_eq!(
        status.can_act("Seel", &mut stuck),
        ActionCheck::Blocked("Seel is frozen solid!".to_string())
    );
    let mut thaw = || 0.1;
    assert_eq!(
        status.can_act("Seel", &mut thaw),
        ActionCheck::Allowed(Some("Seel thawed out!".to_string()))
    );
    assert!(status.is_clear());
}

#[test]
fn paralysis_sometimes_blocks() {
    let mut status = StatusState::new();
    status.apply_persistent(StatusCondition::Paralysis, &[ElementType::Normal], &mut || 0.5);

    let mut high = || 0.5;
    assert_eq!(status.can_act("Eevee", &mut high), ActionCheck::Allowed(None));
    let mut low = || 0.1;
    assert!(!status.can_act("Eevee", &mut low).can_act());
    assert_eq!(status.persistent(), Some(StatusCondition::Paralysis));
    assert_eq!(status.speed_modifier(), 0.5);
}

#[test]
fn confusion_self_hit_and_recovery() {
    let mut status = StatusState::new();
    status.apply_confusion(&mut || 0.99);
    assert_eq!(status.confusion_turns(), Some(4));

    let mut low = || 0.0;
    assert_eq!(
        status.can_act("Psyduck", &mut low),
        ActionCheck::SelfHit("Psyduck is confused!".to_string())
    );
    let mut high = || 0.9;
    assert_eq!(status.can_act("Psyduck", &mut high), ActionCheck::Allowed(None));
    assert_eq!(status.can_act("Psyduck", &mut high), ActionCheck::Allowed(None));
    assert_eq!(
        status.can_act("Psyduck", &mut high),
        ActionCheck::Allowed(Some("Psyduck snapped out of its confusion!".to_string()))
    );
    assert!(!status.is_confused());
}

#[test]
fn sleep_is_checked_before_confusion() {
    let mut rng = || 0.99;
    let mut status = StatusState::new();
    status.apply_persistent(StatusCondition::Sleep, &[ElementType::Normal], &mut rng);
    status.apply_confusion(&mut rng);

    let check = status.can_act("Slowpoke", &mut rng);
    assert!(matches!(check, ActionCheck::Blocked(_)));
    assert_eq!(status.confusion_turns(), Some(4));
}

#[test]
fn end_of_turn_damage_fractions() {
    let mut rng = || 0.5;
    let mut poisoned = StatusState::new();
    poisoned.apply_persistent(StatusCondition::Poison, &[ElementType::Normal], &mut rng);
    assert_eq!(poisoned.end_of_turn_damage("Rattata", 100).0, 12);
    assert_eq!(poisoned.end_of_turn_damage("Rattata", 5).0, 1);

    let mut burned = StatusState::new();
    burned.apply_persistent(StatusCondition::Burn, &[ElementType::Normal], &mut rng);
    let (damage, message) = burned.end_of_turn_damage("Rattata", 100);
    assert_eq!(damage, 6);
    assert_eq!(message.as_deref(), Some("Rattata is hurt by its burn! (-6 HP)"));
    assert_eq!(burned.end_of_turn_damage("Rattata", 5).0, 1);
    assert_eq!(burned.attack_modifier(), 0.5);

    let asleep = StatusState::new();
    assert_eq!(asleep.end_of_turn_damage("Rattata", 100), (0, None));
}

#[test]
fn clear_all_is_idempotent() {
    let mut rng = || 0.5;
    let mut status = StatusState::new();
    status.apply_persistent(StatusCondition::Freeze, &[ElementType::Normal], &mut rng);
    status.apply_confusion(&mut rng);
    assert_eq!(status.capture_bonus(), 2.0);

    status.clear_all();
    status.clear_all();
    assert!(status.is_clear());
    assert_eq!(status.capture_bonus(), 1.0);
    assert_eq!(status.to_string(), "None");
}
