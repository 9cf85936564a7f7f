use creature_battle::core::capture::{approximate_probability, attempt_capture, hp_factor, MASTER_BALL_MULTIPLIER};
use creature_battle::core::creature::Combatant;
use creature_battle::core::statuses::StatusCondition;
use creature_battle::data::species::SpeciesDatabase;

fn wild(name: &str, level: u32) -> Combatant {
    let db = SpeciesDatabase::load_default().expect("load species");
    let species = db.require_by_name(name).expect("species exists");
    Combatant::from_species(species, level)
}

#[test]
fn master_ball_never_fails() {
    let mewtwo = wild("Mewtwo", 70);
    let mut rng = || 0.99;
    let result = attempt_capture(&mewtwo, "Master Ball", MASTER_BALL_MULTIPLIER, &mut rng);
    assert!(result.captured);
    assert_eq!(result.shakes, 3);
    assert_eq!(result.log[0], "You threw a Master Ball!");
    assert!(result.log.contains(&"The Master Ball never misses!".to_string()));
}

#[test]
fn high_capture_value_is_guaranteed() {
    let mut caterpie = wild("Caterpie", 5);
    caterpie
        .status
        .apply_persistent(StatusCondition::Sleep, &caterpie.types.clone(), &mut || 0.5);
    let mut rng = || 0.99;
    let result = attempt_capture(&caterpie, "Ultra Ball", 2.0, &mut rng);
    assert!(result.captured);
    assert_eq!(result.shakes, 3);
}

#[test]
fn shakes_follow_the_rolls() {
    let mewtwo = wild("Mewtwo", 70);

    let mut fail = || 0.99;
    let result = attempt_capture(&mewtwo, "Poke Ball", 1.0, &mut fail);
    assert!(!result.captured);
    assert_eq!(result.shakes, 0);
    assert_eq!(result.log.last().map(String::as_str), Some("Oh no! Mewtwo broke free!"));

    let mut rolls = vec![0.0, 0.0, 0.99].into_iter();
    let mut partial = move || rolls.next().unwrap_or(0.99);
    let result = attempt_capture(&mewtwo, "Poke Ball", 1.0, &mut partial);
    assert!(!result.captured);
    assert_eq!(result.shakes, 2);
    assert_eq!(
        result.log,
        vec![
            "You threw a Poke Ball!".to_string(),
            "The ball wobbles...".to_string(),
            "The ball wobbles again...".to_string(),
            "Oh no! Mewtwo broke free!".to_string(),
        ]
    );

    let mut lucky = || 0.0;
    let result = attempt_capture(&mewtwo, "Poke Ball", 1.0, &mut lucky);
    assert!(result.captured);
    assert_eq!(result.shakes, 4);
    assert_eq!(result.log.last().map(String::as_str), Some("Gotcha! Mewtwo was caught!"));
}

#[test]
fn low_hp_is_easier_to_catch() {
    let mut pikachu = wild("Pikachu", 10);
    assert!((hp_factor(&pikachu) - 1.0 / 3.0).abs() < 1e-9);
    let full = approximate_probability(&pikachu, 1.0, 1.0);

    pikachu.hp = 1;
    let low = approximate_probability(&pikachu, 1.0, 1.0);
    assert!(low > full);
    assert!(approximate_probability(&pikachu, 1.0, 2.0) >= low);
}

#[test]
fn probability_bounds() {
    let mewtwo = wild("Mewtwo", 70);
    assert_eq!(approximate_probability(&mewtwo, MASTER_BALL_MULTIPLIER, 1.0), 100.0);
    assert_eq!(approximate_probability(&mewtwo, 0.0, 1.0), 0.0);
    let estimate = approximate_probability(&mewtwo, 1.0, 1.0);
    assert!(estimate >= 0.1 && estimate < 5.0);
}
