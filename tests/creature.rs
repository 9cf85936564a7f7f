use creature_battle::core::creature::{calc_damage, Combatant, DamageRolls};
use creature_battle::core::statuses::StatusCondition;
use creature_battle::data::species::SpeciesDatabase;
use creature_battle::data::type_chart::TypeChart;

fn combatant(db: &SpeciesDatabase, name: &str, level: u32) -> Combatant {
    let species = db.require_by_name(name).expect("species exists");
    Combatant::from_species(species, level)
}

const PLAIN: DamageRolls = DamageRolls {
    critical: false,
    random_factor: 1.0,
};

#[test]
fn super_effective_reference_damage() {
    let db = SpeciesDatabase::load_default().expect("load species");
    let squirtle = combatant(&db, "Squirtle", 10);
    let charmander = combatant(&db, "Charmander", 10);

    let result = calc_damage(&squirtle, &charmander, &TypeChart::new(), PLAIN);
    assert_eq!(result.multiplier, 2.0);
    assert_eq!(result.damage, 37);

    let crit = calc_damage(
        &squirtle,
        &charmander,
        &TypeChart::new(),
        DamageRolls {
            critical: true,
            random_factor: 1.0,
        },
    );
    assert_eq!(crit.damage, 55);
}

#[test]
fn attack_applies_damage_and_narrates() {
    let db = SpeciesDatabase::load_default().expect("load species");
    let mut squirtle = combatant(&db, "Squirtle", 10);
    let mut charmander = combatant(&db, "Charmander", 10);
    let mut rng = || 1.0;

    let outcome = squirtle.attack(&mut charmander, &TypeChart::new(), &mut rng);
    assert_eq!(outcome.damage, 37);
    assert!(outcome.log.contains(&"It's super effective!".to_string()));
    assert!(outcome.log.contains(&"Squirtle deals 37 damage to Charmander!".to_string()));
    assert!(outcome.log.contains(&"Charmander fainted!".to_string()));
    assert_eq!(charmander.hp, 0);
    assert!(charmander.is_fainted());
}

#[test]
fn burn_halves_attack() {
    let db = SpeciesDatabase::load_default().expect("load species");
    let mut squirtle = combatant(&db, "Squirtle", 10);
    let charmander = combatant(&db, "Charmander", 10);
    squirtle
        .status
        .apply_persistent(StatusCondition::Burn, &[], &mut || 0.5);

    let result = calc_damage(&squirtle, &charmander, &TypeChart::new(), PLAIN);
    assert_eq!(result.damage, 21);
}

#[test]
fn immune_target_still_takes_one() {
    let db = SpeciesDatabase::load_default().expect("load species");
    let mut pikachu = combatant(&db, "Pikachu", 10);
    let mut geodude = combatant(&db, "Geodude", 10);
    let mut rng = || 1.0;

    let outcome = pikachu.attack(&mut geodude, &TypeChart::new(), &mut rng);
    assert_eq!(outcome.damage, 1);
    assert!(outcome.log.contains(&"It has no effect...".to_string()));
}

#[test]
fn first_non_neutral_type_is_used() {
    let db = SpeciesDatabase::load_default().expect("load species");
    let geodude = combatant(&db, "Geodude", 10);
    let pikachu = combatant(&db, "Pikachu", 10);
    // Rock is neutral on Electric, Ground is not.
    assert_eq!(geodude.type_multiplier_against(&pikachu.types, &TypeChart::new()), 2.0);
}

#[test]
fn confusion_can_make_attacker_hit_itself() {
    let db = SpeciesDatabase::load_default().expect("load species");
    let mut squirtle = combatant(&db, "Squirtle", 10);
    let mut charmander = combatant(&db, "Charmander", 10);
    squirtle.status.apply_confusion(&mut || 0.99);
    let mut rng = || 0.0;

    let outcome = squirtle.attack(&mut charmander, &TypeChart::new(), &mut rng);
    assert_eq!(outcome.damage, 0);
    assert_eq!(squirtle.hp, squirtle.max_hp() - 3);
    assert_eq!(charmander.hp, charmander.max_hp());
    assert!(outcome
        .log
        .contains(&"Squirtle hurt itself in its confusion! (-3 HP)".to_string()));
}

#[test]
fn level_up_keeps_hp_deficit() {
    let db = SpeciesDatabase::load_default().expect("load species");
    let mut squirtle = combatant(&db, "Squirtle", 10);
    assert_eq!(squirtle.max_hp(), 28);
    squirtle.take_damage(10);

    let log = squirtle.gain_xp(331);
    assert_eq!(squirtle.level, 11);
    assert_eq!(squirtle.max_hp(), 30);
    assert_eq!(squirtle.hp, 20);
    assert_eq!(log[0], "Squirtle gained 331 XP!");
    assert!(log.contains(&"Squirtle grew to level 11!".to_string()));
}

#[test]
fn evolution_after_reaching_level() {
    let db = SpeciesDatabase::load_default().expect("load species");
    let mut squirtle = combatant(&db, "Squirtle", 10);
    assert!(!squirtle.can_evolve());

    let log = squirtle.gain_xp(3096);
    assert_eq!(squirtle.level, 16);
    assert!(log.contains(&"Squirtle can evolve into Wartortle!".to_string()));

    let ivysaur = db.require_by_name("Ivysaur").expect("species exists");
    let (evolved, _) = squirtle.evolve(ivysaur);
    assert!(!evolved);

    squirtle.take_damage(5);
    let wartortle = db.require_by_name("Wartortle").expect("species exists");
    let (evolved, message) = squirtle.evolve(wartortle);
    assert!(evolved);
    assert_eq!(message, "Squirtle evolved into Wartortle!");
    assert_eq!(squirtle.name, "Wartortle");
    assert_eq!(squirtle.species_id, 8);
    assert_eq!(squirtle.hp, squirtle.max_hp());
    assert!(squirtle.evolution.is_none());
}

#[test]
fn hp_is_clamped() {
    let db = SpeciesDatabase::load_default().expect("load species");
    let mut rattata = combatant(&db, "Rattata", 5);
    rattata.take_damage(1_000);
    assert_eq!(rattata.hp, 0);
    assert_eq!(rattata.heal(1_000), rattata.max_hp());
    assert_eq!(rattata.hp_percent(), 100);
    assert_eq!(rattata.heal(5), 0);
}

#[test]
fn confusion_self_hit_can_faint_the_attacker() {
    let db = SpeciesDatabase::load_default().expect("load species");
    let mut squirtle = combatant(&db, "Squirtle", 10);
    let mut charmander = combatant(&db, "Charmander", 10);
    squirtle.status.apply_confusion(&mut || 0.99);
    squirtle.hp = 2;
    let mut rng = || 0.0;

    let outcome = squirtle.attack(&mut charmander, &TypeChart::new(), &mut rng);
    assert!(squirtle.is_fainted());
    assert_eq!(outcome.log.last().map(String::as_str), Some("Squirtle fainted!"));
}
