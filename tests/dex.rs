use creature_battle::core::creature::Combatant;
use creature_battle::core::dex::{Dex, DexRecorder, DexState, TOTAL_SPECIES};
use creature_battle::data::species::SpeciesDatabase;
use creature_battle::data::type_chart::ElementType;

fn wild(name: &str) -> Combatant {
    let db = SpeciesDatabase::load_default().expect("load species");
    let species = db.require_by_name(name).expect("species exists");
    Combatant::from_species(species, 5)
}

#[test]
fn seen_then_captured() {
    let mut dex = Dex::new();
    let pidgey = wild("Pidgey");

    assert!(dex.record_seen(&pidgey));
    assert!(!dex.record_seen(&pidgey));
    assert_eq!(dex.entry(16).map(|e| e.state), Some(DexState::Seen));

    assert!(dex.record_captured(&pidgey));
    assert!(!dex.record_seen(&pidgey));
    assert!(dex.is_captured(16));
    assert_eq!(dex.entry(16).and_then(|e| e.stats).map(|s| s.hp), Some(pidgey.max_hp()));
}

#[test]
fn counts_and_filters() {
    let mut dex = Dex::new();
    dex.record_seen(&wild("Pidgey"));
    dex.record_seen(&wild("Rattata"));
    dex.record_captured(&wild("Magikarp"));

    let stats = dex.stats();
    assert_eq!(stats.seen, 3);
    assert_eq!(stats.captured, 1);
    assert_eq!(stats.total, TOTAL_SPECIES);
    assert_eq!(stats.seen_percent, 0.3);
    assert_eq!(stats.captured_percent, 0.1);

    assert_eq!(dex.entries_of_type(ElementType::Normal).len(), 2);
    assert_eq!(dex.entries_in_state(DexState::Captured)[0].0, 129);

    dex.reset();
    assert_eq!(dex.seen_count(), 0);
}

#[test]
fn saved_dex_reloads() {
    let mut dex = Dex::new();
    dex.record_seen(&wild("Gastly"));
    dex.record_captured(&wild("Geodude"));

    let path = std::env::temp_dir().join("creature_battle_dex_test").join("dex.json");
    dex.save_to(&path).expect("save dex");
    let loaded = Dex::load_from(&path).expect("load dex");
    std::fs::remove_file(&path).ok();

    assert!(loaded.is_seen(92));
    assert!(loaded.is_captured(74));
    assert!(!loaded.is_captured(92));
    assert_eq!(loaded.entry(92).map(|e| e.types.clone()), Some(vec![ElementType::Ghost, ElementType::Poison]));
}

#[test]
fn malformed_save_is_an_error() {
    assert!(Dex::from_json("{ not json").is_err());
}
