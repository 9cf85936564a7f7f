use creature_battle::core::capture::approximate_probability;
use creature_battle::core::experience::progress_percent;
use creature_battle::core::utils::roll_range;
use creature_battle::{
    create_combatant, seeded_rng, Bag, Battle, BattleOptions, CreateCombatantOptions, Dex,
    Item, Side, SpeciesData, SpeciesDatabase,
};
use inquire::{Confirm, CustomType, Select};
use std::env;
use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

const RANDOM_ENCOUNTER: &str = "Random encounter";

fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("creature_battle=info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("╔═══════════════════════════════════════╗");
    println!("║          ⚔️  WILD BATTLE CLI ⚔️         ║");
    println!("╚═══════════════════════════════════════╝");
    println!();

    let species_db = match env::var("SPECIES_PATH") {
        Ok(path) => SpeciesDatabase::load_from_path(path)?,
        Err(_) => SpeciesDatabase::load_default()?,
    };
    let options = match env::var("BATTLE_CONFIG") {
        Ok(path) => BattleOptions::from_yaml_file(path)?,
        Err(_) => BattleOptions::default(),
    };
    let seed = env::var("BATTLE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(time_seed);
    tracing::info!(seed, "starting battle");
    let mut rng = seeded_rng(seed);

    let species_list = species_db.all();
    if species_list.is_empty() {
        return Err("no species available".into());
    }

    let labels: Vec<String> = species_list.iter().map(|s| species_label(s)).collect();
    let choice = Select::new("Choose your partner:", labels.clone()).prompt()?;
    let player_species = pick(&species_list, &labels, &choice)?;
    let level = CustomType::<u32>::new("Partner level:")
        .with_default(10)
        .prompt()?;
    let mut player = create_combatant(
        player_species,
        CreateCombatantOptions {
            level: Some(level),
            ..Default::default()
        },
    )?;

    let mut wild_labels = vec![RANDOM_ENCOUNTER.to_string()];
    wild_labels.extend(labels.iter().cloned());
    let wild_choice = Select::new("Who do you want to meet?", wild_labels).prompt()?;
    let wild_species = if wild_choice == RANDOM_ENCOUNTER {
        let idx = roll_range(&mut rng, 0, species_list.len() as i32 - 1) as usize;
        species_list[idx]
    } else {
        pick(&species_list, &labels, &wild_choice)?
    };
    let wild_level = roll_range(&mut rng, 3, 10) as u32;
    let mut wild = create_combatant(
        wild_species,
        CreateCombatantOptions {
            level: Some(wild_level),
            ..Default::default()
        },
    )?;

    let mut bag = Bag::starter();
    let mut dex = Dex::new();
    {
        let mut battle = Battle::new(&mut player, &mut wild, &mut bag, &mut dex, options)?;
        let mut printed = 0;
        print_new_lines(&battle, &mut printed);

        while !battle.is_terminal() {
            print_status(&battle);
            let action = Select::new(
                "What will you do?",
                vec!["Attack", "Throw a ball", "Use an item", "Run"],
            )
            .prompt()?;

            match action {
                "Attack" => {
                    battle.resolve_turn(&mut rng);
                }
                "Throw a ball" => {
                    if let Some(ball) = choose_item(&battle, true)? {
                        battle.attempt_capture(&ball, &mut rng);
                    }
                }
                "Use an item" => {
                    if let Some(item) = choose_item(&battle, false)? {
                        battle.use_item(&item, Side::Player, &mut rng);
                    }
                }
                _ => {
                    battle.flee();
                }
            }
            print_new_lines(&battle, &mut printed);
        }

        println!();
        println!("════════════════════════════════════════");
        println!("  {}", battle.result_summary());
        println!("════════════════════════════════════════");
    }

    if player.can_evolve() {
        if let Some(target) = player
            .evolution
            .as_ref()
            .and_then(|evo| species_db.get(evo.species_id))
        {
            let accept = Confirm::new(&format!("Let {} evolve into {}?", player.name, target.name))
                .with_default(true)
                .prompt()?;
            if accept {
                let (_, message) = player.evolve(target);
                println!("{}", message);
            }
        }
    }

    println!(
        "{} Lv.{} ({}% to next level)",
        player.name,
        player.level,
        progress_percent(player.xp, player.level)
    );
    let stats = dex.stats();
    println!(
        "Dex: {} seen / {} caught of {} ({}% / {}%)",
        stats.seen, stats.captured, stats.total, stats.seen_percent, stats.captured_percent
    );
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(12345)
}

fn species_label(species: &SpeciesData) -> String {
    let types: Vec<&str> = species.types.iter().map(|t| t.name()).collect();
    format!("#{:04} {} ({})", species.id, species.name, types.join("/"))
}

fn pick<'s>(
    list: &[&'s SpeciesData],
    labels: &[String],
    choice: &str,
) -> Result<&'s SpeciesData, Box<dyn Error>> {
    labels
        .iter()
        .position(|label| label == choice)
        .map(|idx| list[idx])
        .ok_or_else(|| "unknown selection".into())
}

fn choose_item(battle: &Battle<'_>, balls: bool) -> Result<Option<Item>, Box<dyn Error>> {
    let stock: Vec<(Item, u32)> = battle
        .inventory()
        .stock()
        .into_iter()
        .filter(|(item, _)| item.is_ball() == balls)
        .collect();
    if stock.is_empty() {
        println!("Nothing usable in the bag.");
        return Ok(None);
    }

    let opponent = battle.opponent();
    let mut labels: Vec<String> = stock
        .iter()
        .map(|(item, qty)| {
            if balls {
                let multiplier = battle.inventory().resolve_ball_multiplier(
                    item,
                    &opponent.types,
                    battle.turn() + 1,
                    battle.options().capture_context.as_deref(),
                );
                let odds = approximate_probability(opponent, multiplier, opponent.status.capture_bonus());
                format!("{} x{} (~{:.1}%)", item.name, qty, odds)
            } else {
                format!("{} x{} - {}", item.name, qty, item.description)
            }
        })
        .collect();
    labels.push("Back".to_string());

    let choice = Select::new("Pick an item:", labels.clone()).prompt()?;
    Ok(labels
        .iter()
        .position(|label| *label == choice)
        .and_then(|idx| stock.get(idx))
        .map(|(item, _)| item.clone()))
}

fn print_status(battle: &Battle<'_>) {
    let state = battle.state();
    for view in [&state.player, &state.opponent] {
        let status = view.status.as_deref().unwrap_or("OK");
        let confused = if view.confused { " (confused)" } else { "" };
        println!(
            "  {} Lv.{}  HP {}/{}  [{}]{}",
            view.name, view.level, view.hp, view.max_hp, status, confused
        );
    }
}

fn print_new_lines(battle: &Battle<'_>, printed: &mut usize) {
    let transcript = battle.transcript();
    for line in &transcript[*printed..] {
        println!("{}", line);
    }
    *printed = transcript.len();
}
