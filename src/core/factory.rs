use crate::core::creature::Combatant;
use crate::core::error::{BattleError, Result};
use crate::core::experience::MAX_LEVEL;
use crate::data::species::SpeciesData;

#[derive(Clone, Debug, Default)]
pub struct CreateCombatantOptions {
    pub name: Option<String>,
    pub level: Option<u32>,
}

pub fn validate_species(species: &SpeciesData) -> Result<()> {
    if species.types.is_empty() || species.types.len() > 2 {
        return Err(BattleError::InvalidSpecies {
            species: species.name.clone(),
            reason: format!("expected 1 or 2 types, got {}", species.types.len()),
        });
    }
    if !(3..=255).contains(&species.capture_rate) {
        return Err(BattleError::InvalidSpecies {
            species: species.name.clone(),
            reason: format!("capture rate {} is outside 3..=255", species.capture_rate),
        });
    }
    Ok(())
}

pub fn create_combatant(species: &SpeciesData, options: CreateCombatantOptions) -> Result<Combatant> {
    let level = options.level.unwrap_or(5);
    if !(1..=MAX_LEVEL).contains(&level) {
        return Err(BattleError::InvalidLevel(level));
    }
    validate_species(species)?;

    let mut combatant = Combatant::from_species(species, level);
    if let Some(name) = options.name {
        combatant.name = name;
    }
    Ok(combatant)
}
