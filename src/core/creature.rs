use crate::core::experience::{self, derive_stats, level_for_xp, Stats};
use crate::core::state::CombatantView;
use crate::core::statuses::{ActionCheck, StatusState};
use crate::core::utils::{chance, roll_uniform};
use crate::data::species::{BaseStats, Evolution, SpeciesData};
use crate::data::type_chart::{effectiveness_message, ElementType, TypeChart};

/// Every attack uses the same fixed power.
pub const BASE_POWER: f64 = 80.0;
pub const SAME_TYPE_BONUS: f64 = 1.5;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const CRIT_CHANCE: f64 = 1.0 / 24.0;

#[derive(Clone, Debug)]
pub struct Combatant {
    pub species_id: u32,
    pub name: String,
    pub types: Vec<ElementType>,
    pub base_stats: BaseStats,
    pub level: u32,
    pub stats: Stats,
    pub hp: i32,
    pub xp: u64,
    pub base_xp: u32,
    pub capture_rate: u32,
    pub status: StatusState,
    pub evolution: Option<Evolution>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageRolls {
    pub critical: bool,
    pub random_factor: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageResult {
    pub damage: i32,
    pub multiplier: f64,
    pub critical: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttackOutcome {
    pub damage: i32,
    pub log: Vec<String>,
}

impl Combatant {
    pub fn from_species(species: &SpeciesData, level: u32) -> Self {
        let stats = derive_stats(&species.base_stats, level);
        Self {
            species_id: species.id,
            name: species.name.clone(),
            types: species.types.clone(),
            base_stats: species.base_stats,
            level,
            stats,
            hp: stats.hp,
            xp: experience::xp_for_level(level),
            base_xp: species.base_xp,
            capture_rate: species.capture_rate,
            status: StatusState::new(),
            evolution: species.evolution.clone(),
        }
    }

    pub fn max_hp(&self) -> i32 {
        self.stats.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount.max(0)).max(0);
    }

    /// Returns the HP actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0)).min(self.max_hp());
        self.hp - before
    }

    pub fn effective_speed(&self) -> i32 {
        (self.stats.speed as f64 * self.status.speed_modifier()).floor() as i32
    }

    pub fn hp_percent(&self) -> i32 {
        if self.max_hp() <= 0 {
            return 0;
        }
        self.hp * 100 / self.max_hp()
    }

    /// Multiplier of the first own type that is not neutral against the
    /// target; neutral when none is.
    pub fn type_multiplier_against(&self, target_types: &[ElementType], chart: &TypeChart) -> f64 {
        self.types
            .iter()
            .map(|t| chart.multiplier(*t, target_types))
            .find(|m| *m != 1.0)
            .unwrap_or(1.0)
    }

    /// Single attack against `target`. The miss roll is the caller's job.
    pub fn attack(
        &mut self,
        target: &mut Combatant,
        chart: &TypeChart,
        rng: &mut dyn FnMut() -> f64,
    ) -> AttackOutcome {
        let mut log = Vec::new();

        match self.status.can_act(&self.name, rng) {
            ActionCheck::Allowed(message) => log.extend(message),
            ActionCheck::Blocked(message) => {
                log.push(message);
                return AttackOutcome { damage: 0, log };
            }
            ActionCheck::SelfHit(message) => {
                log.push(message);
                let recoil = (self.stats.attack / 4).max(1);
                self.take_damage(recoil);
                log.push(format!("{} hurt itself in its confusion! (-{} HP)", self.name, recoil));
                if self.is_fainted() {
                    log.push(format!("{} fainted!", self.name));
                }
                return AttackOutcome { damage: 0, log };
            }
        }

        let critical = chance(rng, CRIT_CHANCE);
        let random_factor = roll_uniform(rng, 0.85, 1.0);
        let result = calc_damage(self, target, chart, DamageRolls { critical, random_factor });
        tracing::trace!(
            attacker = %self.name,
            defender = %target.name,
            damage = result.damage,
            multiplier = result.multiplier,
            critical,
            random_factor,
            "damage rolled"
        );

        if critical {
            log.push("A critical hit!".to_string());
        }
        if let Some(message) = effectiveness_message(result.multiplier) {
            log.push(message.to_string());
        }

        target.take_damage(result.damage);
        log.push(format!("{} deals {} damage to {}!", self.name, result.damage, target.name));
        if target.is_fainted() {
            log.push(format!("{} fainted!", target.name));
        }

        AttackOutcome {
            damage: result.damage,
            log,
        }
    }

    /// Adds XP and applies any level-ups. Returns the narration.
    pub fn gain_xp(&mut self, amount: u64) -> Vec<String> {
        let mut log = vec![format!("{} gained {} XP!", self.name, amount)];
        self.xp += amount;

        let old_level = self.level;
        let new_level = level_for_xp(self.xp, self.level);
        if new_level > old_level {
            self.level = new_level;
            self.recalculate_stats();
            tracing::info!(name = %self.name, from = old_level, to = new_level, "level up");
            log.push(format!("{} grew to level {}!", self.name, self.level));

            if self.can_evolve() {
                if let Some(evolution) = &self.evolution {
                    log.push(format!("{} can evolve into {}!", self.name, evolution.name));
                }
            }
        }
        log
    }

    /// Keeps the HP deficit across the stat change.
    fn recalculate_stats(&mut self) {
        let old_max = self.stats.hp;
        self.stats = derive_stats(&self.base_stats, self.level);
        self.hp = (self.hp + (self.stats.hp - old_max)).clamp(0, self.stats.hp);
    }

    pub fn can_evolve(&self) -> bool {
        self.evolution
            .as_ref()
            .map(|evo| self.level >= evo.level)
            .unwrap_or(false)
    }

    /// Replaces species identity, base stats and types with `into`, then
    /// restores HP fully.
    pub fn evolve(&mut self, into: &SpeciesData) -> (bool, String) {
        let eligible = self.can_evolve()
            && self
                .evolution
                .as_ref()
                .map(|evo| evo.species_id == into.id)
                .unwrap_or(false);
        if !eligible {
            return (false, format!("{} cannot evolve.", self.name));
        }

        let old_name = std::mem::replace(&mut self.name, into.name.clone());
        self.species_id = into.id;
        self.types = into.types.clone();
        self.base_stats = into.base_stats;
        self.base_xp = into.base_xp;
        self.capture_rate = into.capture_rate;
        self.evolution = into.evolution.clone();
        self.recalculate_stats();
        self.hp = self.max_hp();

        tracing::info!(from = %old_name, to = %self.name, "evolved");
        (true, format!("{} evolved into {}!", old_name, self.name))
    }

    pub fn snapshot(&self) -> CombatantView {
        CombatantView {
            name: self.name.clone(),
            types: self.types.clone(),
            hp: self.hp,
            max_hp: self.max_hp(),
            level: self.level,
            status: self.status.label().map(str::to_string),
            confused: self.status.is_confused(),
        }
    }
}

/// `((2L/5 + 2) * P * A / D / 50 + 2)` scaled by same-type bonus, type
/// multiplier, crit and the random factor. Always at least 1.
pub fn calc_damage(
    attacker: &Combatant,
    defender: &Combatant,
    chart: &TypeChart,
    rolls: DamageRolls,
) -> DamageResult {
    let attack_stat = (attacker.stats.attack as f64 * attacker.status.attack_modifier()).floor();
    let defense_stat = defender.stats.defense.max(1) as f64;
    let level = attacker.level as f64;

    let base = (2.0 * level / 5.0 + 2.0) * BASE_POWER * attack_stat / defense_stat / 50.0 + 2.0;
    let multiplier = attacker.type_multiplier_against(&defender.types, chart);
    let crit = if rolls.critical { CRIT_MULTIPLIER } else { 1.0 };
    let raw = base * SAME_TYPE_BONUS * multiplier * crit * rolls.random_factor;

    DamageResult {
        damage: (raw.floor() as i32).max(1),
        multiplier,
        critical: rolls.critical,
    }
}
