use crate::core::capture::attempt_capture;
use crate::core::config::BattleOptions;
use crate::core::creature::Combatant;
use crate::core::dex::DexRecorder;
use crate::core::error::{BattleError, Result};
use crate::core::experience::xp_gained;
use crate::core::inventory::{Inventory, ItemUse};
use crate::core::state::{BattleOutcome, BattleSnapshot, Side};
use crate::core::utils::chance;
use crate::data::items::{Item, ItemKind};
use crate::data::type_chart::TypeChart;

const ALREADY_OVER: &str = "The battle is already over.";

/// One wild encounter between the player's combatant and an opponent.
/// Both combatants and both collaborators are borrowed for the lifetime of
/// the battle; every action resolves synchronously.
pub struct Battle<'a> {
    player: &'a mut Combatant,
    opponent: &'a mut Combatant,
    inventory: &'a mut dyn Inventory,
    dex: &'a mut dyn DexRecorder,
    options: BattleOptions,
    type_chart: TypeChart,
    turn: u32,
    outcome: BattleOutcome,
    transcript: Vec<String>,
}

impl<'a> Battle<'a> {
    pub fn new(
        player: &'a mut Combatant,
        opponent: &'a mut Combatant,
        inventory: &'a mut dyn Inventory,
        dex: &'a mut dyn DexRecorder,
        options: BattleOptions,
    ) -> Result<Self> {
        for combatant in [&*player, &*opponent] {
            if combatant.is_fainted() {
                return Err(BattleError::FaintedCombatant(combatant.name.clone()));
            }
        }
        if options.record_dex {
            dex.record_seen(&*opponent);
        }
        let opening = format!("A wild {} (Lv. {}) appeared!", opponent.name, opponent.level);
        Ok(Self {
            player,
            opponent,
            inventory,
            dex,
            options,
            type_chart: TypeChart::new(),
            turn: 0,
            outcome: BattleOutcome::InProgress,
            transcript: vec![opening],
        })
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn options(&self) -> &BattleOptions {
        &self.options
    }

    pub fn inventory(&self) -> &dyn Inventory {
        &*self.inventory
    }

    pub fn player(&self) -> &Combatant {
        &*self.player
    }

    pub fn opponent(&self) -> &Combatant {
        &*self.opponent
    }

    pub fn state(&self) -> BattleSnapshot {
        BattleSnapshot {
            turn: self.turn,
            terminal: self.is_terminal(),
            outcome: self.outcome,
            player: self.player.snapshot(),
            opponent: self.opponent.snapshot(),
        }
    }

    pub fn result_summary(&self) -> String {
        match self.outcome {
            BattleOutcome::InProgress => "The battle is still going on.".to_string(),
            BattleOutcome::Captured => format!("You caught {}!", self.opponent.name),
            BattleOutcome::Fled => "You ran away from the battle.".to_string(),
            BattleOutcome::PlayerWon => format!("{} won the battle!", self.player.name),
            BattleOutcome::OpponentWon => {
                format!("{} won. {} fainted...", self.opponent.name, self.player.name)
            }
        }
    }

    /// Faster combatant first; ties are a coin flip.
    pub fn turn_order(&self, rng: &mut dyn FnMut() -> f64) -> (Side, Side) {
        let player_speed = self.player.effective_speed();
        let opponent_speed = self.opponent.effective_speed();
        let first = if player_speed > opponent_speed {
            Side::Player
        } else if opponent_speed > player_speed {
            Side::Opponent
        } else if chance(rng, 0.5) {
            Side::Player
        } else {
            Side::Opponent
        };
        (first, first.other())
    }

    /// Both combatants attack in speed order, each followed by its own
    /// end-of-turn status damage. Stops at the first faint.
    pub fn resolve_turn(&mut self, rng: &mut dyn FnMut() -> f64) -> Vec<String> {
        if self.is_terminal() {
            return vec![ALREADY_OVER.to_string()];
        }

        self.turn += 1;
        tracing::debug!(turn = self.turn, "turn start");
        let mut log = vec![format!("=== Turn {} ===", self.turn)];

        let (first, second) = self.turn_order(rng);
        for actor in [first, second] {
            log.extend(self.attack_phase(actor, rng));
            if let Some(ending) = self.knockout_after_attack(actor) {
                log.extend(ending);
                return self.commit(log);
            }

            log.extend(self.end_of_turn(actor));
            if self.combatant(actor).is_fainted() {
                log.extend(self.finish(actor.other()));
                return self.commit(log);
            }
        }

        log.push(self.hp_line(Side::Player));
        log.push(self.hp_line(Side::Opponent));
        self.commit(log)
    }

    /// Throws `ball` at the opponent. A failed throw gives the opponent a
    /// free attack.
    pub fn attempt_capture(&mut self, ball: &Item, rng: &mut dyn FnMut() -> f64) -> Vec<String> {
        if self.is_terminal() {
            return vec![ALREADY_OVER.to_string()];
        }
        if !ball.is_ball() {
            return self.commit(vec![format!("{} is not a ball!", ball.name)]);
        }
        let Some(ball) = self.inventory.withdraw(&ball.name) else {
            return self.commit(vec![format!("You have no {} left!", ball.name)]);
        };

        self.turn += 1;
        let multiplier = self.inventory.resolve_ball_multiplier(
            &ball,
            &self.opponent.types,
            self.turn,
            self.options.capture_context.as_deref(),
        );
        let result = attempt_capture(&*self.opponent, &ball.name, multiplier, rng);
        tracing::info!(
            ball = %ball.name,
            multiplier,
            captured = result.captured,
            shakes = result.shakes,
            "capture attempt"
        );
        let mut log = result.log;

        if result.captured {
            self.outcome = BattleOutcome::Captured;
            if self.options.record_dex {
                self.dex.record_captured(&*self.opponent);
                log.push(format!("{} was registered in the dex!", self.opponent.name));
            }
            log.extend(self.award_xp());
            tracing::info!(outcome = ?self.outcome, turn = self.turn, "battle over");
            return self.commit(log);
        }

        log.push(format!("{} strikes back!", self.opponent.name));
        log.extend(self.attack_phase(Side::Opponent, rng));
        if let Some(ending) = self.knockout_after_attack(Side::Opponent) {
            log.extend(ending);
            return self.commit(log);
        }

        log.extend(self.end_of_turn(Side::Opponent));
        if self.opponent.is_fainted() {
            log.extend(self.finish(Side::Player));
        }
        self.commit(log)
    }

    /// Uses a healing, curing or reviving item on `target`. On success the
    /// opponent attacks and both sides take end-of-turn damage.
    pub fn use_item(&mut self, item: &Item, target: Side, rng: &mut dyn FnMut() -> f64) -> Vec<String> {
        if self.is_terminal() {
            return vec![ALREADY_OVER.to_string()];
        }

        let receiver: &mut Combatant = match target {
            Side::Player => &mut *self.player,
            Side::Opponent => &mut *self.opponent,
        };
        let used = match item.kind {
            ItemKind::Heal { .. } => self.inventory.apply_heal_item(item, receiver),
            ItemKind::StatusCure { .. } => self.inventory.apply_status_cure(item, receiver),
            ItemKind::Revive { .. } => self.inventory.apply_revive(item, receiver),
            ItemKind::Ball { .. } => ItemUse {
                success: false,
                message: format!("{} can't be used that way.", item.name),
            },
        };

        let mut log = vec![used.message];
        if !used.success {
            return self.commit(log);
        }

        self.turn += 1;
        log.push(format!("{} attacks!", self.opponent.name));
        log.extend(self.attack_phase(Side::Opponent, rng));
        if let Some(ending) = self.knockout_after_attack(Side::Opponent) {
            log.extend(ending);
            return self.commit(log);
        }

        for side in [Side::Player, Side::Opponent] {
            log.extend(self.end_of_turn(side));
            if self.combatant(side).is_fainted() {
                log.extend(self.finish(side.other()));
                return self.commit(log);
            }
        }
        self.commit(log)
    }

    pub fn flee(&mut self) -> Vec<String> {
        if self.is_terminal() {
            return vec![ALREADY_OVER.to_string()];
        }
        self.outcome = BattleOutcome::Fled;
        tracing::info!(outcome = ?self.outcome, turn = self.turn, "battle over");
        self.commit(vec!["You got away safely!".to_string()])
    }

    /// Resolves plain turns until the battle ends or `max_turns` is reached.
    pub fn run_to_completion(&mut self, rng: &mut dyn FnMut() -> f64, max_turns: u32) -> BattleOutcome {
        let mut turns = 0;
        while !self.is_terminal() && turns < max_turns {
            self.resolve_turn(rng);
            turns += 1;
        }
        self.outcome
    }

    fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &*self.player,
            Side::Opponent => &*self.opponent,
        }
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut *self.player,
            Side::Opponent => &mut *self.opponent,
        }
    }

    fn pair_mut(&mut self, attacker: Side) -> (&mut Combatant, &mut Combatant) {
        match attacker {
            Side::Player => (&mut *self.player, &mut *self.opponent),
            Side::Opponent => (&mut *self.opponent, &mut *self.player),
        }
    }

    fn attack_phase(&mut self, attacker: Side, rng: &mut dyn FnMut() -> f64) -> Vec<String> {
        let miss_chance = self.options.miss_chance;
        let chart = self.type_chart;
        let (actor, defender) = self.pair_mut(attacker);

        let mut log = vec![format!("--- {}'s turn ---", actor.name)];
        if chance(rng, miss_chance) {
            log.push(format!("{}'s attack missed!", actor.name));
            return log;
        }
        let outcome = actor.attack(defender, &chart, rng);
        log.extend(outcome.log);
        log
    }

    /// Ends the battle when an attack phase left either side at 0 HP. A
    /// confusion self-hit can knock out the attacker itself.
    fn knockout_after_attack(&mut self, attacker: Side) -> Option<Vec<String>> {
        if self.combatant(attacker.other()).is_fainted() {
            Some(self.finish(attacker))
        } else if self.combatant(attacker).is_fainted() {
            Some(self.finish(attacker.other()))
        } else {
            None
        }
    }

    fn end_of_turn(&mut self, side: Side) -> Vec<String> {
        let combatant = self.combatant_mut(side);
        let (damage, message) = combatant
            .status
            .end_of_turn_damage(&combatant.name, combatant.max_hp());
        let mut log = Vec::new();
        if damage > 0 {
            combatant.take_damage(damage);
            log.extend(message);
            if combatant.is_fainted() {
                log.push(format!("{} fainted from its condition!", combatant.name));
            }
        }
        log
    }

    fn finish(&mut self, winner: Side) -> Vec<String> {
        self.outcome = match winner {
            Side::Player => BattleOutcome::PlayerWon,
            Side::Opponent => BattleOutcome::OpponentWon,
        };
        tracing::info!(outcome = ?self.outcome, turn = self.turn, "battle over");
        match winner {
            Side::Player => self.award_xp(),
            Side::Opponent => Vec::new(),
        }
    }

    fn award_xp(&mut self) -> Vec<String> {
        let amount = xp_gained(
            self.opponent.base_xp,
            self.opponent.level,
            self.options.participants,
            self.options.trainer_battle,
        );
        self.player.gain_xp(amount)
    }

    fn hp_line(&self, side: Side) -> String {
        let combatant = self.combatant(side);
        format!("{}: {}/{} HP", combatant.name, combatant.hp, combatant.max_hp())
    }

    fn commit(&mut self, log: Vec<String>) -> Vec<String> {
        self.transcript.extend(log.iter().cloned());
        log
    }
}
