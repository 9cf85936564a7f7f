use crate::core::utils::{chance, roll_range};
use crate::data::type_chart::ElementType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persistent conditions. At most one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCondition {
    Poison,
    Burn,
    Paralysis,
    Sleep,
    Freeze,
}

impl StatusCondition {
    pub fn immune_types(self) -> &'static [ElementType] {
        match self {
            StatusCondition::Poison => &[ElementType::Poison, ElementType::Steel],
            StatusCondition::Burn => &[ElementType::Fire],
            StatusCondition::Paralysis => &[ElementType::Electric],
            StatusCondition::Freeze => &[ElementType::Ice],
            StatusCondition::Sleep => &[],
        }
    }

    pub fn capture_bonus(self) -> f64 {
        match self {
            StatusCondition::Sleep | StatusCondition::Freeze => 2.0,
            StatusCondition::Poison | StatusCondition::Burn | StatusCondition::Paralysis => 1.5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusCondition::Poison => "Poisoned",
            StatusCondition::Burn => "Burned",
            StatusCondition::Paralysis => "Paralyzed",
            StatusCondition::Sleep => "Asleep",
            StatusCondition::Freeze => "Frozen",
        }
    }
}

/// Result of the start-of-turn status check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionCheck {
    Allowed(Option<String>),
    Blocked(String),
    /// Confusion took over: the combatant hits itself instead of acting.
    SelfHit(String),
}

impl ActionCheck {
    pub fn can_act(&self) -> bool {
        matches!(self, ActionCheck::Allowed(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusState {
    persistent: Option<StatusCondition>,
    #[serde(default)]
    sleep_turns: u32,
    #[serde(default)]
    confusion_turns: Option<u32>,
}

impl StatusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persistent(&self) -> Option<StatusCondition> {
        self.persistent
    }

    pub fn sleep_turns(&self) -> u32 {
        self.sleep_turns
    }

    pub fn is_confused(&self) -> bool {
        self.confusion_turns.is_some()
    }

    pub fn confusion_turns(&self) -> Option<u32> {
        self.confusion_turns
    }

    pub fn is_clear(&self) -> bool {
        self.persistent.is_none() && self.confusion_turns.is_none()
    }

    /// Fails when a persistent status is already set or when any of the
    /// target's types is immune.
    pub fn apply_persistent(
        &mut self,
        status: StatusCondition,
        target_types: &[ElementType],
        rng: &mut dyn FnMut() -> f64,
    ) -> bool {
        if self.persistent.is_some() {
            return false;
        }
        if target_types.iter().any(|t| status.immune_types().contains(t)) {
            return false;
        }
        self.persistent = Some(status);
        self.sleep_turns = match status {
            StatusCondition::Sleep => roll_range(rng, 1, 3) as u32,
            _ => 0,
        };
        tracing::debug!(?status, sleep_turns = self.sleep_turns, "persistent status applied");
        true
    }

    pub fn apply_confusion(&mut self, rng: &mut dyn FnMut() -> f64) -> bool {
        if self.confusion_turns.is_some() {
            return false;
        }
        let turns = roll_range(rng, 1, 4) as u32;
        self.confusion_turns = Some(turns);
        tracing::debug!(turns, "confusion applied");
        true
    }

    pub fn cure_persistent(&mut self) {
        self.persistent = None;
        self.sleep_turns = 0;
    }

    pub fn cure_confusion(&mut self) {
        self.confusion_turns = None;
    }

    pub fn clear_all(&mut self) {
        self.cure_persistent();
        self.cure_confusion();
    }

    /// Start-of-turn check. Sleep, then freeze, then paralysis, then
    /// confusion; the first blocking condition wins.
    pub fn can_act(&mut self, name: &str, rng: &mut dyn FnMut() -> f64) -> ActionCheck {
        if self.persistent == Some(StatusCondition::Sleep) && self.sleep_turns > 0 {
            self.sleep_turns -= 1;
            if self.sleep_turns == 0 {
                self.cure_persistent();
                return ActionCheck::Allowed(Some(format!("{} woke up!", name)));
            }
            return ActionCheck::Blocked(format!("{} is fast asleep.", name));
        }

        if self.persistent == Some(StatusCondition::Freeze) {
            if chance(rng, 0.20) {
                self.cure_persistent();
                return ActionCheck::Allowed(Some(format!("{} thawed out!", name)));
            }
            return ActionCheck::Blocked(format!("{} is frozen solid!", name));
        }

        if self.persistent == Some(StatusCondition::Paralysis) && chance(rng, 0.25) {
            return ActionCheck::Blocked(format!("{} is fully paralyzed! It can't move!", name));
        }

        if let Some(turns) = self.confusion_turns {
            let left = turns.saturating_sub(1);
            if left == 0 {
                self.cure_confusion();
                return ActionCheck::Allowed(Some(format!("{} snapped out of its confusion!", name)));
            }
            self.confusion_turns = Some(left);
            if chance(rng, 0.33) {
                return ActionCheck::SelfHit(format!("{} is confused!", name));
            }
        }

        ActionCheck::Allowed(None)
    }

    pub fn end_of_turn_damage(&self, name: &str, max_hp: i32) -> (i32, Option<String>) {
        match self.persistent {
            Some(StatusCondition::Poison) => {
                let damage = (max_hp / 8).max(1);
                (damage, Some(format!("{} is hurt by poison! (-{} HP)", name, damage)))
            }
            Some(StatusCondition::Burn) => {
                let damage = (max_hp / 16).max(1);
                (damage, Some(format!("{} is hurt by its burn! (-{} HP)", name, damage)))
            }
            _ => (0, None),
        }
    }

    pub fn attack_modifier(&self) -> f64 {
        if self.persistent == Some(StatusCondition::Burn) {
            0.5
        } else {
            1.0
        }
    }

    pub fn speed_modifier(&self) -> f64 {
        if self.persistent == Some(StatusCondition::Paralysis) {
            0.5
        } else {
            1.0
        }
    }

    pub fn capture_bonus(&self) -> f64 {
        self.persistent.map(StatusCondition::capture_bonus).unwrap_or(1.0)
    }

    pub fn label(&self) -> Option<&'static str> {
        self.persistent.map(StatusCondition::label)
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(label) = self.label() {
            parts.push(label);
        }
        if self.is_confused() {
            parts.push("Confused");
        }
        if parts.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&parts.join(" | "))
        }
    }
}
