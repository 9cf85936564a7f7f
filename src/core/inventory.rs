use crate::core::creature::Combatant;
use crate::core::capture::MASTER_BALL_MULTIPLIER;
use crate::data::items::{self, BallCondition, Item, ItemKind};
use crate::data::type_chart::ElementType;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemUse {
    pub success: bool,
    pub message: String,
}

impl ItemUse {
    fn ok(message: String) -> Self {
        Self { success: true, message }
    }

    fn rejected(message: String) -> Self {
        Self { success: false, message }
    }
}

/// Item stock the battle draws balls and healing items from.
pub trait Inventory {
    /// Removes one unit. `None` when out of stock.
    fn withdraw(&mut self, item_name: &str) -> Option<Item>;

    /// Everything currently in stock with its quantity.
    fn stock(&self) -> Vec<(Item, u32)>;

    fn resolve_ball_multiplier(
        &self,
        ball: &Item,
        defender_types: &[ElementType],
        turn: u32,
        context: Option<&str>,
    ) -> f64 {
        ball_multiplier(ball, defender_types, turn, context)
    }

    fn apply_heal_item(&mut self, item: &Item, target: &mut Combatant) -> ItemUse;
    fn apply_status_cure(&mut self, item: &Item, target: &mut Combatant) -> ItemUse;
    fn apply_revive(&mut self, item: &Item, target: &mut Combatant) -> ItemUse;
}

/// Effective multiplier of `ball` in the current context. Unknown balls and
/// non-ball items count as x1.0.
pub fn ball_multiplier(ball: &Item, defender_types: &[ElementType], turn: u32, context: Option<&str>) -> f64 {
    let ItemKind::Ball { multiplier, condition } = &ball.kind else {
        return 1.0;
    };
    if *multiplier >= MASTER_BALL_MULTIPLIER {
        return MASTER_BALL_MULTIPLIER;
    }
    let met = match condition {
        None => true,
        Some(BallCondition::Types { types }) => defender_types.iter().any(|t| types.contains(t)),
        Some(BallCondition::FirstTurn) => turn == 1,
        Some(BallCondition::Context { context: wanted }) => context == Some(wanted.as_str()),
    };
    if met {
        *multiplier
    } else {
        1.0
    }
}

/// Name-keyed counted store.
#[derive(Clone, Debug, Default)]
pub struct Bag {
    stock: BTreeMap<String, (Item, u32)>,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock a new player starts with.
    pub fn starter() -> Self {
        let mut bag = Self::new();
        bag.add(items::poke_ball(), 20);
        bag.add(items::great_ball(), 10);
        bag.add(items::ultra_ball(), 5);
        bag.add(items::potion(), 10);
        bag.add(items::super_potion(), 5);
        bag.add(items::antidote(), 3);
        bag.add(items::paralyze_heal(), 3);
        bag.add(items::awakening(), 3);
        bag.add(items::full_heal(), 2);
        bag.add(items::revive(), 3);
        bag
    }

    pub fn add(&mut self, item: Item, quantity: u32) {
        self.stock
            .entry(item.name.clone())
            .and_modify(|(_, qty)| *qty += quantity)
            .or_insert((item, quantity));
    }

    pub fn quantity(&self, item_name: &str) -> u32 {
        self.stock.get(item_name).map(|(_, qty)| *qty).unwrap_or(0)
    }

    pub fn get(&self, item_name: &str) -> Option<&Item> {
        self.stock.get(item_name).map(|(item, _)| item)
    }

    pub fn balls(&self) -> Vec<(&Item, u32)> {
        self.stock
            .values()
            .filter(|(item, qty)| item.is_ball() && *qty > 0)
            .map(|(item, qty)| (item, *qty))
            .collect()
    }

    pub fn healing_items(&self) -> Vec<(&Item, u32)> {
        self.stock
            .values()
            .filter(|(item, qty)| item.is_healing() && *qty > 0)
            .map(|(item, qty)| (item, *qty))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }
}

impl Inventory for Bag {
    fn stock(&self) -> Vec<(Item, u32)> {
        self.stock
            .values()
            .filter(|(_, qty)| *qty > 0)
            .map(|(item, qty)| (item.clone(), *qty))
            .collect()
    }

    fn withdraw(&mut self, item_name: &str) -> Option<Item> {
        let (item, qty) = self.stock.get_mut(item_name)?;
        if *qty == 0 {
            return None;
        }
        *qty -= 1;
        let item = item.clone();
        if *qty == 0 {
            self.stock.remove(item_name);
        }
        Some(item)
    }

    fn apply_heal_item(&mut self, item: &Item, target: &mut Combatant) -> ItemUse {
        let ItemKind::Heal { amount } = item.kind else {
            return ItemUse::rejected(format!("{} is not a healing item.", item.name));
        };
        if target.is_fainted() {
            return ItemUse::rejected(format!("{} has fainted! Use a Revive.", target.name));
        }
        if target.hp >= target.max_hp() {
            return ItemUse::rejected(format!("{}'s HP is already full!", target.name));
        }
        if self.withdraw(&item.name).is_none() {
            return ItemUse::rejected(format!("You have no {} left!", item.name));
        }

        let amount = amount.unwrap_or(target.max_hp());
        let healed = target.heal(amount);
        ItemUse::ok(format!(
            "{} recovered {} HP! ({}/{})",
            target.name,
            healed,
            target.hp,
            target.max_hp()
        ))
    }

    fn apply_status_cure(&mut self, item: &Item, target: &mut Combatant) -> ItemUse {
        let ItemKind::StatusCure { cures } = item.kind else {
            return ItemUse::rejected(format!("{} does not cure status conditions.", item.name));
        };
        if target.is_fainted() {
            return ItemUse::rejected(format!("{} has fainted!", target.name));
        }

        match cures {
            None => {
                if target.status.is_clear() {
                    return ItemUse::rejected(format!("{} has no status condition.", target.name));
                }
                if self.withdraw(&item.name).is_none() {
                    return ItemUse::rejected(format!("You have no {} left!", item.name));
                }
                target.status.clear_all();
                ItemUse::ok(format!("{} is fully cured!", target.name))
            }
            Some(condition) => {
                if target.status.persistent() != Some(condition) {
                    return ItemUse::rejected(format!("{} isn't affected by that condition.", target.name));
                }
                if self.withdraw(&item.name).is_none() {
                    return ItemUse::rejected(format!("You have no {} left!", item.name));
                }
                target.status.cure_persistent();
                ItemUse::ok(format!("{} was cured!", target.name))
            }
        }
    }

    fn apply_revive(&mut self, item: &Item, target: &mut Combatant) -> ItemUse {
        let ItemKind::Revive { fraction } = item.kind else {
            return ItemUse::rejected(format!("{} is not a Revive.", item.name));
        };
        if !target.is_fainted() {
            return ItemUse::rejected(format!("{} hasn't fainted!", target.name));
        }
        if self.withdraw(&item.name).is_none() {
            return ItemUse::rejected(format!("You have no {} left!", item.name));
        }

        let restored = ((target.max_hp() as f64 * fraction).floor() as i32).max(1);
        target.hp = restored.min(target.max_hp());
        target.status.clear_all();
        ItemUse::ok(format!("{} was revived with {} HP!", target.name, target.hp))
    }
}
