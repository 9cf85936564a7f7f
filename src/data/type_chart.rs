use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl ElementType {
    /// Row/column order of the effectiveness matrix.
    pub const ALL: [ElementType; 18] = [
        ElementType::Normal,
        ElementType::Fire,
        ElementType::Water,
        ElementType::Grass,
        ElementType::Electric,
        ElementType::Ice,
        ElementType::Fighting,
        ElementType::Poison,
        ElementType::Ground,
        ElementType::Flying,
        ElementType::Psychic,
        ElementType::Bug,
        ElementType::Rock,
        ElementType::Ghost,
        ElementType::Dragon,
        ElementType::Dark,
        ElementType::Steel,
        ElementType::Fairy,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementType::Normal => "Normal",
            ElementType::Fire => "Fire",
            ElementType::Water => "Water",
            ElementType::Grass => "Grass",
            ElementType::Electric => "Electric",
            ElementType::Ice => "Ice",
            ElementType::Fighting => "Fighting",
            ElementType::Poison => "Poison",
            ElementType::Ground => "Ground",
            ElementType::Flying => "Flying",
            ElementType::Psychic => "Psychic",
            ElementType::Bug => "Bug",
            ElementType::Rock => "Rock",
            ElementType::Ghost => "Ghost",
            ElementType::Dragon => "Dragon",
            ElementType::Dark => "Dark",
            ElementType::Steel => "Steel",
            ElementType::Fairy => "Fairy",
        }
    }

    /// Case-insensitive lookup. Also understands the French names used by
    /// older species files.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase();
        let found = match key.as_str() {
            "normal" => ElementType::Normal,
            "fire" | "feu" => ElementType::Fire,
            "water" | "eau" => ElementType::Water,
            "grass" | "plante" => ElementType::Grass,
            "electric" | "electrik" => ElementType::Electric,
            "ice" | "glace" => ElementType::Ice,
            "fighting" | "combat" => ElementType::Fighting,
            "poison" => ElementType::Poison,
            "ground" | "sol" => ElementType::Ground,
            "flying" | "vol" => ElementType::Flying,
            "psychic" | "psy" => ElementType::Psychic,
            "bug" | "insecte" => ElementType::Bug,
            "rock" | "roche" => ElementType::Rock,
            "ghost" | "spectre" => ElementType::Ghost,
            "dragon" => ElementType::Dragon,
            "dark" | "tenebres" => ElementType::Dark,
            "steel" | "acier" => ElementType::Steel,
            "fairy" | "fee" => ElementType::Fairy,
            _ => return None,
        };
        Some(found)
    }
}

impl<'de> Deserialize<'de> for ElementType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        ElementType::from_name(&name).ok_or_else(|| de::Error::custom(format!("unknown type '{}'", name)))
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// CHART[attacker][defender]
#[rustfmt::skip]
const CHART: [[f64; 18]; 18] = [
    //NOR  FIR  WAT  GRA  ELE  ICE  FIG  POI  GRO  FLY  PSY  BUG  ROC  GHO  DRA  DAR  STE  FAI
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0], // Normal
    [1.0, 0.5, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0], // Fire
    [1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0], // Water
    [1.0, 0.5, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0], // Grass
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0], // Electric
    [1.0, 0.5, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0], // Ice
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5], // Fighting
    [1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0], // Poison
    [1.0, 2.0, 1.0, 0.5, 2.0, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0], // Ground
    [1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0], // Flying
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0], // Psychic
    [1.0, 0.5, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5], // Bug
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0], // Rock
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0], // Ghost
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0], // Dragon
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 0.5], // Dark
    [1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0], // Steel
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0], // Fairy
];

/// Static 18x18 effectiveness table. Zero-sized; cheap to construct anywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeChart;

impl TypeChart {
    pub fn new() -> Self {
        Self
    }

    pub fn effectiveness(&self, attack: ElementType, defend: ElementType) -> f64 {
        CHART[attack.index()][defend.index()]
    }

    /// Product of the pairwise lookups against every defending type.
    pub fn multiplier(&self, attack: ElementType, defend_types: &[ElementType]) -> f64 {
        defend_types
            .iter()
            .fold(1.0, |acc, defend| acc * self.effectiveness(attack, *defend))
    }

    /// Name-based lookup. Unknown names are neutral.
    pub fn effectiveness_by_name(&self, attack: &str, defend: &str) -> f64 {
        match (ElementType::from_name(attack), ElementType::from_name(defend)) {
            (Some(a), Some(d)) => self.effectiveness(a, d),
            _ => 1.0,
        }
    }

    pub fn multiplier_by_name(&self, attack: &str, defend_types: &[String]) -> f64 {
        defend_types
            .iter()
            .fold(1.0, |acc, defend| acc * self.effectiveness_by_name(attack, defend))
    }

    pub fn is_valid_type(&self, name: &str) -> bool {
        ElementType::from_name(name).is_some()
    }

    pub fn weaknesses(&self, defend: ElementType) -> Vec<ElementType> {
        self.attackers_with(defend, 2.0)
    }

    pub fn resistances(&self, defend: ElementType) -> Vec<ElementType> {
        self.attackers_with(defend, 0.5)
    }

    pub fn immunities(&self, defend: ElementType) -> Vec<ElementType> {
        self.attackers_with(defend, 0.0)
    }

    fn attackers_with(&self, defend: ElementType, value: f64) -> Vec<ElementType> {
        ElementType::ALL
            .iter()
            .copied()
            .filter(|attack| self.effectiveness(*attack, defend) == value)
            .collect()
    }
}

pub fn effectiveness_message(multiplier: f64) -> Option<&'static str> {
    if multiplier == 0.0 {
        Some("It has no effect...")
    } else if multiplier == 0.25 {
        Some("It's really not very effective...")
    } else if multiplier == 0.5 {
        Some("It's not very effective...")
    } else if multiplier == 2.0 {
        Some("It's super effective!")
    } else if multiplier >= 4.0 {
        Some("It's extremely effective!!")
    } else {
        None
    }
}
