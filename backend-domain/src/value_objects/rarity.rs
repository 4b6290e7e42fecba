// Rarity value object

use serde::{Deserialize, Serialize};

/// Known rarities. Items carry their rarity as a plain string so that
/// values added to the catalog ahead of a backend deploy keep resolving;
/// this enum covers the validated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Barter,
    BarterResult,
}

impl Rarity {
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Barter,
        Rarity::BarterResult,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Barter => "barter",
            Rarity::BarterResult => "barter_result",
        }
    }

    pub fn parse(s: &str) -> Option<Rarity> {
        match s.trim().to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            "barter" => Some(Rarity::Barter),
            "barter_result" => Some(Rarity::BarterResult),
            _ => None,
        }
    }
}
