// Catalog item entity

use serde::{Deserialize, Serialize};

/// One purchasable/tradable item in the master catalog. Read-only from the
/// scheduling core's perspective; slots take snapshots of the fields they
/// need instead of referencing these records live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogItem {
    pub key: String,
    pub title: String,
    pub title_ar: String,
    pub rarity: String,
    pub item_type: Option<String>,
    pub icon: Option<String>,
    /// Explicit asset locator; when set it wins over rarity/icon resolution.
    pub image_url: Option<String>,
    pub price_dinar: u32,
    pub gives_points: u32,
    pub gives_xp: u32,
    pub required_level: u32,
    pub max_per_user: Option<u32>,
    pub enabled: bool,
}

impl Default for CatalogItem {
    fn default() -> Self {
        Self {
            key: String::new(),
            title: String::new(),
            title_ar: String::new(),
            rarity: "common".to_string(),
            item_type: None,
            icon: None,
            image_url: None,
            price_dinar: 0,
            gives_points: 0,
            gives_xp: 0,
            required_level: 0,
            max_per_user: None,
            enabled: true,
        }
    }
}
