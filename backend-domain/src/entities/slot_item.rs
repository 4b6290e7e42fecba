// Slot item entity

use serde::{Deserialize, Serialize};

use crate::entities::CatalogItem;

/// Per-slot snapshot of a catalog item. `price_dinar` and `gives_points`
/// are frozen at the moment the item first joins the slot; catalog edits
/// after that point do not leak into already-scheduled slots.
///
/// Invariants: `stock <= initial_stock`; `initial_stock` never changes
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotItem {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub title_ar: String,
    pub rarity: String,
    pub stock: u32,
    pub initial_stock: u32,
    pub price_dinar: u32,
    pub gives_points: u32,
    pub max_per_user: Option<u32>,
    /// Resolved display asset. Empty means "renderer shows a placeholder".
    #[serde(default)]
    pub image_url: String,
}

impl SlotItem {
    /// Snapshot a catalog item into a slot with a fresh stock allocation.
    pub fn from_catalog(item: &CatalogItem, stock: u32, image_url: String) -> Self {
        Self {
            key: item.key.clone(),
            title: item.title.clone(),
            title_ar: item.title_ar.clone(),
            rarity: item.rarity.clone(),
            stock,
            initial_stock: stock,
            price_dinar: item.price_dinar,
            gives_points: item.gives_points,
            max_per_user: item.max_per_user,
            image_url,
        }
    }
}
