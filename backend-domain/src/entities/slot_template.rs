// Slot template entity

use serde::{Deserialize, Serialize};

use crate::value_objects::SlotType;

/// Reusable per-slot-type configuration, independent of any calendar day.
/// The synchronizer copies it into a day's schedule entry exactly once;
/// later template edits never touch already-materialized entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotTemplate {
    pub slot_type: SlotType,
    pub name: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub background_url: String,
    /// Ordered, duplicate-free set of catalog keys seeded into new entries.
    #[serde(default)]
    pub default_item_keys: Vec<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub start_hour: Option<u32>,
    pub end_hour: Option<u32>,
    pub duration_minutes: Option<u32>,
}

fn default_active() -> bool {
    true
}
