// Schedule entry entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::SlotItem;
use crate::value_objects::{DateId, SlotStatus, SlotType};

/// The materialized, day-specific instance of a slot template. Unique per
/// (`date_id`, `slot_type`); created once by the synchronizer and edited in
/// place afterwards. `version` increments on every save so stale
/// read-modify-writes can be rejected instead of silently overwriting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date_id: DateId,
    pub slot_type: SlotType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub background_url: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: SlotStatus,
    #[serde(default)]
    pub items: Vec<SlotItem>,
    #[serde(default)]
    pub version: u64,
}

impl ScheduleEntry {
    pub fn is_locked(&self) -> bool {
        self.status == SlotStatus::Cancelled
    }

    pub fn item(&self, key: &str) -> Option<&SlotItem> {
        self.items.iter().find(|item| item.key == key)
    }
}
