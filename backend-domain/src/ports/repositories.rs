use async_trait::async_trait;

use crate::entities::{CatalogItem, ScheduleEntry, SlotTemplate};
use crate::errors::StorageError;
use crate::value_objects::{DateId, SlotType};

/// Outcome of an atomic create-if-absent. Either way the caller gets the
/// entry that now exists in storage.
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    Created(ScheduleEntry),
    Existing(ScheduleEntry),
}

impl CreateOutcome {
    pub fn into_entry(self) -> ScheduleEntry {
        match self {
            CreateOutcome::Created(entry) | CreateOutcome::Existing(entry) => entry,
        }
    }
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_by_key(&self, key: &str) -> Result<Option<CatalogItem>, StorageError>;
    /// All items, stable order by key.
    async fn list_all(&self) -> Result<Vec<CatalogItem>, StorageError>;
    /// Enabled items only, stable order by key.
    async fn list_enabled(&self) -> Result<Vec<CatalogItem>, StorageError>;
    async fn upsert(&self, item: CatalogItem) -> Result<CatalogItem, StorageError>;
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;
}

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn get(&self, slot_type: SlotType) -> Result<Option<SlotTemplate>, StorageError>;
    async fn list(&self) -> Result<Vec<SlotTemplate>, StorageError>;
    /// Whole-record replace, no partial-update semantics.
    async fn upsert(&self, template: SlotTemplate) -> Result<SlotTemplate, StorageError>;
    async fn delete(&self, slot_type: SlotType) -> Result<bool, StorageError>;
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Atomic on the (`date_id`, `slot_type`) uniqueness: concurrent calls
    /// for the same pair yield one `Created` and one `Existing`, never two
    /// stored entries.
    async fn create_if_absent(&self, entry: ScheduleEntry) -> Result<CreateOutcome, StorageError>;
    async fn load(
        &self,
        date_id: &DateId,
        slot_type: SlotType,
    ) -> Result<Option<ScheduleEntry>, StorageError>;
    async fn list_day(&self, date_id: &DateId) -> Result<Vec<ScheduleEntry>, StorageError>;
    /// Persists the entry if its `version` still matches the stored one,
    /// then bumps the version. A stale version surfaces
    /// `StorageError::Conflict`.
    async fn save(&self, entry: ScheduleEntry) -> Result<ScheduleEntry, StorageError>;
}
