// Domain error taxonomy

use thiserror::Error;

use crate::value_objects::{SlotStatus, SlotType};

/// Validation and rule failures. Every variant carries the specific reason
/// so callers can surface it to the administrator instead of a generic
/// "failed".
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("unknown or disabled catalog item '{0}'")]
    UnknownItem(String),
    #[error("no template configured for slot type '{0}'")]
    TemplateMissing(SlotType),
    #[error("schedule entry is cancelled and can no longer be edited")]
    EntryLocked,
    #[error("stock {requested} exceeds initial stock {initial}")]
    InvalidStock { requested: u32, initial: u32 },
    #[error("end time must be after start time")]
    InvalidWindow,
    #[error("cannot transition slot from '{from}' to '{to}'")]
    InvalidTransition { from: SlotStatus, to: SlotStatus },
    #[error("duplicate default item key '{0}' in template")]
    DuplicateDefaultKey(String),
    #[error("invalid date id '{0}', expected YYYY-MM-DD")]
    InvalidDateId(String),
    #[error("invalid template hours: {0}")]
    InvalidHours(String),
}

/// Failures at the storage ports. `Unavailable` is retryable by the caller;
/// `Duplicate` is recovered locally by re-reading the winning entry;
/// `Conflict` means a stale read-modify-write was rejected.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("schedule entry already exists for {date_id}/{slot_type}")]
    Duplicate { date_id: String, slot_type: SlotType },
    #[error("entry changed since it was loaded, reload and retry")]
    Conflict,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
