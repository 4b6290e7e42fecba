use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use backend_domain::{lifecycle, merge_engine, DateId, ScheduleEntry, SlotType};

use crate::commands::sync_commands::fetch_catalog;
use crate::{AppError, AppState};

/// Full desired membership for a slot, as the editing UI resubmits it.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeRequest {
    pub keys: Vec<String>,
    /// Stock given to newly added items; falls back to the configured
    /// default (10) when unset.
    pub default_stock: Option<u32>,
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}

/// Replace a slot's item membership, preserving per-slot overrides on
/// items that stay. Single read-modify-write; a stale save surfaces as
/// `Conflict` instead of silently overwriting.
pub async fn merge_items(
    state: &AppState,
    date_id: &DateId,
    slot_type: SlotType,
    request: MergeRequest,
) -> Result<ScheduleEntry, AppError> {
    let mut entry = load_entry(state, date_id, slot_type).await?;

    let catalog = fetch_catalog(state, &request.keys).await?;
    let default_stock = request.default_stock.unwrap_or(state.config.default_stock);
    entry.items = merge_engine::merge_items(
        &entry,
        &request.keys,
        &catalog,
        &state.resolver,
        default_stock,
    )?;

    if let Some(name) = request.name {
        entry.name = name;
    }
    if let Some(name_ar) = request.name_ar {
        entry.name_ar = name_ar;
    }
    match (request.start_at, request.end_at) {
        (Some(start_at), Some(end_at)) => lifecycle::set_window(&mut entry, start_at, end_at)?,
        (None, None) => {}
        _ => {
            return Err(AppError::BadRequest(
                "start_at and end_at must be supplied together".to_string(),
            ))
        }
    }

    let saved = save_with_metrics(state, entry).await?;
    state.metrics.record_merge();
    info!(date_id = %date_id, slot = %slot_type, items = saved.items.len(), "merged slot items");
    Ok(saved)
}

/// Adjust remaining stock of one item already in the slot.
pub async fn set_stock(
    state: &AppState,
    date_id: &DateId,
    slot_type: SlotType,
    key: &str,
    new_stock: u32,
) -> Result<ScheduleEntry, AppError> {
    let mut entry = load_entry(state, date_id, slot_type).await?;
    merge_engine::set_stock(&mut entry, key, new_stock)?;
    save_with_metrics(state, entry).await
}

pub(crate) async fn load_entry(
    state: &AppState,
    date_id: &DateId,
    slot_type: SlotType,
) -> Result<ScheduleEntry, AppError> {
    state
        .schedule_repo
        .load(date_id, slot_type)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("schedule entry {}/{}", date_id, slot_type)))
}

pub(crate) async fn save_with_metrics(
    state: &AppState,
    entry: ScheduleEntry,
) -> Result<ScheduleEntry, AppError> {
    match state.schedule_repo.save(entry).await {
        Ok(saved) => Ok(saved),
        Err(err) => {
            let app_err = AppError::from(err);
            if matches!(app_err, AppError::Conflict(_)) {
                state.metrics.record_conflict();
            }
            Err(app_err)
        }
    }
}
