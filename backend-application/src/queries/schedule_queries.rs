use backend_domain::{DateId, ScheduleEntry, SlotType};

use crate::{AppError, AppState};

/// Entries stored for a day, in canonical slot order. Does not materialize
/// anything; use `sync_commands::sync_day` for that.
pub async fn get_day(state: &AppState, date_id: &DateId) -> Result<Vec<ScheduleEntry>, AppError> {
    let mut entries = state.schedule_repo.list_day(date_id).await?;
    entries.sort_by_key(|entry| {
        SlotType::ALL
            .iter()
            .position(|slot| *slot == entry.slot_type)
            .unwrap_or(SlotType::ALL.len())
    });
    Ok(entries)
}

pub async fn get_entry(
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
