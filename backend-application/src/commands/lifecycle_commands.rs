use chrono::{DateTime, Utc};
use tracing::info;

use backend_domain::{lifecycle, DateId, ScheduleEntry, SlotStatus, SlotType};

use crate::commands::item_commands::{load_entry, save_with_metrics};
use crate::{AppError, AppState};

pub async fn set_window(
    state: &AppState,
    date_id: &DateId,
    slot_type: SlotType,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
) -> Result<ScheduleEntry, AppError> {
    let mut entry = load_entry(state, date_id, slot_type).await?;
    lifecycle::set_window(&mut entry, start_at, end_at)?;
    save_with_metrics(state, entry).await
}

pub async fn transition(
    state: &AppState,
    date_id: &DateId,
    slot_type: SlotType,
    new_status: SlotStatus,
) -> Result<ScheduleEntry, AppError> {
    let mut entry = load_entry(state, date_id, slot_type).await?;
    let previous = entry.status;
    lifecycle::transition(&mut entry, new_status)?;
    let saved = save_with_metrics(state, entry).await?;
    info!(date_id = %date_id, slot = %slot_type, from = %previous, to = %new_status, "slot status changed");
    Ok(saved)
}
