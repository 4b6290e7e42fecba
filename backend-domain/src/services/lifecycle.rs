// Slot lifecycle rules

use chrono::{DateTime, Utc};

use crate::entities::ScheduleEntry;
use crate::errors::DomainError;
use crate::value_objects::SlotStatus;

/// Replace the entry's visibility window. Rejected on cancelled entries
/// and whenever the window would be empty or inverted.
pub fn set_window(
    entry: &mut ScheduleEntry,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
) -> Result<(), DomainError> {
    if entry.is_locked() {
        return Err(DomainError::EntryLocked);
    }
    if end_at <= start_at {
        return Err(DomainError::InvalidWindow);
    }
    entry.start_at = start_at;
    entry.end_at = end_at;
    Ok(())
}

/// Advance the entry's status along the allowed transition table.
pub fn transition(entry: &mut ScheduleEntry, new_status: SlotStatus) -> Result<(), DomainError> {
    if !entry.status.can_transition_to(new_status) {
        return Err(DomainError::InvalidTransition {
            from: entry.status,
            to: new_status,
        });
    }
    entry.status = new_status;
    Ok(())
}
