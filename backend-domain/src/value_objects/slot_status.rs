// Slot status value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a schedule entry. `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Scheduled,
    Published,
    Cancelled,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Scheduled => "scheduled",
            SlotStatus::Published => "published",
            SlotStatus::Cancelled => "cancelled",
        }
    }

    /// Transition table: scheduled -> published, scheduled -> cancelled,
    /// published -> cancelled. Nothing leaves cancelled.
    pub fn can_transition_to(&self, next: SlotStatus) -> bool {
        matches!(
            (self, next),
            (SlotStatus::Scheduled, SlotStatus::Published)
                | (SlotStatus::Scheduled, SlotStatus::Cancelled)
                | (SlotStatus::Published, SlotStatus::Cancelled)
        )
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(SlotStatus::Scheduled),
            "published" => Ok(SlotStatus::Published),
            "cancelled" => Ok(SlotStatus::Cancelled),
            other => Err(format!("unknown slot status '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_is_terminal() {
        assert!(!SlotStatus::Cancelled.can_transition_to(SlotStatus::Scheduled));
        assert!(!SlotStatus::Cancelled.can_transition_to(SlotStatus::Published));
        assert!(!SlotStatus::Cancelled.can_transition_to(SlotStatus::Cancelled));
    }

    #[test]
    fn forward_transitions_allowed() {
        assert!(SlotStatus::Scheduled.can_transition_to(SlotStatus::Published));
        assert!(SlotStatus::Scheduled.can_transition_to(SlotStatus::Cancelled));
        assert!(SlotStatus::Published.can_transition_to(SlotStatus::Cancelled));
        assert!(!SlotStatus::Published.can_transition_to(SlotStatus::Scheduled));
    }
}
