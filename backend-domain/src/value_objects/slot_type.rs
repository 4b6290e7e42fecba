// Slot type value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four fixed daily drop windows. `ALL` is the canonical iteration
/// order used everywhere a day's slots are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Morning,
    Afternoon,
    Night,
    Random,
}

impl SlotType {
    pub const ALL: [SlotType; 4] = [
        SlotType::Morning,
        SlotType::Afternoon,
        SlotType::Night,
        SlotType::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotType::Morning => "morning",
            SlotType::Afternoon => "afternoon",
            SlotType::Night => "night",
            SlotType::Random => "random",
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(SlotType::Morning),
            "afternoon" => Ok(SlotType::Afternoon),
            "night" => Ok(SlotType::Night),
            "random" => Ok(SlotType::Random),
            other => Err(format!("unknown slot type '{}'", other)),
        }
    }
}
