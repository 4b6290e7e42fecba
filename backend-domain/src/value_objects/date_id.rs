// Calendar day identifier

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A calendar day in the deployment timezone, serialized as `YYYY-MM-DD`.
/// One schedule entry exists per (`DateId`, `SlotType`) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateId(NaiveDate);

impl DateId {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(DateId)
            .map_err(|_| DomainError::InvalidDateId(s.to_string()))
    }
}

impl TryFrom<String> for DateId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map_err(|err: DomainError| err.to_string())
    }
}

impl From<DateId> for String {
    fn from(value: DateId) -> Self {
        value.to_string()
    }
}
