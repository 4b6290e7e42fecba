pub mod catalog_handlers;
pub mod ops_handlers;
pub mod schedule_handlers;
pub mod template_handlers;

use std::str::FromStr;

use backend_domain::{DateId, SlotType};

use crate::error::HttpError;

pub(crate) fn parse_date(raw: &str) -> Result<DateId, HttpError> {
    DateId::from_str(raw).map_err(|err| HttpError::BadRequest(err.to_string()))
}

pub(crate) fn parse_slot(raw: &str) -> Result<SlotType, HttpError> {
    SlotType::from_str(raw).map_err(HttpError::BadRequest)
}
