use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use backend_application::commands::item_commands::{self, MergeRequest};
use backend_application::commands::{lifecycle_commands, sync_commands};
use backend_application::queries::schedule_queries;
use backend_application::AppState;
use backend_domain::{ScheduleEntry, SlotStatus};

use crate::error::HttpError;
use crate::handlers::{parse_date, parse_slot};
use crate::middleware::authorize;

#[derive(Serialize)]
pub struct DayResponse {
    pub entries: Vec<ScheduleEntry>,
}

pub async fn sync_day(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let date_id = parse_date(&date)?;
    let entries = sync_commands::sync_day(&state, &date_id).await?;
    Ok(Json(DayResponse { entries }))
}

pub async fn get_day(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let date_id = parse_date(&date)?;
    let entries = schedule_queries::get_day(&state, &date_id).await?;
    Ok(Json(DayResponse { entries }))
}

pub async fn merge_items(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((date, slot)): Path<(String, String)>,
    Json(request): Json<MergeRequest>,
) -> Result<Json<ScheduleEntry>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let date_id = parse_date(&date)?;
    let slot_type = parse_slot(&slot)?;
    let entry = item_commands::merge_items(&state, &date_id, slot_type, request).await?;
    Ok(Json(entry))
}

#[derive(Deserialize)]
pub struct StockRequest {
    pub stock: u32,
}

pub async fn set_stock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((date, slot, key)): Path<(String, String, String)>,
    Json(request): Json<StockRequest>,
) -> Result<Json<ScheduleEntry>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let date_id = parse_date(&date)?;
    let slot_type = parse_slot(&slot)?;
    let entry =
        item_commands::set_stock(&state, &date_id, slot_type, &key, request.stock).await?;
    Ok(Json(entry))
}

#[derive(Deserialize)]
pub struct WindowRequest {
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

pub async fn set_window(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((date, slot)): Path<(String, String)>,
    Json(request): Json<WindowRequest>,
) -> Result<Json<ScheduleEntry>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let date_id = parse_date(&date)?;
    let slot_type = parse_slot(&slot)?;
    let entry = lifecycle_commands::set_window(
        &state,
        &date_id,
        slot_type,
        request.start_at,
        request.end_at,
    )
    .await?;
    Ok(Json(entry))
}

#[derive(Deserialize)]
pub struct TransitionRequest {
    pub status: SlotStatus,
}

pub async fn transition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((date, slot)): Path<(String, String)>,
    Json(request): Json<TransitionRequest>,
) -> Result<Json<ScheduleEntry>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let date_id = parse_date(&date)?;
    let slot_type = parse_slot(&slot)?;
    let entry =
        lifecycle_commands::transition(&state, &date_id, slot_type, request.status).await?;
    Ok(Json(entry))
}
