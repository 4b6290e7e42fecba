use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use backend_application::commands::template_commands;
use backend_application::queries::template_queries;
use backend_application::AppState;
use backend_domain::SlotTemplate;

use crate::error::HttpError;
use crate::handlers::parse_slot;
use crate::middleware::authorize;

#[derive(Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<SlotTemplate>,
}

pub async fn list_templates(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TemplatesResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let templates = template_queries::list_templates(&state).await?;
    Ok(Json(TemplatesResponse { templates }))
}

pub async fn get_template(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slot): Path<String>,
) -> Result<Json<SlotTemplate>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let slot_type = parse_slot(&slot)?;
    Ok(Json(template_queries::get_template(&state, slot_type).await?))
}

pub async fn upsert_template(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(template): Json<SlotTemplate>,
) -> Result<Json<SlotTemplate>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(
        template_commands::upsert_template(&state, template).await?,
    ))
}

pub async fn delete_template(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slot): Path<String>,
) -> Result<axum::http::StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let slot_type = parse_slot(&slot)?;
    template_commands::delete_template(&state, slot_type).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}
