use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use backend_application::commands::catalog_commands;
use backend_application::queries::catalog_queries;
use backend_application::AppState;
use backend_domain::CatalogItem;

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(Deserialize)]
pub struct ListItemsQuery {
    pub enabled: Option<bool>,
}

#[derive(Serialize)]
pub struct ItemsResponse {
    pub items: Vec<CatalogItem>,
}

pub async fn list_items(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<ItemsResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let items = catalog_queries::list_items(&state, query.enabled.unwrap_or(false)).await?;
    Ok(Json(ItemsResponse { items }))
}

pub async fn get_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Result<Json<CatalogItem>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(catalog_queries::get_item(&state, &key).await?))
}

pub async fn create_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(item): Json<CatalogItem>,
) -> Result<Json<CatalogItem>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(catalog_commands::upsert_item(&state, item).await?))
}

pub async fn update_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
    Json(mut item): Json<CatalogItem>,
) -> Result<Json<CatalogItem>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    // The path segment is authoritative for which record is replaced.
    item.key = key;
    Ok(Json(catalog_commands::upsert_item(&state, item).await?))
}

pub async fn delete_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Result<axum::http::StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    catalog_commands::delete_item(&state, &key).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ResolveAssetQuery {
    pub rarity: String,
    pub icon: Option<String>,
    pub key: Option<String>,
    pub explicit: Option<String>,
}

#[derive(Serialize)]
pub struct ResolveAssetResponse {
    pub url: String,
}

pub async fn resolve_asset(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ResolveAssetQuery>,
) -> Result<Json<ResolveAssetResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let url = catalog_queries::resolve_asset(
        &state,
        &query.rarity,
        query.icon.as_deref(),
        query.key.as_deref().unwrap_or(""),
        query.explicit.as_deref(),
    );
    Ok(Json(ResolveAssetResponse { url }))
}
