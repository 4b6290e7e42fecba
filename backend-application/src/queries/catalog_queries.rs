use backend_domain::CatalogItem;

use crate::{AppError, AppState};

pub async fn list_items(state: &AppState, enabled_only: bool) -> Result<Vec<CatalogItem>, AppError> {
    let items = if enabled_only {
        state.catalog_repo.list_enabled().await?
    } else {
        state.catalog_repo.list_all().await?
    };
    Ok(items)
}

pub async fn get_item(state: &AppState, key: &str) -> Result<CatalogItem, AppError> {
    state
        .catalog_repo
        .get_by_key(key)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("catalog item {}", key)))
}

/// Asset resolution probe used by the dashboard to preview what an item
/// will render as. Pure, never fails.
pub fn resolve_asset(
    state: &AppState,
    rarity: &str,
    icon: Option<&str>,
    key: &str,
    explicit: Option<&str>,
) -> String {
    state.resolver.resolve(rarity, icon, key, explicit)
}
