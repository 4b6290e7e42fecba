use backend_domain::{CatalogItem, Rarity};

use crate::{AppError, AppState};

/// Catalog admin CRUD. The scheduling core only reads the catalog; these
/// pass-throughs exist for the dashboard's item library pages.
pub async fn upsert_item(state: &AppState, item: CatalogItem) -> Result<CatalogItem, AppError> {
    if item.key.trim().is_empty() {
        return Err(AppError::BadRequest("item key is required".to_string()));
    }
    if Rarity::parse(&item.rarity).is_none() {
        return Err(AppError::BadRequest(format!(
            "unknown rarity '{}'",
            item.rarity
        )));
    }
    Ok(state.catalog_repo.upsert(item).await?)
}

pub async fn delete_item(state: &AppState, key: &str) -> Result<(), AppError> {
    if !state.catalog_repo.delete(key).await? {
        return Err(AppError::NotFound(format!("catalog item {}", key)));
    }
    Ok(())
}
