use std::collections::HashSet;

use tracing::info;

use backend_domain::{DomainError, SlotTemplate, SlotType};

use crate::{AppError, AppState};

/// Whole-record template replace. Validates before persisting; template
/// edits never touch entries that were already materialized from it.
pub async fn upsert_template(
    state: &AppState,
    template: SlotTemplate,
) -> Result<SlotTemplate, AppError> {
    if template.name.trim().is_empty() {
        return Err(AppError::BadRequest("template name is required".to_string()));
    }
    for hour in [template.start_hour, template.end_hour].into_iter().flatten() {
        if hour > 24 {
            return Err(DomainError::InvalidHours(format!(
                "hour {} out of range 0..=24",
                hour
            ))
            .into());
        }
    }

    let mut seen = HashSet::new();
    for key in &template.default_item_keys {
        if !seen.insert(key.as_str()) {
            return Err(DomainError::DuplicateDefaultKey(key.clone()).into());
        }
        if state.catalog_repo.get_by_key(key).await?.is_none() {
            return Err(DomainError::UnknownItem(key.clone()).into());
        }
    }

    let saved = state.template_repo.upsert(template).await?;
    info!(slot = %saved.slot_type, defaults = saved.default_item_keys.len(), "template upserted");
    Ok(saved)
}

pub async fn delete_template(state: &AppState, slot_type: SlotType) -> Result<(), AppError> {
    if !state.template_repo.delete(slot_type).await? {
        return Err(AppError::NotFound(format!("template {}", slot_type)));
    }
    Ok(())
}
