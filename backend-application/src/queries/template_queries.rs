use backend_domain::{SlotTemplate, SlotType};

use crate::{AppError, AppState};

pub async fn list_templates(state: &AppState) -> Result<Vec<SlotTemplate>, AppError> {
    Ok(state.template_repo.list().await?)
}

pub async fn get_template(state: &AppState, slot_type: SlotType) -> Result<SlotTemplate, AppError> {
    state
        .template_repo
        .get(slot_type)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("template {}", slot_type)))
}
