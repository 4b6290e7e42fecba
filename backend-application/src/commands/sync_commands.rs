use std::collections::HashMap;

use anyhow::anyhow;
use tracing::{debug, info};

use backend_domain::{
    merge_engine, slot_sync, CatalogItem, CreateOutcome, DateId, ScheduleEntry, SlotType,
    StorageError,
};

use crate::{AppError, AppState};

/// Ensure one schedule entry exists per slot type for the given day.
///
/// Idempotent: entries that already exist are returned untouched, even if
/// their template changed since materialization — administrators edit the
/// entry directly for that. Safe under concurrent invocation: the storage
/// port's create-if-absent decides the winner and the loser adopts it.
pub async fn sync_day(state: &AppState, date_id: &DateId) -> Result<Vec<ScheduleEntry>, AppError> {
    state.metrics.record_sync();
    let mut entries = Vec::with_capacity(SlotType::ALL.len());
    let mut created = 0usize;

    for slot_type in SlotType::ALL {
        if let Some(existing) = state.schedule_repo.load(date_id, slot_type).await? {
            entries.push(existing);
            continue;
        }

        let template = state.template_repo.get(slot_type).await?;
        let mut entry = slot_sync::materialize_entry(
            slot_type,
            template.as_ref(),
            date_id,
            state.config.utc_offset_minutes,
        )?;

        // Seed default items through the same merge path hand edits use.
        // Inactive templates still pin the window but seed nothing.
        let default_keys: Vec<String> = template
            .as_ref()
            .filter(|t| t.active)
            .map(|t| t.default_item_keys.clone())
            .unwrap_or_default();
        if !default_keys.is_empty() {
            let catalog = fetch_catalog(state, &default_keys).await?;
            entry.items = merge_engine::merge_items(
                &entry,
                &default_keys,
                &catalog,
                &state.resolver,
                state.config.default_stock,
            )?;
        }

        match state.schedule_repo.create_if_absent(entry).await {
            Ok(CreateOutcome::Created(entry)) => {
                info!(date_id = %date_id, slot = %slot_type, "materialized schedule entry");
                created += 1;
                entries.push(entry);
            }
            Ok(CreateOutcome::Existing(entry)) => {
                debug!(date_id = %date_id, slot = %slot_type, "entry already present");
                entries.push(entry);
            }
            Err(StorageError::Duplicate { .. }) => {
                // Lost the race: someone else materialized it between our
                // load and create. Their entry wins.
                let winner = state
                    .schedule_repo
                    .load(date_id, slot_type)
                    .await?
                    .ok_or_else(|| {
                        AppError::Internal(anyhow!(
                            "entry for {}/{} vanished after duplicate create",
                            date_id,
                            slot_type
                        ))
                    })?;
                entries.push(winner);
            }
            Err(err) => return Err(err.into()),
        }
    }

    state.metrics.record_entries_created(created);
    Ok(entries)
}

pub(crate) async fn fetch_catalog(
    state: &AppState,
    keys: &[String],
) -> Result<HashMap<String, CatalogItem>, AppError> {
    let mut catalog = HashMap::with_capacity(keys.len());
    for key in keys {
        let key = key.trim();
        if key.is_empty() || catalog.contains_key(key) {
            continue;
        }
        if let Some(item) = state.catalog_repo.get_by_key(key).await? {
            catalog.insert(item.key.clone(), item);
        }
    }
    Ok(catalog)
}
