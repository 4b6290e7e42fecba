// Slot item merge engine

use std::collections::{HashMap, HashSet};

use crate::entities::{CatalogItem, ScheduleEntry, SlotItem};
use crate::errors::DomainError;
use crate::services::AssetResolver;

/// Reconciles a slot's item list against a requested membership set.
///
/// Membership is a full replace: keys absent from `requested` drop out.
/// Keys already in the slot keep their per-slot overrides (stock,
/// initial stock, price and points snapshots) untouched; only an empty
/// asset path is refreshed. New keys are snapshotted from the catalog.
pub fn merge_items(
    entry: &ScheduleEntry,
    requested: &[String],
    catalog: &HashMap<String, CatalogItem>,
    resolver: &AssetResolver,
    default_stock: u32,
) -> Result<Vec<SlotItem>, DomainError> {
    if entry.is_locked() {
        return Err(DomainError::EntryLocked);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Vec::with_capacity(requested.len());
    for key in requested {
        let key = key.trim();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }

        if let Some(existing) = entry.item(key) {
            let mut kept = existing.clone();
            if kept.image_url.is_empty() {
                if let Some(item) = catalog.get(key) {
                    kept.image_url = resolver.resolve_item(item);
                }
            }
            merged.push(kept);
            continue;
        }

        let item = catalog
            .get(key)
            .filter(|item| item.enabled)
            .ok_or_else(|| DomainError::UnknownItem(key.to_string()))?;
        merged.push(SlotItem::from_catalog(
            item,
            default_stock,
            resolver.resolve_item(item),
        ));
    }
    Ok(merged)
}

/// Stock-edit-only path: adjusts remaining stock of an item already in the
/// slot, bounded by its immutable `initial_stock`.
pub fn set_stock(entry: &mut ScheduleEntry, key: &str, new_stock: u32) -> Result<(), DomainError> {
    if entry.is_locked() {
        return Err(DomainError::EntryLocked);
    }
    let item = entry
        .items
        .iter_mut()
        .find(|item| item.key == key)
        .ok_or_else(|| DomainError::UnknownItem(key.to_string()))?;
    if new_stock > item.initial_stock {
        return Err(DomainError::InvalidStock {
            requested: new_stock,
            initial: item.initial_stock,
        });
    }
    item.stock = new_stock;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{DateId, SlotStatus, SlotType};
    use chrono::{Duration, Utc};

    fn catalog_item(key: &str, price: u32) -> CatalogItem {
        CatalogItem {
            key: key.to_string(),
            title: key.to_uppercase(),
            rarity: "common".to_string(),
            icon: Some(key.to_string()),
            price_dinar: price,
            gives_points: price / 2,
            ..CatalogItem::default()
        }
    }

    fn catalog(items: &[CatalogItem]) -> HashMap<String, CatalogItem> {
        items
            .iter()
            .map(|item| (item.key.clone(), item.clone()))
            .collect()
    }

    fn resolver() -> AssetResolver {
        AssetResolver::new("http://localhost:4000", &HashMap::new())
    }

    fn entry_with(items: Vec<SlotItem>) -> ScheduleEntry {
        let start = Utc::now();
        ScheduleEntry {
            date_id: "2026-08-27".parse::<DateId>().unwrap(),
            slot_type: SlotType::Morning,
            name: String::new(),
            name_ar: String::new(),
            background_url: String::new(),
            start_at: start,
            end_at: start + Duration::hours(4),
            status: SlotStatus::Scheduled,
            items,
            version: 0,
        }
    }

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn new_keys_get_catalog_defaults() {
        let entry = entry_with(vec![]);
        let catalog = catalog(&[catalog_item("dagger", 40)]);
        let merged = merge_items(&entry, &keys(&["dagger"]), &catalog, &resolver(), 10).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].stock, 10);
        assert_eq!(merged[0].initial_stock, 10);
        assert_eq!(merged[0].price_dinar, 40);
        assert_eq!(merged[0].gives_points, 20);
        assert_eq!(merged[0].image_url, "/assets/common/dagger.png");
    }

    #[test]
    fn existing_items_keep_overrides() {
        let catalog = catalog(&[catalog_item("dagger", 99), catalog_item("shield", 30)]);
        let mut existing = SlotItem::from_catalog(&catalog["dagger"], 10, "custom.png".into());
        existing.stock = 3;
        existing.price_dinar = 40; // admin-edited snapshot, catalog now says 99
        let entry = entry_with(vec![existing]);

        let merged = merge_items(
            &entry,
            &keys(&["dagger", "shield"]),
            &catalog,
            &resolver(),
            10,
        )
        .unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].key, "dagger");
        assert_eq!(merged[0].stock, 3);
        assert_eq!(merged[0].initial_stock, 10);
        assert_eq!(merged[0].price_dinar, 40);
        assert_eq!(merged[0].image_url, "custom.png");
        assert_eq!(merged[1].key, "shield");
        assert_eq!(merged[1].stock, 10);
    }

    #[test]
    fn keys_absent_from_request_are_dropped() {
        let catalog = catalog(&[catalog_item("dagger", 40), catalog_item("shield", 30)]);
        let entry = entry_with(vec![
            SlotItem::from_catalog(&catalog["dagger"], 10, String::new()),
            SlotItem::from_catalog(&catalog["shield"], 10, String::new()),
        ]);
        let merged = merge_items(&entry, &keys(&["shield"]), &catalog, &resolver(), 10).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].key, "shield");
    }

    #[test]
    fn duplicate_requested_keys_collapse_keeping_first_order() {
        let catalog = catalog(&[catalog_item("a", 1), catalog_item("b", 2)]);
        let entry = entry_with(vec![]);
        let merged = merge_items(
            &entry,
            &keys(&["b", "a", "b", "a"]),
            &catalog,
            &resolver(),
            10,
        )
        .unwrap();
        let order: Vec<&str> = merged.iter().map(|item| item.key.as_str()).collect();
        assert_eq!(order, ["b", "a"]);
    }

    #[test]
    fn empty_asset_path_is_refreshed_but_overrides_are_not() {
        let catalog = catalog(&[catalog_item("dagger", 40)]);
        let mut existing = SlotItem::from_catalog(&catalog["dagger"], 10, String::new());
        existing.stock = 5;
        let entry = entry_with(vec![existing]);
        let merged = merge_items(&entry, &keys(&["dagger"]), &catalog, &resolver(), 10).unwrap();
        assert_eq!(merged[0].image_url, "/assets/common/dagger.png");
        assert_eq!(merged[0].stock, 5);
    }

    #[test]
    fn unknown_item_is_rejected() {
        let entry = entry_with(vec![]);
        let err = merge_items(&entry, &keys(&["ghost"]), &HashMap::new(), &resolver(), 10)
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownItem(key) if key == "ghost"));
    }

    #[test]
    fn disabled_item_is_rejected() {
        let mut item = catalog_item("dagger", 40);
        item.enabled = false;
        let entry = entry_with(vec![]);
        let err = merge_items(
            &entry,
            &keys(&["dagger"]),
            &catalog(&[item]),
            &resolver(),
            10,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::UnknownItem(_)));
    }

    #[test]
    fn cancelled_entry_rejects_merges() {
        let mut entry = entry_with(vec![]);
        entry.status = SlotStatus::Cancelled;
        let err = merge_items(&entry, &keys(&[]), &HashMap::new(), &resolver(), 10).unwrap_err();
        assert!(matches!(err, DomainError::EntryLocked));
    }

    #[test]
    fn set_stock_enforces_initial_stock_bound() {
        let catalog = catalog(&[catalog_item("dagger", 40)]);
        let mut entry = entry_with(vec![SlotItem::from_catalog(
            &catalog["dagger"],
            10,
            String::new(),
        )]);
        let err = set_stock(&mut entry, "dagger", 11).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidStock {
                requested: 11,
                initial: 10
            }
        ));
        set_stock(&mut entry, "dagger", 0).unwrap();
        assert_eq!(entry.items[0].stock, 0);
        assert_eq!(entry.items[0].initial_stock, 10);
    }

    #[test]
    fn set_stock_on_missing_item_fails() {
        let mut entry = entry_with(vec![]);
        assert!(matches!(
            set_stock(&mut entry, "ghost", 1),
            Err(DomainError::UnknownItem(_))
        ));
    }

    #[test]
    fn set_stock_on_cancelled_entry_fails() {
        let catalog = catalog(&[catalog_item("dagger", 40)]);
        let mut entry = entry_with(vec![SlotItem::from_catalog(
            &catalog["dagger"],
            10,
            String::new(),
        )]);
        entry.status = SlotStatus::Cancelled;
        assert!(matches!(
            set_stock(&mut entry, "dagger", 1),
            Err(DomainError::EntryLocked)
        ));
    }
}
