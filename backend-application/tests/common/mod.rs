// In-memory port fakes for exercising commands end to end.
#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use backend_application::{AppState, Metrics};
use backend_domain::ports::{
    CatalogRepository, CreateOutcome, ScheduleRepository, TemplateRepository,
};
use backend_domain::{
    AssetResolver, CatalogItem, DateId, RuntimeConfig, ScheduleEntry, SlotTemplate, SlotType,
    StorageError,
};

#[derive(Default)]
pub struct MemoryCatalog {
    items: Mutex<BTreeMap<String, CatalogItem>>,
}

#[async_trait]
impl CatalogRepository for MemoryCatalog {
    async fn get_by_key(&self, key: &str) -> Result<Option<CatalogItem>, StorageError> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn list_all(&self) -> Result<Vec<CatalogItem>, StorageError> {
        Ok(self.items.lock().await.values().cloned().collect())
    }

    async fn list_enabled(&self) -> Result<Vec<CatalogItem>, StorageError> {
        Ok(self
            .items
            .lock()
            .await
            .values()
            .filter(|item| item.enabled)
            .cloned()
            .collect())
    }

    async fn upsert(&self, item: CatalogItem) -> Result<CatalogItem, StorageError> {
        self.items
            .lock()
            .await
            .insert(item.key.clone(), item.clone());
        Ok(item)
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.items.lock().await.remove(key).is_some())
    }
}

#[derive(Default)]
pub struct MemoryTemplates {
    templates: Mutex<HashMap<SlotType, SlotTemplate>>,
}

#[async_trait]
impl TemplateRepository for MemoryTemplates {
    async fn get(&self, slot_type: SlotType) -> Result<Option<SlotTemplate>, StorageError> {
        Ok(self.templates.lock().await.get(&slot_type).cloned())
    }

    async fn list(&self) -> Result<Vec<SlotTemplate>, StorageError> {
        Ok(self.templates.lock().await.values().cloned().collect())
    }

    async fn upsert(&self, template: SlotTemplate) -> Result<SlotTemplate, StorageError> {
        self.templates
            .lock()
            .await
            .insert(template.slot_type, template.clone());
        Ok(template)
    }

    async fn delete(&self, slot_type: SlotType) -> Result<bool, StorageError> {
        Ok(self.templates.lock().await.remove(&slot_type).is_some())
    }
}

#[derive(Default)]
pub struct MemorySchedule {
    entries: Mutex<HashMap<(String, SlotType), ScheduleEntry>>,
}

#[async_trait]
impl ScheduleRepository for MemorySchedule {
    async fn create_if_absent(&self, entry: ScheduleEntry) -> Result<CreateOutcome, StorageError> {
        let mut entries = self.entries.lock().await;
        let key = (entry.date_id.to_string(), entry.slot_type);
        if let Some(existing) = entries.get(&key) {
            return Ok(CreateOutcome::Existing(existing.clone()));
        }
        entries.insert(key, entry.clone());
        Ok(CreateOutcome::Created(entry))
    }

    async fn load(
        &self,
        date_id: &DateId,
        slot_type: SlotType,
    ) -> Result<Option<ScheduleEntry>, StorageError> {
        Ok(self
            .entries
            .lock()
            .await
            .get(&(date_id.to_string(), slot_type))
            .cloned())
    }

    async fn list_day(&self, date_id: &DateId) -> Result<Vec<ScheduleEntry>, StorageError> {
        let wanted = date_id.to_string();
        Ok(self
            .entries
            .lock()
            .await
            .values()
            .filter(|entry| entry.date_id.to_string() == wanted)
            .cloned()
            .collect())
    }

    async fn save(&self, mut entry: ScheduleEntry) -> Result<ScheduleEntry, StorageError> {
        let mut entries = self.entries.lock().await;
        let key = (entry.date_id.to_string(), entry.slot_type);
        let stored = entries
            .get(&key)
            .ok_or_else(|| StorageError::Other(anyhow::anyhow!("save before create")))?;
        if stored.version != entry.version {
            return Err(StorageError::Conflict);
        }
        entry.version += 1;
        entries.insert(key, entry.clone());
        Ok(entry)
    }
}

pub fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        admin_key: None,
        base_asset_url: "http://localhost:4000".to_string(),
        utc_offset_minutes: 180,
        default_stock: 10,
        catalog_path: String::new(),
        templates_path: String::new(),
        schedule_dir: String::new(),
        rarity_folders: HashMap::new(),
        max_body_bytes: 1024 * 1024,
        request_timeout_seconds: 5,
    }
}

pub fn state_with(
    items: Vec<CatalogItem>,
    templates: Vec<SlotTemplate>,
) -> (AppState, Arc<MemorySchedule>) {
    let catalog = MemoryCatalog::default();
    let template_repo = MemoryTemplates::default();
    {
        // Nothing else holds these mutexes yet.
        let mut guard = catalog.items.try_lock().expect("unused catalog lock");
        for item in items {
            guard.insert(item.key.clone(), item);
        }
        let mut guard = template_repo.templates.try_lock().expect("unused template lock");
        for template in templates {
            guard.insert(template.slot_type, template);
        }
    }

    let schedule = Arc::new(MemorySchedule::default());
    let config = test_config();
    let resolver = AssetResolver::new(&config.base_asset_url, &config.rarity_folders);
    let state = AppState {
        config,
        catalog_repo: Arc::new(catalog),
        template_repo: Arc::new(template_repo),
        schedule_repo: schedule.clone(),
        resolver: Arc::new(resolver),
        metrics: Arc::new(Metrics::default()),
    };
    (state, schedule)
}

pub fn item(key: &str, price: u32) -> CatalogItem {
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

pub fn template(slot_type: SlotType, default_item_keys: &[&str]) -> SlotTemplate {
    SlotTemplate {
        slot_type,
        name: format!("Qafala {}", slot_type),
        name_ar: String::new(),
        background_url: String::new(),
        default_item_keys: default_item_keys.iter().map(|k| k.to_string()).collect(),
        active: true,
        start_hour: Some(8),
        end_hour: Some(12),
        duration_minutes: None,
    }
}
