// JSON-file repositories
//
// Each store is a plain JSON document on disk, small enough that reading it
// whole per operation is cheaper than running a database. An internal mutex
// serializes every read-modify-write, which is what makes
// `create_if_absent` atomic and the schedule's version check race-free
// within one process.

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;

use backend_domain::ports::{
    CatalogRepository, CreateOutcome, ScheduleRepository, TemplateRepository,
};
use backend_domain::{
    CatalogItem, DateId, ScheduleEntry, SlotTemplate, SlotType, StorageError,
};

async fn read_vec<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    match fs::read_to_string(path).await {
        Ok(content) => {
            serde_json::from_str(&content).map_err(|err| StorageError::Other(err.into()))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(StorageError::Unavailable(err.to_string())),
    }
}

async fn write_vec<T: Serialize>(path: &Path, values: &[T]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        }
    }
    let content =
        serde_json::to_string_pretty(values).map_err(|err| StorageError::Other(err.into()))?;
    fs::write(path, content)
        .await
        .map_err(|err| StorageError::Unavailable(err.to_string()))
}

pub struct JsonCatalogRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepository {
    async fn get_by_key(&self, key: &str) -> Result<Option<CatalogItem>, StorageError> {
        let items: Vec<CatalogItem> = read_vec(&self.path).await?;
        Ok(items.into_iter().find(|item| item.key == key))
    }

    async fn list_all(&self) -> Result<Vec<CatalogItem>, StorageError> {
        let mut items: Vec<CatalogItem> = read_vec(&self.path).await?;
        items.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(items)
    }

    async fn list_enabled(&self) -> Result<Vec<CatalogItem>, StorageError> {
        let mut items = self.list_all().await?;
        items.retain(|item| item.enabled);
        Ok(items)
    }

    async fn upsert(&self, item: CatalogItem) -> Result<CatalogItem, StorageError> {
        let _guard = self.lock.lock().await;
        let mut items: Vec<CatalogItem> = read_vec(&self.path).await?;
        match items.iter_mut().find(|stored| stored.key == item.key) {
            Some(stored) => *stored = item.clone(),
            None => items.push(item.clone()),
        }
        items.sort_by(|a, b| a.key.cmp(&b.key));
        write_vec(&self.path, &items).await?;
        Ok(item)
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        let _guard = self.lock.lock().await;
        let mut items: Vec<CatalogItem> = read_vec(&self.path).await?;
        let before = items.len();
        items.retain(|item| item.key != key);
        if items.len() == before {
            return Ok(false);
        }
        write_vec(&self.path, &items).await?;
        Ok(true)
    }
}

pub struct JsonTemplateRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonTemplateRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl TemplateRepository for JsonTemplateRepository {
    async fn get(&self, slot_type: SlotType) -> Result<Option<SlotTemplate>, StorageError> {
        let templates: Vec<SlotTemplate> = read_vec(&self.path).await?;
        Ok(templates
            .into_iter()
            .find(|template| template.slot_type == slot_type))
    }

    async fn list(&self) -> Result<Vec<SlotTemplate>, StorageError> {
        read_vec(&self.path).await
    }

    async fn upsert(&self, template: SlotTemplate) -> Result<SlotTemplate, StorageError> {
        let _guard = self.lock.lock().await;
        let mut templates: Vec<SlotTemplate> = read_vec(&self.path).await?;
        match templates
            .iter_mut()
            .find(|stored| stored.slot_type == template.slot_type)
        {
            Some(stored) => *stored = template.clone(),
            None => templates.push(template.clone()),
        }
        write_vec(&self.path, &templates).await?;
        Ok(template)
    }

    async fn delete(&self, slot_type: SlotType) -> Result<bool, StorageError> {
        let _guard = self.lock.lock().await;
        let mut templates: Vec<SlotTemplate> = read_vec(&self.path).await?;
        let before = templates.len();
        templates.retain(|template| template.slot_type != slot_type);
        if templates.len() == before {
            return Ok(false);
        }
        write_vec(&self.path, &templates).await?;
        Ok(true)
    }
}

/// One JSON file per calendar day under `schedule_dir`.
pub struct JsonScheduleRepository {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonScheduleRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    fn day_path(&self, date_id: &DateId) -> PathBuf {
        self.dir.join(format!("{}.json", date_id))
    }
}

#[async_trait]
impl ScheduleRepository for JsonScheduleRepository {
    async fn create_if_absent(&self, entry: ScheduleEntry) -> Result<CreateOutcome, StorageError> {
        let _guard = self.lock.lock().await;
        let path = self.day_path(&entry.date_id);
        let mut entries: Vec<ScheduleEntry> = read_vec(&path).await?;
        if let Some(existing) = entries
            .iter()
            .find(|stored| stored.slot_type == entry.slot_type)
        {
            return Ok(CreateOutcome::Existing(existing.clone()));
        }
        entries.push(entry.clone());
        write_vec(&path, &entries).await?;
        Ok(CreateOutcome::Created(entry))
    }

    async fn load(
        &self,
        date_id: &DateId,
        slot_type: SlotType,
    ) -> Result<Option<ScheduleEntry>, StorageError> {
        let entries: Vec<ScheduleEntry> = read_vec(&self.day_path(date_id)).await?;
        Ok(entries
            .into_iter()
            .find(|entry| entry.slot_type == slot_type))
    }

    async fn list_day(&self, date_id: &DateId) -> Result<Vec<ScheduleEntry>, StorageError> {
        read_vec(&self.day_path(date_id)).await
    }

    async fn save(&self, mut entry: ScheduleEntry) -> Result<ScheduleEntry, StorageError> {
        let _guard = self.lock.lock().await;
        let path = self.day_path(&entry.date_id);
        let mut entries: Vec<ScheduleEntry> = read_vec(&path).await?;
        let stored = entries
            .iter_mut()
            .find(|stored| stored.slot_type == entry.slot_type)
            .ok_or_else(|| {
                StorageError::Other(anyhow!(
                    "no entry for {}/{} to save",
                    entry.date_id,
                    entry.slot_type
                ))
            })?;
        if stored.version != entry.version {
            return Err(StorageError::Conflict);
        }
        entry.version += 1;
        *stored = entry.clone();
        write_vec(&path, &entries).await?;
        Ok(entry)
    }
}
