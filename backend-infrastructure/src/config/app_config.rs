use std::collections::HashMap;
use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub admin_key: Option<String>,
    pub base_asset_url: String,
    pub utc_offset_minutes: i32,
    pub default_stock: u32,
    pub catalog_path: String,
    pub templates_path: String,
    pub schedule_dir: String,
    pub rarity_folders: HashMap<String, String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:4000".to_string(),
            admin_key: None,
            base_asset_url: "http://127.0.0.1:4000".to_string(),
            utc_offset_minutes: 180,
            default_stock: 10,
            catalog_path: "./data/catalog.json".to_string(),
            templates_path: "./data/templates.json".to_string(),
            schedule_dir: "./data/schedule".to_string(),
            rarity_folders: HashMap::new(),
            max_body_bytes: 2 * 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("QAFALA_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.resolve_paths(base_dir);
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(admin_key) = &self.admin_key {
            if admin_key.trim().is_empty() {
                self.admin_key = None;
            }
        }
        self.base_asset_url = self.base_asset_url.trim().trim_end_matches('/').to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.catalog_path = resolve_path(base, &self.catalog_path);
        self.templates_path = resolve_path(base, &self.templates_path);
        self.schedule_dir = resolve_path(base, &self.schedule_dir);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.base_asset_url.is_empty() {
            return Err(anyhow!("base_asset_url must not be empty"));
        }
        // chrono's FixedOffset limit.
        if self.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(anyhow!("utc_offset_minutes out of range"));
        }
        if self.default_stock == 0 {
            return Err(anyhow!("default_stock must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            admin_key: self.admin_key.clone(),
            base_asset_url: self.base_asset_url.clone(),
            utc_offset_minutes: self.utc_offset_minutes,
            default_stock: self.default_stock,
            catalog_path: self.catalog_path.clone(),
            templates_path: self.templates_path.clone(),
            schedule_dir: self.schedule_dir.clone(),
            rarity_folders: self.rarity_folders.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("QAFALA_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("QAFALA_ADMIN_KEY") {
            self.admin_key = Some(value);
        }
        if let Ok(value) = env::var("QAFALA_BASE_ASSET_URL") {
            self.base_asset_url = value;
        }
        if let Ok(value) = env::var("QAFALA_UTC_OFFSET_MINUTES") {
            self.utc_offset_minutes = value.parse().unwrap_or(self.utc_offset_minutes);
        }
        if let Ok(value) = env::var("QAFALA_DEFAULT_STOCK") {
            self.default_stock = value.parse().unwrap_or(self.default_stock);
        }
        if let Ok(value) = env::var("QAFALA_CATALOG_PATH") {
            self.catalog_path = value;
        }
        if let Ok(value) = env::var("QAFALA_TEMPLATES_PATH") {
            self.templates_path = value;
        }
        if let Ok(value) = env::var("QAFALA_SCHEDULE_DIR") {
            self.schedule_dir = value;
        }
        if let Ok(value) = env::var("QAFALA_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("QAFALA_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clears_blank_admin_key_and_trailing_slash() {
        let mut config = AppConfig {
            admin_key: Some("   ".to_string()),
            base_asset_url: "http://cdn.example.com/".to_string(),
            ..AppConfig::default()
        };
        config.normalize();
        assert_eq!(config.admin_key, None);
        assert_eq!(config.base_asset_url, "http://cdn.example.com");
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.validate().unwrap();

        config.utc_offset_minutes = 24 * 60;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.default_stock = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.bind_addr = "nonsense".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_toml_with_rarity_overrides() {
        let config: AppConfig = toml::from_str(
            r#"
bind_addr = "0.0.0.0:4000"
default_stock = 5

[rarity_folders]
legendary = "legendary"
"#,
        )
        .unwrap();
        assert_eq!(config.default_stock, 5);
        assert_eq!(
            config.rarity_folders.get("legendary").map(String::as_str),
            Some("legendary")
        );
    }
}
