// Runtime configuration shared across layers

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Validated configuration handed to the application layer. Built by the
/// infrastructure config loader; the domain never reads the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub admin_key: Option<String>,
    pub base_asset_url: String,
    /// Offset of the deployment's calendar timezone from UTC.
    pub utc_offset_minutes: i32,
    /// Stock given to newly merged items when the caller supplies none.
    pub default_stock: u32,
    pub catalog_path: String,
    pub templates_path: String,
    pub schedule_dir: String,
    /// Overrides for the rarity -> asset folder table.
    pub rarity_folders: HashMap<String, String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}
