use axum::http::HeaderMap;

use backend_domain::RuntimeConfig;

/// The dashboard sends its shared admin secret in `x-admin-key`. An unset
/// key leaves the API open, which is only sensible in local development.
pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    let Some(admin_key) = &config.admin_key else {
        return true;
    };
    headers
        .get("x-admin-key")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim() == admin_key)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use std::collections::HashMap;

    fn config(admin_key: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            admin_key: admin_key.map(str::to_string),
            base_asset_url: String::new(),
            utc_offset_minutes: 0,
            default_stock: 10,
            catalog_path: String::new(),
            templates_path: String::new(),
            schedule_dir: String::new(),
            rarity_folders: HashMap::new(),
            max_body_bytes: 1,
            request_timeout_seconds: 1,
        }
    }

    #[test]
    fn unset_key_is_open() {
        assert!(authorize(&config(None), &HeaderMap::new()));
    }

    #[test]
    fn wrong_or_missing_header_is_rejected() {
        let config = config(Some("secret"));
        assert!(!authorize(&config, &HeaderMap::new()));

        let mut headers = HeaderMap::new();
        headers.insert("x-admin-key", HeaderValue::from_static("nope"));
        assert!(!authorize(&config, &headers));

        headers.insert("x-admin-key", HeaderValue::from_static("secret"));
        assert!(authorize(&config, &headers));
    }
}
