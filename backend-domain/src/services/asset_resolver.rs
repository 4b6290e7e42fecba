// Display asset resolution

use std::collections::HashMap;

use crate::entities::CatalogItem;

/// Maps an item's rarity/icon metadata to its display-asset locator.
///
/// The rarity -> folder table mirrors the historical asset layout on the
/// CDN, including the misspelled `legandry` and truncated `rar` folders;
/// those names are load-bearing and must not be "fixed" without moving the
/// files. Rarities missing from the table use the rarity string itself as
/// the folder, so new rarities resolve without a deploy.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_url: String,
    folders: HashMap<String, String>,
}

impl AssetResolver {
    pub fn new(base_url: impl Into<String>, overrides: &HashMap<String, String>) -> Self {
        let mut folders = default_rarity_folders();
        for (rarity, folder) in overrides {
            folders.insert(rarity.clone(), folder.clone());
        }
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            folders,
        }
    }

    pub fn resolve_item(&self, item: &CatalogItem) -> String {
        self.resolve(
            &item.rarity,
            item.icon.as_deref(),
            &item.key,
            item.image_url.as_deref(),
        )
    }

    /// Never fails. An item with neither icon nor key yields a path ending
    /// in a bare `.png`; callers render a placeholder for that, the
    /// resolver does not second-guess them.
    pub fn resolve(
        &self,
        rarity: &str,
        icon: Option<&str>,
        key: &str,
        explicit: Option<&str>,
    ) -> String {
        if let Some(explicit) = explicit.map(str::trim).filter(|path| !path.is_empty()) {
            if explicit.starts_with("http://") || explicit.starts_with("https://") {
                return explicit.to_string();
            }
            if explicit.starts_with('/') {
                return format!("{}{}", self.base_url, explicit);
            }
            return format!("{}/{}", self.base_url, explicit);
        }

        let folder = self
            .folders
            .get(rarity)
            .map(String::as_str)
            .unwrap_or(rarity);
        let stem = icon.filter(|icon| !icon.is_empty()).unwrap_or(key);
        format!(
            "/assets/{}/{}.png",
            encode_segment(folder),
            encode_segment(stem)
        )
    }
}

pub fn default_rarity_folders() -> HashMap<String, String> {
    [
        ("legendary", "legandry"),
        ("rare", "rar"),
        ("common", "common"),
        ("epic", "epic"),
        ("barter", "barter"),
    ]
    .into_iter()
    .map(|(rarity, folder)| (rarity.to_string(), folder.to_string()))
    .collect()
}

/// Percent-encode a single path segment. Unreserved characters pass
/// through, everything else (spaces included) is encoded at URL
/// construction time rather than stored pre-encoded.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
