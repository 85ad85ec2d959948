use crate::error::{AdjustmentError, Result};
use crate::models::CropAdjustment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";
pub const CONTENT_FILE: &str = "content.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackManifest {
    pub name: String,
    #[serde(rename = "UniqueID")]
    pub unique_id: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackContent {
    #[serde(default)]
    pub crop_adjustments: Vec<CropAdjustment>,
}

/// A bundle of crop adjustments shipped together in one directory.
#[derive(Debug, Clone)]
pub struct ContentPack {
    pub manifest: PackManifest,
    pub path: PathBuf,
    pub adjustments: Vec<CropAdjustment>,
}

impl ContentPack {
    /// Load a pack from a directory holding `manifest.json` and `content.json`.
    pub fn load(dir: &Path) -> Result<Self> {
        let manifest_path = dir.join(MANIFEST_FILE);
        let content_path = dir.join(CONTENT_FILE);

        for required in [&manifest_path, &content_path] {
            if !required.exists() {
                return Err(AdjustmentError::NotFound(required.display().to_string()));
            }
        }

        let manifest = std::fs::read_to_string(&manifest_path)?;
        let content = std::fs::read_to_string(&content_path)?;

        Self::from_json(&manifest, &content, dir.to_path_buf())
    }

    pub fn from_json(manifest: &str, content: &str, path: PathBuf) -> Result<Self> {
        let manifest: PackManifest = serde_json::from_str(manifest).map_err(|e| {
            AdjustmentError::Config(format!("Invalid manifest in {}: {}", path.display(), e))
        })?;
        let content: PackContent = serde_json::from_str(content).map_err(|e| {
            AdjustmentError::Config(format!("Invalid content in {}: {}", path.display(), e))
        })?;

        Ok(Self {
            manifest,
            path,
            adjustments: content.crop_adjustments,
        })
    }

    pub fn is_pack_dir(dir: &Path) -> bool {
        dir.join(CONTENT_FILE).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "Name": "Winter Greens",
        "Author": "farmhand",
        "Version": "1.2.0",
        "UniqueID": "farmhand.WinterGreens"
    }"#;

    #[test]
    fn from_json_reads_adjustments() {
        let content = r#"{
            "CropAdjustments": [
                { "CropProduceName": "Kale", "CropProduceItemId": "250",
                  "SeasonsToGrowIn": "spring,winter", "SeasonsToProduceIn": "spring" }
            ]
        }"#;

        let pack = ContentPack::from_json(MANIFEST, content, PathBuf::from("packs/winter")).unwrap();
        assert_eq!(pack.manifest.name, "Winter Greens");
        assert_eq!(pack.manifest.unique_id, "farmhand.WinterGreens");
        assert_eq!(pack.adjustments.len(), 1);
        assert_eq!(pack.adjustments[0].crop_produce_item_id, "250");
    }

    #[test]
    fn from_json_accepts_numeric_item_ids() {
        let content = r#"{
            "CropAdjustments": [
                { "CropProduceItemId": 24, "SeasonsToGrowIn": "spring", "SeasonsToProduceIn": "spring" },
                { "CropProduceItemId": "190", "SeasonsToGrowIn": "fall", "SeasonsToProduceIn": "fall" }
            ]
        }"#;

        let pack = ContentPack::from_json(MANIFEST, content, PathBuf::from("packs/mixed")).unwrap();
        assert_eq!(pack.adjustments[0].crop_produce_item_id, "24");
        assert_eq!(pack.adjustments[1].crop_produce_item_id, "190");
    }

    #[test]
    fn from_json_without_adjustments_is_empty() {
        let pack = ContentPack::from_json(MANIFEST, "{}", PathBuf::from("packs/empty")).unwrap();
        assert!(pack.adjustments.is_empty());
    }

    #[test]
    fn from_json_rejects_bad_content() {
        let err = ContentPack::from_json(MANIFEST, "{ not json", PathBuf::from("packs/bad"))
            .unwrap_err();
        assert!(matches!(err, AdjustmentError::Config(_)));
        assert!(err.to_string().contains("packs/bad"));
    }

    #[test]
    fn manifest_requires_unique_id() {
        let err = ContentPack::from_json(r#"{ "Name": "x" }"#, "{}", PathBuf::from("p"))
            .unwrap_err();
        assert!(matches!(err, AdjustmentError::Config(_)));
    }
}
