use super::{LocationNameSet, SeasonSet};
use crate::error::{AdjustmentError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Produce item id carried by rules that were never assigned a crop.
pub const UNASSIGNED_ITEM_ID: &str = "-1";

fn default_item_id() -> String {
    UNASSIGNED_ITEM_ID.to_string()
}

/// Item ids are strings, but packs often write them as bare numbers.
fn deserialize_item_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ItemId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match ItemId::deserialize(deserializer)? {
        ItemId::Text(id) => id,
        ItemId::Signed(id) => id.to_string(),
        ItemId::Unsigned(id) => id.to_string(),
    })
}

/// One `CropAdjustments` entry exactly as written in a content pack.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CropAdjustment {
    #[serde(default)]
    pub crop_produce_name: Option<String>,
    #[serde(default = "default_item_id", deserialize_with = "deserialize_item_id")]
    pub crop_produce_item_id: String,
    #[serde(default)]
    pub seasons_to_grow_in: Option<String>,
    #[serde(default)]
    pub seasons_to_produce_in: Option<String>,
    #[serde(default)]
    pub locations_with_default_season_behavior: Option<String>,
    /// Seasonal sprite overrides. Appearance is handled by the host, so the
    /// value is only carried through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_sprites_for_seasons: Option<serde_json::Value>,
}

/// A season token in a content pack that did not name a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonWarning {
    pub crop: String,
    pub field: &'static str,
    pub token: String,
}

impl std::fmt::Display for SeasonWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown season in crop adjustment '{}' ({}): {}",
            self.crop, self.field, self.token
        )
    }
}

/// Validated seasonal adjustment for one crop, keyed by its produce item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropAdjustmentRule {
    pub produce_item_id: String,
    pub produce_name: Option<String>,
    pub grow_seasons: SeasonSet,
    pub produce_seasons: SeasonSet,
    pub default_behavior_locations: LocationNameSet,
}

impl CropAdjustmentRule {
    pub fn new(
        produce_item_id: impl Into<String>,
        grow_seasons: SeasonSet,
        produce_seasons: SeasonSet,
    ) -> Self {
        Self {
            produce_item_id: produce_item_id.into(),
            produce_name: None,
            grow_seasons,
            produce_seasons,
            default_behavior_locations: LocationNameSet::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.produce_name = Some(name.into());
        self
    }

    pub fn with_default_locations(mut self, locations: LocationNameSet) -> Self {
        self.default_behavior_locations = locations;
        self
    }

    /// Build a rule from a raw content-pack entry.
    ///
    /// Unknown season tokens are dropped and returned as warnings. Both season
    /// fields are required; an entry missing either is rejected.
    pub fn from_config(config: &CropAdjustment) -> Result<(Self, Vec<SeasonWarning>)> {
        let label = config
            .crop_produce_name
            .clone()
            .unwrap_or_else(|| config.crop_produce_item_id.clone());
        let mut warnings = Vec::new();

        let mut parse_field = |raw: Option<&str>, field: &'static str| -> Result<SeasonSet> {
            let raw = raw.ok_or_else(|| {
                AdjustmentError::InvalidData(format!(
                    "crop adjustment '{}' is missing {}",
                    label, field
                ))
            })?;
            let (set, unknown) = SeasonSet::parse(raw);
            warnings.extend(unknown.into_iter().map(|token| SeasonWarning {
                crop: label.clone(),
                field,
                token,
            }));
            Ok(set)
        };

        let grow_seasons = parse_field(config.seasons_to_grow_in.as_deref(), "SeasonsToGrowIn")?;
        let produce_seasons = parse_field(
            config.seasons_to_produce_in.as_deref(),
            "SeasonsToProduceIn",
        )?;

        let default_behavior_locations = config
            .locations_with_default_season_behavior
            .as_deref()
            .map(LocationNameSet::parse)
            .unwrap_or_default();

        let rule = Self {
            produce_item_id: config.crop_produce_item_id.trim().to_string(),
            produce_name: config.crop_produce_name.clone(),
            grow_seasons,
            produce_seasons,
            default_behavior_locations,
        };

        Ok((rule, warnings))
    }

    pub fn is_assigned(&self) -> bool {
        self.produce_item_id != UNASSIGNED_ITEM_ID
    }

    /// Name used in diagnostics: the produce name when present, else the id.
    pub fn label(&self) -> &str {
        self.produce_name.as_deref().unwrap_or(&self.produce_item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    fn parse_entry(json: &str) -> CropAdjustment {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn from_config_parses_all_fields() {
        let entry = parse_entry(
            r#"{
                "CropProduceName": "Parsnip",
                "CropProduceItemId": "24",
                "SeasonsToGrowIn": "spring, summer",
                "SeasonsToProduceIn": "Spring",
                "LocationsWithDefaultSeasonBehavior": "Greenhouse, IslandWest"
            }"#,
        );

        let (rule, warnings) = CropAdjustmentRule::from_config(&entry).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(rule.produce_item_id, "24");
        assert_eq!(rule.label(), "Parsnip");
        assert!(rule.grow_seasons.contains(Season::Summer));
        assert!(rule.produce_seasons.contains(Season::Spring));
        assert!(!rule.produce_seasons.contains(Season::Summer));
        assert!(rule.default_behavior_locations.contains("islandwest"));
    }

    #[test]
    fn from_config_reports_unknown_seasons() {
        let entry = parse_entry(
            r#"{
                "CropProduceItemId": "190",
                "SeasonsToGrowIn": "fall,wintr",
                "SeasonsToProduceIn": "autumn"
            }"#,
        );

        let (rule, warnings) = CropAdjustmentRule::from_config(&entry).unwrap();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].field, "SeasonsToGrowIn");
        assert_eq!(warnings[0].token, "wintr");
        assert_eq!(warnings[0].crop, "190");
        assert_eq!(warnings[1].field, "SeasonsToProduceIn");
        assert!(rule.grow_seasons.contains(Season::Fall));
        assert!(rule.produce_seasons.is_empty());
    }

    #[test]
    fn optional_fields_use_defaults() {
        let entry = parse_entry(r#"{ "SeasonsToGrowIn": "", "SeasonsToProduceIn": "" }"#);
        let (rule, warnings) = CropAdjustmentRule::from_config(&entry).unwrap();
        assert!(warnings.is_empty());
        assert!(!rule.is_assigned());
        assert!(rule.grow_seasons.is_empty());
        assert!(rule.default_behavior_locations.is_empty());
    }

    #[test]
    fn missing_season_field_is_rejected() {
        let entry = parse_entry(r#"{ "CropProduceItemId": "24", "SeasonsToProduceIn": "summer" }"#);
        let err = CropAdjustmentRule::from_config(&entry).unwrap_err();
        assert!(matches!(err, AdjustmentError::InvalidData(_)));
        assert!(err.to_string().contains("SeasonsToGrowIn"));

        let entry = parse_entry(r#"{ "CropProduceItemId": "24", "SeasonsToGrowIn": "summer" }"#);
        let err = CropAdjustmentRule::from_config(&entry).unwrap_err();
        assert!(err.to_string().contains("SeasonsToProduceIn"));
    }

    #[test]
    fn numeric_item_id_is_read_as_text() {
        let entry = parse_entry(
            r#"{ "CropProduceItemId": 24, "SeasonsToGrowIn": "spring", "SeasonsToProduceIn": "spring" }"#,
        );
        assert_eq!(entry.crop_produce_item_id, "24");

        let entry = parse_entry(r#"{ "CropProduceItemId": -1 }"#);
        assert_eq!(entry.crop_produce_item_id, UNASSIGNED_ITEM_ID);
    }

    #[test]
    fn sprite_overrides_are_accepted() {
        let entry = parse_entry(
            r#"{
                "CropProduceItemId": "400",
                "SeasonsToGrowIn": "summer",
                "SeasonsToProduceIn": "summer",
                "SpecialSpritesForSeasons": [{ "Season": "winter", "Sprites": "assets/x.png" }]
            }"#,
        );
        assert!(entry.special_sprites_for_seasons.is_some());
        let (rule, _) = CropAdjustmentRule::from_config(&entry).unwrap();
        assert_eq!(rule.produce_item_id, "400");
    }
}
