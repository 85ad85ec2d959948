use super::pack::ContentPack;
use crate::error::Result;
use crate::logic::RuleCatalog;
use crate::models::{CropAdjustmentRule, SeasonWarning};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PackSummary {
    pub name: String,
    pub unique_id: String,
    pub path: PathBuf,
    pub rules: usize,
}

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub packs: Vec<PackSummary>,
    pub warnings: Vec<SeasonWarning>,
    /// Crop adjustments left out of the catalog, with the reason.
    pub rejected: Vec<String>,
    /// Pack directories that could not be read, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Load every content pack under `roots` and flatten them into one catalog.
///
/// Roots are visited in the given order. A root is either a pack itself or a
/// directory of packs, which are loaded in directory-name order. Broken packs
/// are skipped and reported rather than failing the whole load.
pub fn load_catalog(roots: &[PathBuf]) -> Result<(RuleCatalog, LoadReport)> {
    let mut packs = Vec::new();
    let mut report = LoadReport::default();

    for root in roots {
        for dir in pack_dirs(root, &mut report)? {
            match ContentPack::load(&dir) {
                Ok(pack) => {
                    tracing::info!(
                        "Loaded content pack {} ({}) with {} crop adjustments",
                        pack.manifest.name,
                        pack.manifest.unique_id,
                        pack.adjustments.len()
                    );
                    packs.push(pack);
                }
                Err(e) => {
                    tracing::warn!("Skipping content pack at {}: {}", dir.display(), e);
                    report.skipped.push((dir, e.to_string()));
                }
            }
        }
    }

    let catalog = build_catalog(&packs, &mut report);
    report.packs = packs
        .iter()
        .map(|pack| PackSummary {
            name: pack.manifest.name.clone(),
            unique_id: pack.manifest.unique_id.clone(),
            path: pack.path.clone(),
            rules: pack.adjustments.len(),
        })
        .collect();

    Ok((catalog, report))
}

/// Flatten packs into a catalog, keeping pack order and entry order.
///
/// Season warnings and rejected entries are recorded in `report`.
pub fn build_catalog(packs: &[ContentPack], report: &mut LoadReport) -> RuleCatalog {
    let mut rules = Vec::new();

    for pack in packs {
        for adjustment in &pack.adjustments {
            let (rule, rule_warnings) = match CropAdjustmentRule::from_config(adjustment) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!("Skipping {} [{}]", e, pack.manifest.unique_id);
                    report
                        .rejected
                        .push(format!("{} [{}]", e, pack.manifest.unique_id));
                    continue;
                }
            };
            for warning in &rule_warnings {
                tracing::warn!("{} [{}]", warning, pack.manifest.unique_id);
            }
            report.warnings.extend(rule_warnings);
            rules.push(rule);
        }
    }

    let catalog = RuleCatalog::new(rules);
    for id in catalog.duplicate_ids() {
        tracing::warn!(
            "Crop {} is adjusted by more than one rule; the first loaded rule applies",
            id
        );
    }

    catalog
}

fn pack_dirs(root: &Path, report: &mut LoadReport) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        tracing::warn!("Content pack directory {} does not exist", root.display());
        report
            .skipped
            .push((root.to_path_buf(), "directory does not exist".into()));
        return Ok(Vec::new());
    }

    if ContentPack::is_pack_dir(root) {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() && ContentPack::is_pack_dir(&path) {
            dirs.push(path);
        }
    }
    dirs.sort();

    Ok(dirs)
}
