use crate::models::CropAdjustmentRule;
use std::collections::HashSet;

/// Every loaded adjustment rule, flattened across content packs in load order.
///
/// Lookups return the first rule for an item id, so when two packs adjust the
/// same crop the earlier pack governs it.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<CropAdjustmentRule>,
}

impl RuleCatalog {
    pub fn new(rules: Vec<CropAdjustmentRule>) -> Self {
        Self { rules }
    }

    pub fn find(&self, harvest_item_id: &str) -> Option<&CropAdjustmentRule> {
        self.rules
            .iter()
            .find(|rule| rule.is_assigned() && rule.produce_item_id == harvest_item_id)
    }

    /// Item ids configured by more than one rule, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for rule in self.rules.iter().filter(|r| r.is_assigned()) {
            let id = rule.produce_item_id.as_str();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }

        duplicates
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropAdjustmentRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<CropAdjustmentRule> for RuleCatalog {
    fn from_iter<I: IntoIterator<Item = CropAdjustmentRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
