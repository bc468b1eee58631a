use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate counts over the knowledge corpus, recomputed from the store on
/// every call. Field names are part of the dashboard JSON contract.
///
/// Invariant: `total_knowledge` equals the sum of the `categories` values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeStats {
    pub total_knowledge: u64,
    pub categories: BTreeMap<String, u64>,
}

impl KnowledgeStats {
    /// Count one entry under `category`.
    pub fn record(&mut self, category: &str) {
        self.total_knowledge += 1;
        *self.categories.entry(category.to_string()).or_insert(0) += 1;
    }
}
