use std::collections::BTreeMap;

use serde::Serialize;

/// Aggregate stats response. Field names are the dashboard contract.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub total_knowledge: u64,
    pub categories: BTreeMap<String, u64>,
}
