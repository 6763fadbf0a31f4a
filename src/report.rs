//! Cluster snapshots for consumers of the miner
use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::miner::LogMiner;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Space-joined representative, e.g. `DateTime Disconnected from broker WORD`
    pub id: String,
    pub size: usize,
}

/// Snapshot every cluster, in creation order
pub fn summarize(miner: &LogMiner) -> Vec<ClusterSummary> {
    miner
        .get_clusters()
        .iter()
        .map(|cluster| ClusterSummary {
            id: cluster.id(),
            size: cluster.size(),
        })
        .collect()
}

/// One `size<TAB>id` line per cluster
pub fn render_text(summaries: &[ClusterSummary]) -> String {
    summaries
        .iter()
        .map(|s| format!("{}\t{}\n", s.size, s.id))
        .collect()
}

pub fn render_json(summaries: &[ClusterSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
