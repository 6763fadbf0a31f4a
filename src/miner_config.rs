use serde::{Deserialize, Serialize};

use crate::align::{DEFAULT_LOCAL_GAP_COST, Grid};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinerConfig {
    /// A line joins a cluster only if its distance is strictly below this
    pub max_distance: f64,
    /// Penalty subtracted per indel in the local alignment
    pub gap_cost: i32,
    /// Score for a matching token pair (mismatches score 0)
    pub match_score: i32,
    /// Largest DP grid `Cluster::add` will allocate before falling back to
    /// a positional merge
    pub max_alignment_cells: usize,
    /// Cluster count at which the candidate scan runs on the rayon pool
    pub parallel_scan_min_clusters: usize,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            max_distance: 0.5,
            gap_cost: DEFAULT_LOCAL_GAP_COST,
            match_score: 1,
            max_alignment_cells: 4_000_000,
            parallel_scan_min_clusters: 512,
        }
    }
}

impl MinerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never scan in parallel
    pub fn sequential() -> Self {
        Self {
            parallel_scan_min_clusters: usize::MAX,
            ..Default::default()
        }
    }

    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance.clamp(0.0, 1.0);
        self
    }

    pub fn with_gap_cost(mut self, gap_cost: i32) -> Self {
        self.gap_cost = gap_cost;
        self
    }

    pub fn with_match_score(mut self, match_score: i32) -> Self {
        self.match_score = match_score;
        self
    }

    pub fn with_max_alignment_cells(mut self, cells: usize) -> Self {
        self.max_alignment_cells = cells.max(1);
        self
    }

    pub fn with_parallel_scan_min_clusters(mut self, clusters: usize) -> Self {
        self.parallel_scan_min_clusters = clusters;
        self
    }

    pub(crate) fn fits_alignment(&self, left_len: usize, right_len: usize) -> bool {
        Grid::cells(left_len, right_len) <= self.max_alignment_cells
    }
}
