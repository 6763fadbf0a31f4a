//! Online, single-pass log template miner.
//!
//! Every incoming line is tokenized and compared against each existing
//! cluster's representative with the positional distance. The closest
//! cluster under the threshold absorbs the line; otherwise the line starts a
//! new cluster. Clusters are never split, removed or reassigned, so the
//! result depends on input order.
use rayon::prelude::*;
use tracing::debug;

use crate::cluster::Cluster;
use crate::miner_config::MinerConfig;
use crate::token::{tokenize, Token};

pub struct LogMiner {
    // Creation order, no secondary index
    clusters: Vec<Cluster>,
    config: MinerConfig,
}

impl LogMiner {
    pub fn new() -> Self {
        Self::with_config(MinerConfig::default())
    }

    pub fn with_config(config: MinerConfig) -> Self {
        Self {
            clusters: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Route one raw line. Returns the index of the cluster it landed in.
    pub fn add(&mut self, line: &str) -> usize {
        let log = tokenize(line);

        match self.find_cluster(&log) {
            Some(idx) => {
                self.clusters[idx].add_with(&log, &self.config);
                debug!(
                    cluster = idx,
                    size = self.clusters[idx].size(),
                    "added log to existing cluster"
                );
                idx
            }
            None => {
                self.clusters.push(Cluster::new(log));
                let idx = self.clusters.len() - 1;
                debug!(cluster = idx, "created new cluster");
                idx
            }
        }
    }

    /// Route lines in order
    pub fn add_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.add(line.as_ref());
        }
    }

    /// Closest cluster strictly under the threshold. Earlier clusters win ties.
    pub fn find_cluster(&self, log: &[Token]) -> Option<usize> {
        if self.clusters.len() >= self.config.parallel_scan_min_clusters {
            let distances: Vec<f64> = self
                .clusters
                .par_iter()
                .map(|cluster| cluster.distance_to(log))
                .collect();
            self.select(distances.into_iter())
        } else {
            self.select(self.clusters.iter().map(|cluster| cluster.distance_to(log)))
        }
    }

    fn select(&self, distances: impl Iterator<Item = f64>) -> Option<usize> {
        let mut best = f64::MAX;
        let mut found = None;

        for (idx, d) in distances.enumerate() {
            if d < self.config.max_distance && d < best {
                best = d;
                found = Some(idx);
            }
        }

        found
    }

    /// Clusters in creation order
    pub fn get_clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Total number of lines routed so far
    pub fn line_count(&self) -> usize {
        self.clusters.iter().map(Cluster::size).sum()
    }
}

impl Default for LogMiner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_creates_cluster() {
        let mut miner = LogMiner::new();
        assert_eq!(miner.add("Disconnected from broker broker1"), 0);
        assert_eq!(miner.cluster_count(), 1);
        assert_eq!(miner.get_clusters()[0].size(), 1);
    }

    #[test]
    fn test_similar_lines_share_cluster() {
        let mut miner = LogMiner::new();
        miner.add("Disconnected from broker broker1");
        assert_eq!(miner.add("Disconnected from broker broker2"), 0);

        let clusters = miner.get_clusters();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].size(), 2);
        assert_eq!(clusters[0].id(), "Disconnected from broker WORD");
    }

    #[test]
    fn test_threshold_is_strict() {
        // Two of four positions match: distance is exactly 0.5
        let mut miner = LogMiner::new();
        miner.add("a b c d");
        assert_eq!(miner.add("a b x y"), 1);
        assert_eq!(miner.cluster_count(), 2);
    }

    #[test]
    fn test_earlier_cluster_wins_tie() {
        let mut miner = LogMiner::new();
        miner.add("a b c x x x");
        // Exactly 0.5 from the first cluster, so it starts its own
        assert_eq!(miner.add("a b c y y y"), 1);

        // 1/3 from both clusters
        let log = tokenize("a b c x y z");
        assert_eq!(miner.find_cluster(&log), Some(0));
        assert_eq!(miner.add("a b c x y z"), 0);
    }

    #[test]
    fn test_closest_cluster_wins() {
        let mut miner = LogMiner::new();
        miner.add("a b c x x x");
        miner.add("a b c y y y");

        // 1/3 from the first cluster, 1/6 from the second
        assert_eq!(miner.add("a b c x y y"), 1);
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        let lines = [
            "user alice logged in",
            "user bob logged in",
            "disk sda1 full",
            "disk sdb2 full",
            "service nginx restarted after crash",
        ];

        let mut serial = LogMiner::with_config(MinerConfig::sequential());
        let mut parallel =
            LogMiner::with_config(MinerConfig::new().with_parallel_scan_min_clusters(0));
        serial.add_all(lines);
        parallel.add_all(lines);

        assert_eq!(serial.get_clusters(), parallel.get_clusters());
        assert_eq!(parallel.line_count(), lines.len());
    }

    #[test]
    fn test_empty_line() {
        let mut miner = LogMiner::new();
        assert_eq!(miner.add(""), 0);
        assert_eq!(miner.add("   "), 0);
        assert_eq!(miner.get_clusters()[0].size(), 2);
        assert_eq!(miner.get_clusters()[0].id(), "");
    }
}
