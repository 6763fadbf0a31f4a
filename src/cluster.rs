//! A cluster of log lines sharing one structural template.
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::align::{align_local, identity_score};
use crate::distance::distance;
use crate::merge::merge;
use crate::miner_config::MinerConfig;
use crate::token::{untokenize, Sequence, Token};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    representative: Sequence,
    size: usize,
}

impl Cluster {
    /// Start a cluster from its first member
    pub fn new(representative: Sequence) -> Self {
        Self {
            representative,
            size: 1,
        }
    }

    pub fn representative(&self) -> &[Token] {
        &self.representative
    }

    /// Number of lines assigned to this cluster
    pub fn size(&self) -> usize {
        self.size
    }

    /// Representative rendered as space-joined payloads
    pub fn id(&self) -> String {
        untokenize(&self.representative, " ")
    }

    pub fn distance_to(&self, log: &[Token]) -> f64 {
        distance(&self.representative, log).abs()
    }

    /// Add a line with the default clustering scores
    pub fn add(&mut self, log: &[Token]) {
        self.add_with(log, &MinerConfig::default());
    }

    /// Add a line: align it locally against the representative and replace
    /// the representative with the merge of the two aligned sequences.
    pub fn add_with(&mut self, log: &[Token], config: &MinerConfig) {
        self.size += 1;

        let merged = if config.fits_alignment(self.representative.len(), log.len()) {
            let k = config.match_score;
            let (left, right) = align_local(
                &self.representative,
                log,
                &Token::Gap,
                config.gap_cost,
                |l, r| identity_score(l, r, k),
            );
            debug!(
                left = %untokenize(&left, " "),
                right = %untokenize(&right, " "),
                "aligned log against representative"
            );
            merge(&left, &right)
        } else {
            warn!(
                representative_len = self.representative.len(),
                log_len = log.len(),
                max_cells = config.max_alignment_cells,
                "alignment grid too large, merging positionally"
            );
            merge(&self.representative, log)
        };

        self.representative = merged;
    }
}
