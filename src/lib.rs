// Core mining engine
pub mod align;
pub mod cluster;
pub mod distance;
pub mod merge;
pub mod miner;
pub mod miner_config;
pub mod token;

// Input/output boundary and runtime configuration
pub mod config;
pub mod report;
pub mod sources;
pub mod traits;

pub use cluster::Cluster;
pub use miner::LogMiner;
pub use miner_config::MinerConfig;
pub use token::{tokenize, untokenize, Sequence, Token, TokenKind};
