/// Input boundary of the miner
///
/// The miner only needs raw line strings, in the order they must be
/// clustered. Where they come from (files, JSON payloads, in-memory test
/// data) is behind this trait so the binary and tests can swap sources.
use anyhow::Result;

// ============================================================================
// Line Source Trait
// ============================================================================

/// Trait for producing raw log lines
///
/// Implementations can load from:
/// - Plain text files (one log per line)
/// - JSON arrays of `{"message": ...}` objects
/// - In-memory fixtures
pub trait LineSource: Send + Sync {
    /// Load every line, preserving input order
    fn load_lines(&self) -> Result<Vec<String>>;

    /// Get the source name (for reporting)
    fn name(&self) -> &str;
}

impl LineSource for Vec<String> {
    fn load_lines(&self) -> Result<Vec<String>> {
        Ok(self.clone())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
