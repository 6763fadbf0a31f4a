use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::miner_config::MinerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// One log per line
    Text,
    /// JSON array of `{"message": ...}` objects
    Json,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" | "log" => Ok(InputFormat::Text),
            "json" => Ok(InputFormat::Json),
            other => Err(format!("unknown input format '{}' (expected text or json)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Input file; stdin when unset
    pub input: Option<PathBuf>,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,

    // Clustering threshold
    pub max_distance: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (environment, test fixtures)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let input_format = match lookup("LOGMINE_FORMAT") {
            Some(value) => value.parse()?,
            None => InputFormat::Text,
        };

        let output_format = match lookup("LOGMINE_OUTPUT") {
            Some(value) => value.parse()?,
            None => OutputFormat::Text,
        };

        let max_distance = match lookup("LOGMINE_MAX_DISTANCE") {
            Some(value) => {
                let parsed: f64 = value
                    .parse()
                    .map_err(|_| format!("LOGMINE_MAX_DISTANCE must be a number, got '{}'", value))?;
                if !(0.0..=1.0).contains(&parsed) {
                    return Err(format!(
                        "LOGMINE_MAX_DISTANCE must be within [0, 1], got {}",
                        parsed
                    ));
                }
                parsed
            }
            None => MinerConfig::default().max_distance,
        };

        Ok(Config {
            input: lookup("LOGMINE_INPUT")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            input_format,
            output_format,
            max_distance,
        })
    }

    pub fn miner_config(&self) -> MinerConfig {
        MinerConfig::default().with_max_distance(self.max_distance)
    }

    pub fn log_config(&self) {
        tracing::info!("Configuration:");
        match &self.input {
            Some(path) => tracing::info!("   Input: {}", path.display()),
            None => tracing::info!("   Input: <stdin>"),
        }
        tracing::info!("   Input format: {:?}", self.input_format);
        tracing::info!("   Output format: {:?}", self.output_format);
        tracing::info!("   Max distance: {}", self.max_distance);
    }
}
