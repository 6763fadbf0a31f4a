/// Line sources for plain text and JSON message payloads
use crate::traits::LineSource;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a source reads its bytes from
#[derive(Debug, Clone)]
enum Origin {
    File(PathBuf),
    Inline(String),
}

impl Origin {
    fn read(&self) -> Result<String> {
        match self {
            Origin::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read log file: {}", path.display())),
            Origin::Inline(content) => Ok(content.clone()),
        }
    }
}

fn read_all(mut reader: impl Read) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read log input")?;
    Ok(content)
}

/// One log per line
pub struct PlainTextSource {
    name: String,
    origin: Origin,
    keep_blank: bool,
}

impl PlainTextSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: path.display().to_string(),
            origin: Origin::File(path),
            keep_blank: false,
        }
    }

    pub fn from_string(name: &str, content: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            origin: Origin::Inline(content.into()),
            keep_blank: false,
        }
    }

    /// Drain a reader (e.g. stdin) up front
    pub fn from_reader(name: &str, reader: impl Read) -> Result<Self> {
        Ok(Self::from_string(name, read_all(reader)?))
    }

    /// Keep blank lines as empty strings instead of skipping them
    pub fn keep_blank(mut self, keep: bool) -> Self {
        self.keep_blank = keep;
        self
    }
}

impl LineSource for PlainTextSource {
    fn load_lines(&self) -> Result<Vec<String>> {
        let content = self.origin.read()?;

        Ok(content
            .lines()
            .filter(|line| self.keep_blank || !line.trim().is_empty())
            .map(|s| s.to_string())
            .collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A JSON array of objects, each with a string `message` field:
///
/// ```json
/// [
///     { "message": "2020-09-06T16:00:00 Disconnected from broker broker1" },
///     { "message": "2020-09-06T16:00:00 Disconnected from broker broker2" }
/// ]
/// ```
pub struct JsonMessageSource {
    name: String,
    origin: Origin,
}

impl JsonMessageSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: path.display().to_string(),
            origin: Origin::File(path),
        }
    }

    pub fn from_string(name: &str, content: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            origin: Origin::Inline(content.into()),
        }
    }

    pub fn from_reader(name: &str, reader: impl Read) -> Result<Self> {
        Ok(Self::from_string(name, read_all(reader)?))
    }
}

/// Extract the `message` fields from a JSON array payload
pub fn parse_messages(content: &str) -> Result<Vec<String>> {
    let root: Value = serde_json::from_str(content).context("Failed to parse JSON payload")?;

    let Some(entries) = root.as_array() else {
        bail!("Expected a JSON array of log entries");
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| match entry.get("message").and_then(Value::as_str) {
            Some(message) => Ok(message.to_string()),
            None => bail!("Entry {} has no string \"message\" field", idx),
        })
        .collect()
}

impl LineSource for JsonMessageSource {
    fn load_lines(&self) -> Result<Vec<String>> {
        let content = self.origin.read()?;
        parse_messages(&content).with_context(|| format!("Invalid log payload in {}", self.name))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
