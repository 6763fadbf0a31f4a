//! Token classification for log template mining
//!
//! A log line is split on whitespace and every word is classified into one of
//! a small set of token kinds. Recognizers run in a fixed order:
//! 1. Date      `YYYY-MM-DD`
//! 2. Time      `HH:MM:SS,mmm`
//! 3. DateTime  `YYYY-MM-DDTHH:MM:SS`
//! 4. anything else is a Literal
//!
//! Gap and Wildcard never come out of the tokenizer. Gap is produced by the
//! aligner for insertions/deletions, Wildcard by the merge engine when a
//! position varies across cluster members.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}$").unwrap());

static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^20[0-9]{2}-(0[1-9]|1[0-2])-[0-3][0-9]T([0-1][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$")
        .unwrap()
});

pub const GAP_LABEL: &str = "-";
pub const WILDCARD_LABEL: &str = "WORD";
pub const DATE_LABEL: &str = "Date";
pub const TIME_LABEL: &str = "Time";
pub const DATE_TIME_LABEL: &str = "DateTime";

/// Kind tag of a [`Token`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Literal,
    Gap,
    Wildcard,
    Date,
    Time,
    DateTime,
}

/// Smallest classified unit of a log line.
///
/// Only `Literal` carries its original word; every other kind renders as a
/// fixed label, so two tokens are equal exactly when kind and payload agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Literal(String),
    Gap,
    Wildcard,
    Date,
    Time,
    DateTime,
}

/// One log line, or one cluster representative
pub type Sequence = Vec<Token>;

impl Token {
    pub fn literal(word: impl Into<String>) -> Self {
        Token::Literal(word.into())
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Literal(_) => TokenKind::Literal,
            Token::Gap => TokenKind::Gap,
            Token::Wildcard => TokenKind::Wildcard,
            Token::Date => TokenKind::Date,
            Token::Time => TokenKind::Time,
            Token::DateTime => TokenKind::DateTime,
        }
    }

    pub fn payload(&self) -> &str {
        match self {
            Token::Literal(word) => word,
            Token::Gap => GAP_LABEL,
            Token::Wildcard => WILDCARD_LABEL,
            Token::Date => DATE_LABEL,
            Token::Time => TIME_LABEL,
            Token::DateTime => DATE_TIME_LABEL,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Token::Gap)
    }

    /// Classify a single whitespace-free word
    pub fn classify(word: &str) -> Self {
        // Order matters: Date is tried before DateTime
        if DATE_RE.is_match(word) {
            Token::Date
        } else if TIME_RE.is_match(word) {
            Token::Time
        } else if DATE_TIME_RE.is_match(word) {
            Token::DateTime
        } else {
            Token::Literal(word.to_string())
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.payload())
    }
}

/// Split a line on runs of whitespace and classify every word
pub fn tokenize(line: &str) -> Sequence {
    line.split_whitespace().map(Token::classify).collect()
}

/// Render a sequence back to text, joining payloads with `delim`
pub fn untokenize(tokens: &[Token], delim: &str) -> String {
    tokens
        .iter()
        .map(Token::payload)
        .collect::<Vec<_>>()
        .join(delim)
}
