//! Record identifiers
//!
//! Generated ID format: `{kind}-{7-char-hash}` where kind is `x`
//! (exhibitor), `m` (meeting) or `t` (task), e.g. `x-7f2b4c1`.
//!
//! The hash is derived from a seed string plus the creation timestamp at
//! nanosecond resolution, so two records created from the same seed within
//! the same clock tick still get distinct ids. Ids found in imported
//! backups may use any scheme; they are preserved verbatim, and only the
//! generator produces the prefixed form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("record id must not be empty")]
    Empty,
}

/// Kind of record an id is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Exhibitor,
    Meeting,
    Task,
}

impl RecordKind {
    fn prefix(self) -> &'static str {
        match self {
            RecordKind::Exhibitor => "x",
            RecordKind::Meeting => "m",
            RecordKind::Task => "t",
        }
    }
}

/// Generates a 7-character hash from a seed and timestamp
fn generate_hash(seed: &str, timestamp: DateTime<Utc>) -> String {
    let input = format!("{}{}", seed, timestamp.timestamp_nanos_opt().unwrap_or(0));
    let hash = blake3::hash(input.as_bytes());
    let hex = hash.to_hex();
    hex[..7].to_string()
}

/// Opaque record identifier, unique within one fair's document
///
/// Collisions are a caller error; the store does not detect them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Generates a fresh id for a record of the given kind
    pub fn generate(kind: RecordKind, seed: &str, timestamp: DateTime<Utc>) -> Self {
        Self(format!("{}-{}", kind.prefix(), generate_hash(seed, timestamp)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for RecordId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}
