//! Meeting domain model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::id::RecordId;

/// Status of a meeting
///
/// Only the pending -> completed transition is reachable from a command.
/// `Cancelled` is part of the declared value set so that backups carrying
/// it decode unchanged, but nothing currently transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl MeetingStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, MeetingStatus::Pending)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, MeetingStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Pending => "pending",
            MeetingStatus::Completed => "completed",
            MeetingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MeetingStatus::Pending),
            "completed" => Ok(MeetingStatus::Completed),
            "cancelled" => Ok(MeetingStatus::Cancelled),
            other => Err(format!(
                "unknown status \"{}\" (expected pending, completed or cancelled)",
                other
            )),
        }
    }
}

/// A scheduled or completed interaction with an exhibitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Unique identifier within the fair's document
    pub id: RecordId,

    /// Owning fair
    #[serde(default)]
    pub fair_id: String,

    /// Lookup key into the document's exhibitor collection. Not an
    /// ownership relation: it may dangle after out-of-band edits, and
    /// readers must degrade to a placeholder rather than fail.
    pub exhibitor_id: RecordId,

    /// ISO-local date-time; lexicographic order is chronological
    pub date_time: String,

    #[serde(default)]
    pub location: String,

    /// Free-text objective or notes
    #[serde(default)]
    pub notes: String,

    /// Status is the only mutable field
    #[serde(default)]
    pub status: MeetingStatus,
}

impl Meeting {
    /// Creates a pending meeting
    pub fn new(
        id: RecordId,
        fair_id: impl Into<String>,
        exhibitor_id: RecordId,
        date_time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            fair_id: fair_id.into(),
            exhibitor_id,
            date_time: date_time.into(),
            location: String::new(),
            notes: String::new(),
            status: MeetingStatus::Pending,
        }
    }
}
