//! Exhibitor domain model

use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// A company presence at a fair that the user tracks
///
/// Exhibitors are immutable after creation: there is no edit operation.
/// Deleting one cascades onto every meeting referencing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibitor {
    /// Unique identifier within the fair's document
    pub id: RecordId,

    /// Owning fair
    #[serde(default)]
    pub fair_id: String,

    /// Company name
    pub name: String,

    #[serde(default)]
    pub hall: String,

    #[serde(default)]
    pub stand: String,

    /// Category or product line
    #[serde(default)]
    pub category: String,

    /// Contact person, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Exhibitor {
    /// Creates a new exhibitor with empty location and category fields
    pub fn new(id: RecordId, fair_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            fair_id: fair_id.into(),
            name: name.into(),
            hall: String::new(),
            stand: String::new(),
            category: String::new(),
            contact_name: None,
            email: None,
        }
    }

    /// Display label for the booth position, e.g. "H4/B12"
    pub fn booth(&self) -> Option<String> {
        if self.hall.is_empty() && self.stand.is_empty() {
            None
        } else {
            Some(format!("H{}/{}", self.hall, self.stand))
        }
    }
}
