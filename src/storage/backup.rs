//! Backup codec
//!
//! Encodes the whole store as a portable, pretty-printed JSON snapshot
//! and parses such snapshots back. Decoding is pure: it validates the
//! gross structure and either returns a complete store or an error,
//! without touching any existing state. Applying the result (and gating
//! it behind a confirmation) is the caller's responsibility.
//!
//! The wire shape is a mapping from fair ids to documents, each document
//! a mapping with `exhibitors`, `meetings` and `tasks` sequences. Missing
//! collections default to empty and unknown keys are ignored, so snapshots
//! from newer builds still load.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{AgendaStore, Exhibitor, FairDocument, Meeting, Task};

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("not valid JSON: {0}")]
    Syntax(String),

    #[error("backup must be a mapping from fair ids to documents")]
    NotAMapping,

    #[error("fair \"{fair}\": document must be a mapping")]
    InvalidDocument { fair: String },

    #[error("fair \"{fair}\": \"{collection}\" must be a sequence")]
    InvalidCollection { fair: String, collection: String },

    #[error("fair \"{fair}\": {collection}[{index}]: {reason}")]
    InvalidRecord {
        fair: String,
        collection: String,
        index: usize,
        reason: String,
    },
}

/// Serializes the whole store as portable JSON
pub fn encode(store: &AgendaStore) -> Result<String> {
    serde_json::to_string_pretty(store).context("failed to serialize agenda store")
}

/// Parses a backup snapshot into a store
pub fn decode(text: &str) -> Result<AgendaStore, DecodeError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| DecodeError::Syntax(e.to_string()))?;

    let Value::Object(fairs) = value else {
        return Err(DecodeError::NotAMapping);
    };

    let mut documents = Vec::with_capacity(fairs.len());
    for (fair_id, doc_value) in fairs {
        let document = decode_document(&fair_id, doc_value)?;
        documents.push((fair_id, document));
    }

    Ok(AgendaStore::from_documents(documents))
}

fn decode_document(fair: &str, value: Value) -> Result<FairDocument, DecodeError> {
    let Value::Object(mut fields) = value else {
        return Err(DecodeError::InvalidDocument {
            fair: fair.to_string(),
        });
    };

    Ok(FairDocument {
        exhibitors: decode_records::<Exhibitor>(fair, "exhibitors", fields.remove("exhibitors"))?,
        meetings: decode_records::<Meeting>(fair, "meetings", fields.remove("meetings"))?,
        tasks: decode_records::<Task>(fair, "tasks", fields.remove("tasks"))?,
    })
}

/// Decodes one collection. A missing collection is empty; a present one
/// must be a sequence of mappings that each carry a non-empty string id.
fn decode_records<T: DeserializeOwned>(
    fair: &str,
    collection: &str,
    value: Option<Value>,
) -> Result<Vec<T>, DecodeError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    let Value::Array(items) = value else {
        return Err(DecodeError::InvalidCollection {
            fair: fair.to_string(),
            collection: collection.to_string(),
        });
    };

    let invalid_record = |index: usize, reason: String| DecodeError::InvalidRecord {
        fair: fair.to_string(),
        collection: collection.to_string(),
        index,
        reason,
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(record_fields) = &item else {
            return Err(invalid_record(index, "record must be a mapping".to_string()));
        };

        match record_fields.get("id") {
            Some(Value::String(id)) if !id.trim().is_empty() => {}
            _ => {
                return Err(invalid_record(
                    index,
                    "record is missing a non-empty \"id\"".to_string(),
                ))
            }
        }

        let record = serde_json::from_value(item).map_err(|e| invalid_record(index, e.to_string()))?;
        records.push(record);
    }

    Ok(records)
}
