//! FairAgenda CLI - A local-first organizer for trade-fair visits
//!
//! FairAgenda tracks the exhibitors you plan to see at a fair, the meetings
//! you schedule with them, and your follow-up tasks. Everything is scoped
//! per fair, stored in a single JSON file on the local device, and backed
//! up by explicit export/import.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{
    AgendaStore, DocumentPatch, Exhibitor, Fair, FairDocument, Meeting, MeetingStatus, RecordId,
    RecordKind, Task,
};
