//! Domain model: record shapes, the per-fair document, and the store
//! that owns the update/query contract.

mod document;
mod exhibitor;
mod fair;
mod id;
mod meeting;
mod store;
mod task;

pub use document::{FairDocument, UNKNOWN_EXHIBITOR};
pub use exhibitor::Exhibitor;
pub use fair::{Fair, CATALOG};
pub use id::{IdError, RecordId, RecordKind};
pub use meeting::{Meeting, MeetingStatus};
pub use store::{AgendaStore, DocumentPatch};
pub use task::Task;
