//! The agenda store: every fair's document and the update contract
//!
//! The store is the sole unit of persistence and of backup/restore. It is
//! constructed once at command start from the persistence slot, mutated in
//! place, and written back after every mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::document::FairDocument;
use super::exhibitor::Exhibitor;
use super::id::RecordId;
use super::meeting::{Meeting, MeetingStatus};
use super::task::Task;

/// Whole-collection replacement patch for one fair's document
///
/// A provided collection fully replaces its counterpart; an omitted one is
/// left untouched. Computing the new collection value is the caller's job;
/// the store never patches individual records.
#[derive(Debug, Clone, Default)]
pub struct DocumentPatch {
    pub exhibitors: Option<Vec<Exhibitor>>,
    pub meetings: Option<Vec<Meeting>>,
    pub tasks: Option<Vec<Task>>,
}

impl DocumentPatch {
    pub fn exhibitors(exhibitors: Vec<Exhibitor>) -> Self {
        Self {
            exhibitors: Some(exhibitors),
            ..Default::default()
        }
    }

    pub fn meetings(meetings: Vec<Meeting>) -> Self {
        Self {
            meetings: Some(meetings),
            ..Default::default()
        }
    }

    pub fn tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Some(tasks),
            ..Default::default()
        }
    }
}

/// In-memory mapping from fair id to per-fair document
///
/// Looking up an absent fair yields a fresh empty document, never an
/// error. BTreeMap keeps iteration and encoded output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgendaStore {
    fairs: BTreeMap<String, FairDocument>,
}

impl AgendaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from (fair id, document) pairs
    pub fn from_documents(documents: impl IntoIterator<Item = (String, FairDocument)>) -> Self {
        Self {
            fairs: documents.into_iter().collect(),
        }
    }

    /// Returns the document for a fair, or an empty one if absent
    pub fn document(&self, fair_id: &str) -> FairDocument {
        self.fairs.get(fair_id).cloned().unwrap_or_default()
    }

    /// Merges a patch into the document for a fair, creating its entry if
    /// absent. This is the single mutation primitive; record-level
    /// operations are expressed by callers as "compute the new collection,
    /// then replace".
    pub fn replace(&mut self, fair_id: &str, patch: DocumentPatch) {
        let doc = self.fairs.entry(fair_id.to_string()).or_default();
        if let Some(exhibitors) = patch.exhibitors {
            doc.exhibitors = exhibitors;
        }
        if let Some(meetings) = patch.meetings {
            doc.meetings = meetings;
        }
        if let Some(tasks) = patch.tasks {
            doc.tasks = tasks;
        }
    }

    /// Removes an exhibitor and every meeting referencing it in one step.
    /// Readers never observe the exhibitor gone with its meetings still
    /// present. Returns the number of records removed.
    pub fn delete_exhibitor_cascade(&mut self, fair_id: &str, exhibitor_id: &RecordId) -> usize {
        let Some(doc) = self.fairs.get_mut(fair_id) else {
            return 0;
        };
        let before = doc.exhibitors.len() + doc.meetings.len();
        doc.exhibitors.retain(|e| &e.id != exhibitor_id);
        doc.meetings.retain(|m| &m.exhibitor_id != exhibitor_id);
        before - doc.exhibitors.len() - doc.meetings.len()
    }

    /// Sets a meeting's status. Returns false when the fair or meeting is
    /// unknown; absence is not an error.
    pub fn set_meeting_status(
        &mut self,
        fair_id: &str,
        meeting_id: &RecordId,
        status: MeetingStatus,
    ) -> bool {
        let Some(doc) = self.fairs.get_mut(fair_id) else {
            return false;
        };
        match doc.meetings.iter_mut().find(|m| &m.id == meeting_id) {
            Some(meeting) => {
                meeting.status = status;
                true
            }
            None => false,
        }
    }

    /// Flips a task's completed flag. Returns false when the fair or task
    /// is unknown.
    pub fn toggle_task(&mut self, fair_id: &str, task_id: &RecordId) -> bool {
        let Some(doc) = self.fairs.get_mut(fair_id) else {
            return false;
        };
        match doc.tasks.iter_mut().find(|t| &t.id == task_id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Discards the current mapping and adopts the given store wholesale.
    /// Used only by backup restore; validation happens in the codec before
    /// this is called, never here.
    pub fn replace_all(&mut self, other: AgendaStore) {
        self.fairs = other.fairs;
    }

    /// Iterates over (fair id, document) pairs in fair-id order
    pub fn fairs(&self) -> impl Iterator<Item = (&str, &FairDocument)> {
        self.fairs.iter().map(|(id, doc)| (id.as_str(), doc))
    }

    /// Number of fairs with a stored document
    pub fn fair_count(&self) -> usize {
        self.fairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::RecordKind;

    fn exhibitor(name: &str) -> Exhibitor {
        let id = RecordId::generate(RecordKind::Exhibitor, name, Utc::now());
        Exhibitor::new(id, "f1", name)
    }

    fn meeting(exhibitor_id: &RecordId, date_time: &str) -> Meeting {
        let id = RecordId::generate(RecordKind::Meeting, date_time, Utc::now());
        Meeting::new(id, "f1", exhibitor_id.clone(), date_time)
    }

    fn task(description: &str) -> Task {
        let id = RecordId::generate(RecordKind::Task, description, Utc::now());
        Task::new(id, "f1", description)
    }

    #[test]
    fn absent_fair_yields_empty_document() {
        let store = AgendaStore::new();
        let doc = store.document("never-seen");
        assert!(doc.is_empty());
    }

    #[test]
    fn replace_creates_fair_entry() {
        let mut store = AgendaStore::new();
        store.replace("f1", DocumentPatch::exhibitors(vec![exhibitor("Acme")]));

        assert_eq!(store.fair_count(), 1);
        assert_eq!(store.document("f1").exhibitors.len(), 1);
    }

    #[test]
    fn replace_leaves_omitted_collections_untouched() {
        let mut store = AgendaStore::new();
        store.replace("f1", DocumentPatch::exhibitors(vec![exhibitor("Acme")]));
        store.replace("f1", DocumentPatch::tasks(vec![task("follow up")]));

        let doc = store.document("f1");
        assert_eq!(doc.exhibitors.len(), 1);
        assert_eq!(doc.tasks.len(), 1);

        // Replacing tasks again swaps the whole collection
        store.replace("f1", DocumentPatch::tasks(vec![]));
        let doc = store.document("f1");
        assert_eq!(doc.exhibitors.len(), 1);
        assert!(doc.tasks.is_empty());
    }

    #[test]
    fn cascade_removes_exhibitor_and_its_meetings_only() {
        let mut store = AgendaStore::new();
        let acme = exhibitor("Acme");
        let other = exhibitor("Globex");
        let m1 = meeting(&acme.id, "2024-02-26T10:00");
        let m2 = meeting(&other.id, "2024-02-26T11:00");

        store.replace(
            "f1",
            DocumentPatch {
                exhibitors: Some(vec![acme.clone(), other.clone()]),
                meetings: Some(vec![m1, m2.clone()]),
                tasks: None,
            },
        );

        let removed = store.delete_exhibitor_cascade("f1", &acme.id);
        assert_eq!(removed, 2);

        let doc = store.document("f1");
        assert_eq!(doc.exhibitors.len(), 1);
        assert_eq!(doc.exhibitors[0].id, other.id);
        assert_eq!(doc.meetings.len(), 1);
        assert_eq!(doc.meetings[0].id, m2.id);
    }

    #[test]
    fn cascade_on_unknown_fair_removes_nothing() {
        let mut store = AgendaStore::new();
        let id: RecordId = "x-0000000".parse().unwrap();
        assert_eq!(store.delete_exhibitor_cascade("nope", &id), 0);
    }

    #[test]
    fn set_meeting_status() {
        let mut store = AgendaStore::new();
        let acme = exhibitor("Acme");
        let m = meeting(&acme.id, "2024-02-26T10:00");
        let m_id = m.id.clone();

        store.replace(
            "f1",
            DocumentPatch {
                exhibitors: Some(vec![acme]),
                meetings: Some(vec![m]),
                tasks: None,
            },
        );

        assert!(store.set_meeting_status("f1", &m_id, MeetingStatus::Completed));
        assert_eq!(
            store.document("f1").meetings[0].status,
            MeetingStatus::Completed
        );

        let missing: RecordId = "m-0000000".parse().unwrap();
        assert!(!store.set_meeting_status("f1", &missing, MeetingStatus::Completed));
        assert!(!store.set_meeting_status("f2", &m_id, MeetingStatus::Completed));
    }

    #[test]
    fn toggle_task() {
        let mut store = AgendaStore::new();
        let t = task("send brochure");
        let t_id = t.id.clone();
        store.replace("f1", DocumentPatch::tasks(vec![t]));

        assert!(store.toggle_task("f1", &t_id));
        assert!(store.document("f1").tasks[0].completed);

        assert!(store.toggle_task("f1", &t_id));
        assert!(!store.document("f1").tasks[0].completed);

        let missing: RecordId = "t-0000000".parse().unwrap();
        assert!(!store.toggle_task("f1", &missing));
    }

    #[test]
    fn replace_all_overwrites_everything() {
        let mut store = AgendaStore::new();
        store.replace("f1", DocumentPatch::tasks(vec![task("old")]));

        let mut incoming = AgendaStore::new();
        incoming.replace("f2", DocumentPatch::tasks(vec![task("new")]));

        store.replace_all(incoming);
        assert!(store.document("f1").is_empty());
        assert_eq!(store.document("f2").tasks.len(), 1);
    }

    // The end-to-end flow: add exhibitor, add meeting, complete it,
    // then cascade-delete the exhibitor.
    #[test]
    fn organizer_scenario() {
        let mut store = AgendaStore::new();

        let acme = exhibitor("Acme");
        let acme_id = acme.id.clone();
        let mut doc = store.document("f1");
        doc.exhibitors.push(acme);
        store.replace("f1", DocumentPatch::exhibitors(doc.exhibitors));

        let m = meeting(&acme_id, "2024-02-26T10:00");
        let m_id = m.id.clone();
        let mut doc = store.document("f1");
        doc.meetings.push(m);
        store.replace("f1", DocumentPatch::meetings(doc.meetings));

        assert!(store.set_meeting_status("f1", &m_id, MeetingStatus::Completed));
        assert_eq!(
            store.document("f1").meetings[0].status,
            MeetingStatus::Completed
        );

        store.delete_exhibitor_cascade("f1", &acme_id);
        let doc = store.document("f1");
        assert!(doc.exhibitors.is_empty());
        assert!(doc.meetings.is_empty());
    }
}
