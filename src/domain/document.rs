//! Per-fair document: the three record collections scoped to one fair

use serde::{Deserialize, Serialize};

use super::exhibitor::Exhibitor;
use super::id::RecordId;
use super::meeting::Meeting;
use super::task::Task;

/// Placeholder shown for a meeting whose exhibitor reference dangles
pub const UNKNOWN_EXHIBITOR: &str = "unknown exhibitor";

/// The triple of collections belonging to one fair
///
/// Collections missing on the wire deserialize as empty, so trimmed or
/// forward-compatible backups load without complaint. Collection order
/// is preserved end to end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FairDocument {
    pub exhibitors: Vec<Exhibitor>,
    pub meetings: Vec<Meeting>,
    pub tasks: Vec<Task>,
}

impl FairDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibitors.is_empty() && self.meetings.is_empty() && self.tasks.is_empty()
    }

    pub fn exhibitor(&self, id: &RecordId) -> Option<&Exhibitor> {
        self.exhibitors.iter().find(|e| &e.id == id)
    }

    pub fn meeting(&self, id: &RecordId) -> Option<&Meeting> {
        self.meetings.iter().find(|m| &m.id == id)
    }

    pub fn task(&self, id: &RecordId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Name to display for a meeting's exhibitor reference
    ///
    /// Dangling references degrade to a placeholder instead of failing:
    /// only explicit exhibitor deletion cascades onto meetings, so a
    /// reference left behind by anything else must still render.
    pub fn exhibitor_name(&self, id: &RecordId) -> &str {
        self.exhibitor(id)
            .map(|e| e.name.as_str())
            .unwrap_or(UNKNOWN_EXHIBITOR)
    }

    /// Number of tasks still open
    pub fn open_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Meetings ordered by date-time (ISO-local strings sort chronologically)
    pub fn meetings_by_time(&self) -> Vec<&Meeting> {
        let mut meetings: Vec<&Meeting> = self.meetings.iter().collect();
        meetings.sort_by(|a, b| a.date_time.cmp(&b.date_time));
        meetings
    }

    /// Tasks with open ones first, preserving relative order within each group
    pub fn tasks_open_first(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        tasks.sort_by_key(|t| t.completed);
        tasks
    }
}
