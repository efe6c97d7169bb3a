use serde::Serialize;

/// Project label used when the CSV column is empty
pub const UNKNOWN_PROJECT: &str = "Unknown";

/// One data row of the time log
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    /// Generated at parse time; not stable across re-parses
    pub id: String,
    /// Usually `YYYY-MM-DD`; never validated
    pub date: String,
    pub project: String,
    pub start_local: String,
    pub end_local: String,
    pub duration_minutes: i64,
    pub duration_hours: f64,
    /// Free-form flag column (`Yes`/`No`), passed through as written
    pub overlaps: String,
    pub notes: String,
}

impl TimeEntry {
    /// Whether both ends of the interval were recorded
    pub fn has_interval(&self) -> bool {
        !self.start_local.is_empty() && !self.end_local.is_empty()
    }
}

impl PartialEq for TimeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
            && self.project == other.project
            && self.start_local == other.start_local
            && self.end_local == other.end_local
            && self.duration_minutes == other.duration_minutes
            && self.duration_hours == other.duration_hours
            && self.overlaps == other.overlaps
            && self.notes == other.notes
    }
}
