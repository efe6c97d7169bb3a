use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::model::time_entry::TimeEntry;

/// All entries logged on one date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGroup {
    pub date: String,
    pub total_hours: f64,
    pub entries: Vec<TimeEntry>,
}

/// Time entry filter for the time view
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub date: Option<String>,
    /// Case-insensitive project name
    pub project: Option<String>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        if let Some(ref date) = self.date
            && entry.date != *date
        {
            return false;
        }
        if let Some(ref project) = self.project
            && !entry.project.eq_ignore_ascii_case(project)
        {
            return false;
        }
        true
    }
}

/// Group entries by date. With `newest_first` the file order is reversed
/// before grouping, so an append-only log reads latest day first. Days keep
/// the order in which they are first seen.
pub fn group_by_date(entries: &[TimeEntry], newest_first: bool) -> Vec<DayGroup> {
    let mut ordered: Vec<&TimeEntry> = entries.iter().collect();
    if newest_first {
        ordered.reverse();
    }

    let mut days: IndexMap<&str, Vec<TimeEntry>> = IndexMap::new();
    for entry in ordered {
        days.entry(entry.date.as_str())
            .or_default()
            .push(entry.clone());
    }

    days.into_iter()
        .map(|(date, entries)| DayGroup {
            date: date.to_string(),
            total_hours: total_hours(&entries),
            entries,
        })
        .collect()
}

pub fn total_hours(entries: &[TimeEntry]) -> f64 {
    entries.iter().map(|e| e.duration_hours).sum()
}

/// Hours per project, in order of first appearance
pub fn project_totals(entries: &[TimeEntry]) -> Vec<(String, f64)> {
    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for entry in entries {
        *totals.entry(entry.project.as_str()).or_insert(0.0) += entry.duration_hours;
    }
    totals
        .into_iter()
        .map(|(project, hours)| (project.to_string(), hours))
        .collect()
}

/// Render `2026-02-17` as `Tuesday, Feb 17, 2026`. Anything that isn't a
/// calendar date comes back unchanged.
pub fn format_date_heading(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
