use chrono::{DateTime, Local};
use serde::Serialize;

use crate::model::file_entry::WorkspaceFile;
use crate::model::task::Task;
use crate::model::time_entry::TimeEntry;
use crate::ops::files::format_size;
use crate::ops::sections::{Section, StatusCounts};
use crate::ops::timeline::{DayGroup, format_date_heading};
use crate::util::unicode::{display_width, pad_to_width, truncate_to_width};

/// Notes longer than this are cut with `…` in the time view
const NOTES_MAX_WIDTH: usize = 60;

/// Width of an `HH:MM-HH:MM` interval column
const INTERVAL_WIDTH: usize = 11;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct SectionJson<'a> {
    pub name: &'a str,
    pub counts: StatusCounts,
    pub tasks: &'a [Task],
}

impl<'a> From<&'a Section> for SectionJson<'a> {
    fn from(section: &'a Section) -> Self {
        SectionJson {
            name: &section.name,
            counts: section.counts(),
            tasks: &section.tasks,
        }
    }
}

#[derive(Serialize)]
pub struct FileContentJson<'a> {
    pub path: &'a str,
    pub content: &'a str,
}

#[derive(Serialize)]
pub struct ProjectTotalJson<'a> {
    pub project: &'a str,
    pub hours: f64,
}

#[derive(Serialize)]
pub struct DocInfoJson {
    pub name: String,
    pub path: String,
    pub exists: bool,
}

// ---------------------------------------------------------------------------
// Tasks view
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    let mut line = format!("[{}] {}", task.status.checkbox_char(), task.content);
    if let Some(ref due) = task.due_date {
        line.push_str(&format!("  due: {}", due));
    }
    if let Some(ref completed) = task.completed_date {
        line.push_str(&format!("  completed: {}", completed));
    }
    line
}

pub fn format_section_header(section: &Section) -> String {
    format!("== {} ({}) ==", section.name, section.tasks.len())
}

/// Format grouped sections, a blank line between each
pub fn format_tasks_view(sections: &[Section]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format_section_header(section));
        lines.extend(section.tasks.iter().map(format_task_line));
    }
    lines
}

// ---------------------------------------------------------------------------
// Time view
// ---------------------------------------------------------------------------

pub fn format_day_header(day: &DayGroup) -> String {
    format!(
        "== {} ({:.1} hrs) ==",
        format_date_heading(&day.date),
        day.total_hours
    )
}

/// Format one entry with its project padded to `project_width` cells
pub fn format_entry_line(entry: &TimeEntry, project_width: usize) -> String {
    let interval = if entry.has_interval() {
        format!("{}-{}", entry.start_local, entry.end_local)
    } else {
        String::new()
    };
    let line = format!(
        "  {}  {}  {:>6}  {}",
        pad_to_width(&entry.project, project_width),
        pad_to_width(&interval, INTERVAL_WIDTH),
        format!("{:.2}h", entry.duration_hours),
        truncate_to_width(&entry.notes, NOTES_MAX_WIDTH),
    );
    line.trim_end().to_string()
}

/// Format the timeline, one block per day
pub fn format_time_view(days: &[DayGroup]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, day) in days.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format_day_header(day));
        let width = day
            .entries
            .iter()
            .map(|e| display_width(&e.project))
            .max()
            .unwrap_or(0);
        lines.extend(day.entries.iter().map(|e| format_entry_line(e, width)));
    }
    lines
}

/// Per-project totals under one header, largest column width wins
pub fn format_project_totals(totals: &[(String, f64)]) -> Vec<String> {
    let all: f64 = totals.iter().map(|(_, hours)| hours).sum();
    let width = totals
        .iter()
        .map(|(project, _)| display_width(project))
        .max()
        .unwrap_or(0);
    let mut lines = vec![format!("== Projects ({:.1} hrs) ==", all)];
    lines.extend(totals.iter().map(|(project, hours)| {
        format!(
            "  {}  {:>7}",
            pad_to_width(project, width),
            format!("{:.2}h", hours)
        )
    }));
    lines
}

// ---------------------------------------------------------------------------
// Files view
// ---------------------------------------------------------------------------

fn format_modified(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .filter(|&s| s > 0)
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// The `../` row shown above a subdirectory listing
pub fn format_parent_line(parent: &str) -> String {
    let target = if parent.is_empty() { "." } else { parent };
    format!("{:<4}  {:>9}  {:<16}  ../ -> {}", "dir", "-", "-", target)
}

pub fn format_file_line(file: &WorkspaceFile) -> String {
    let (kind, size, name) = if file.is_dir {
        ("dir", "-".to_string(), format!("{}/", file.name))
    } else {
        ("file", format_size(file.size), file.name.clone())
    };
    format!(
        "{:<4}  {:>9}  {:<16}  {}",
        kind,
        size,
        format_modified(file.modified),
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::sections::group_by_section;
    use crate::ops::timeline::{group_by_date, project_totals};
    use crate::parse::{parse_tasks, parse_time_log};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tasks_view() {
        let tasks = parse_tasks(
            "\
# TODO

## Inbox
- [ ] Send a draft (Due today)

## In Progress
- [/] Initialize app

## Completed
- [x] Grant access (completed 2026-02-19)
",
        );
        let order = vec!["In Progress".to_string(), "Inbox".to_string()];
        let output = format_tasks_view(&group_by_section(&tasks, &order)).join("\n");
        assert_snapshot!(output, @r"
        == In Progress (1) ==
        [/] Initialize app

        == Inbox (1) ==
        [ ] Send a draft  due: today

        == Completed (1) ==
        [x] Grant access  completed: 2026-02-19
        ");
    }

    #[test]
    fn test_time_view() {
        let entries = parse_time_log(
            "\
date,project,start_local,end_local,duration_minutes,duration_hours,overlaps,notes
2026-02-17,Quest,06:30,16:40,610,10.17,No,Initial Dev
2026-02-18,Superhuman,,,180,3,No,Added +3h
2026-02-18,VMi,,,60,1.00,No,New project tracked
",
        );
        let lines = format_time_view(&group_by_date(&entries, true));
        assert_eq!(
            lines,
            vec![
                "== Wednesday, Feb 18, 2026 (4.0 hrs) ==".to_string(),
                format!("  VMi{}  {}   1.00h  New project tracked", " ".repeat(7), " ".repeat(11)),
                format!("  Superhuman  {}   3.00h  Added +3h", " ".repeat(11)),
                String::new(),
                "== Tuesday, Feb 17, 2026 (10.2 hrs) ==".to_string(),
                "  Quest  06:30-16:40  10.17h  Initial Dev".to_string(),
            ]
        );
    }

    #[test]
    fn test_entry_without_notes_has_no_trailing_space() {
        let entries = parse_time_log("h\n2026-02-18,VMi,09:00,10:00,60,1,No");
        let line = format_entry_line(&entries[0], 3);
        assert_eq!(line, "  VMi  09:00-10:00   1.00h");
    }

    #[test]
    fn test_project_totals_view() {
        let entries = parse_time_log(
            "\
h
2026-02-17,Quest,06:30,16:40,610,10.5,No,
2026-02-18,VMi,,,60,1,No,
2026-02-18,Quest,,,30,0.5,No,
",
        );
        let output = format_project_totals(&project_totals(&entries)).join("\n");
        assert_snapshot!(output, @r"
        == Projects (12.0 hrs) ==
          Quest   11.00h
          VMi      1.00h
        ");
    }

    #[test]
    fn test_parent_line() {
        assert!(format_parent_line("").ends_with("../ -> ."));
        assert!(format_parent_line("time").ends_with("../ -> time"));
    }

    #[test]
    fn test_file_line() {
        let dir = WorkspaceFile {
            name: "time".to_string(),
            path: "time".to_string(),
            size: 4096,
            modified: 0,
            is_dir: true,
        };
        assert_eq!(
            format_file_line(&dir),
            format!("dir   {:>9}  {:<16}  time/", "-", "-")
        );
    }
}
