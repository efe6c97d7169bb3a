use plaindeck::model::task::TaskStatus;
use plaindeck::ops::sections::group_by_section;
use plaindeck::ops::timeline::group_by_date;
use plaindeck::parse::{parse_tasks, parse_time_log};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Could not read fixture {}: {}", name, e))
}

#[test]
fn todo_fixture_tasks() {
    let tasks = parse_tasks(&fixture("TODO.md"));
    let summary: Vec<(&str, TaskStatus, &str)> = tasks
        .iter()
        .map(|t| (t.section.as_str(), t.status, t.content.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Inbox", TaskStatus::Todo, "Triage the overnight alerts"),
            (
                "Inbox",
                TaskStatus::Todo,
                "Send Jenn a draft for Anil about our approach"
            ),
            ("Inbox", TaskStatus::Todo, "Book travel"),
            ("In Progress", TaskStatus::InProgress, "Initialize the desktop app"),
            ("In Progress", TaskStatus::InProgress, "Wire up the file poller"),
            ("Urgent / Scheduled", TaskStatus::Todo, "Renew the certificate  #ops"),
            ("Completed", TaskStatus::Done, "Brent's Salesforce access"),
            ("Completed", TaskStatus::Done, "Close the Q4 books"),
        ]
    );

    assert_eq!(tasks[1].due_date.as_deref(), Some("today"));
    assert_eq!(tasks[2].due_date.as_deref(), Some("2026-03-02"));
    assert_eq!(tasks[5].due_date.as_deref(), Some("Friday"));
    assert_eq!(tasks[7].completed_date.as_deref(), Some("2026-01-05"));
    assert_eq!(tasks[7].due_date.as_deref(), Some("2026-01-03"));
}

#[test]
fn todo_fixture_sections() {
    let tasks = parse_tasks(&fixture("TODO.md"));
    let order: Vec<String> = ["In Progress", "Urgent / Scheduled", "Inbox", "This week"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let sections = group_by_section(&tasks, &order);
    let names: Vec<(&str, usize)> = sections
        .iter()
        .map(|s| (s.name.as_str(), s.tasks.len()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("In Progress", 2),
            ("Urgent / Scheduled", 1),
            ("Inbox", 3),
            ("Completed", 2),
        ]
    );
}

#[test]
fn time_log_fixture_entries() {
    let entries = parse_time_log(&fixture("time_log.csv"));
    assert_eq!(entries.len(), 4);

    assert_eq!(entries[0].project, "Quest");
    assert_eq!(entries[0].duration_minutes, 610);

    assert_eq!(entries[2].project, "Unknown");
    assert_eq!(entries[2].duration_minutes, 0);
    assert_eq!(entries[2].duration_hours, 0.0);
    assert_eq!(entries[2].notes, "no project, bad numbers");

    assert_eq!(entries[3].notes, "New project tracked, with a comma, or two");
}

#[test]
fn time_log_fixture_days() {
    let entries = parse_time_log(&fixture("time_log.csv"));
    let days = group_by_date(&entries, true);
    let summary: Vec<(&str, usize)> = days
        .iter()
        .map(|d| (d.date.as_str(), d.entries.len()))
        .collect();
    assert_eq!(
        summary,
        vec![("2026-02-19", 1), ("2026-02-18", 2), ("2026-02-17", 1)]
    );
    assert_eq!(days[1].total_hours, 3.0);
}
