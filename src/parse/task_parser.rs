use std::sync::LazyLock;

use regex::Regex;

use crate::model::task::{DEFAULT_SECTION, Task, TaskStatus};

/// `## Section Name`
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s+(.+)$").unwrap());

/// `- [ ] text`, `- [x] text`, `- [/] text`, optionally indented
static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s+\[([ xX/])\]\s+(.+)$").unwrap());

static DUE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\(due ([^)]+)\)").unwrap());

static COMPLETED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(completed ([^)]+)\)").unwrap());

/// Every annotation, for stripping from the display text
static ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\((?:due|completed) [^)]+\)").unwrap());

/// Parse a task document into tasks in document order.
///
/// Each `## Heading` line starts a new section; checkbox items before the
/// first heading go to [`DEFAULT_SECTION`]. Lines that are neither headings
/// nor checkbox items are ignored, so a half-typed line never fails the parse.
pub fn parse_tasks(source: &str) -> Vec<Task> {
    let mut tasks = Vec::new();
    let mut section = DEFAULT_SECTION.to_string();

    for line in source.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(caps) = HEADING_RE.captures(line) {
            section = caps[1].trim().to_string();
            continue;
        }

        if let Some(task) = parse_item_line(line, &section) {
            tasks.push(task);
        }
    }

    tasks
}

/// Parse a single checkbox line. Returns `None` when the line isn't an item
/// or its marker isn't one of ` `, `x`, `X`, `/`.
fn parse_item_line(line: &str, section: &str) -> Option<Task> {
    let caps = ITEM_RE.captures(line)?;
    let marker = caps[1].chars().next()?;
    let status = TaskStatus::from_checkbox_char(marker)?;
    let text = caps[2].trim();

    let due_date = DUE_RE.captures(text).map(|c| c[1].to_string());
    let completed_date = COMPLETED_RE.captures(text).map(|c| c[1].to_string());
    let content = ANNOTATION_RE.replace_all(text, "").trim().to_string();

    let mut task = Task::new(status, content, section);
    task.due_date = due_date;
    task.completed_date = completed_date;
    Some(task)
}
