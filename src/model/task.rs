use serde::Serialize;

/// Section a task lands in when no `## Heading` precedes it
pub const DEFAULT_SECTION: &str = "Inbox";

/// Task checkbox state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// The canonical character used inside the checkbox `[ ]`
    pub fn checkbox_char(self) -> char {
        match self {
            TaskStatus::Todo => ' ',
            TaskStatus::InProgress => '/',
            TaskStatus::Done => 'x',
        }
    }

    /// Parse a checkbox character into a status
    pub fn from_checkbox_char(c: char) -> Option<TaskStatus> {
        match c {
            ' ' => Some(TaskStatus::Todo),
            '/' => Some(TaskStatus::InProgress),
            'x' | 'X' => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// Name as written on the command line and in JSON
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            _ => Err(format!(
                "unknown status '{}' (expected: todo, in-progress, done)",
                s
            )),
        }
    }
}

/// A task parsed from a checkbox line of the task document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Generated at parse time; not stable across re-parses
    pub id: String,
    /// Display text with `(Due ...)` and `(completed ...)` stripped
    pub content: String,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    /// Nearest preceding `## Heading`, or [`DEFAULT_SECTION`]
    pub section: String,
}

impl Task {
    /// Create a task with a fresh id and no annotations
    pub fn new(status: TaskStatus, content: impl Into<String>, section: impl Into<String>) -> Self {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            status,
            due_date: None,
            completed_date: None,
            section: section.into(),
        }
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
            && self.status == other.status
            && self.due_date == other.due_date
            && self.completed_date == other.completed_date
            && self.section == other.section
    }
}

impl Eq for Task {}
