use indexmap::IndexMap;
use serde::Serialize;

use crate::model::task::{Task, TaskStatus};

/// Tasks sharing one `## Heading`, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub tasks: Vec<Task>,
}

/// Per-status task counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }
}

impl Section {
    pub fn counts(&self) -> StatusCounts {
        count_statuses(&self.tasks)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Group tasks by section. Sections named in `order` come first, in that
/// order; the rest follow in order of first appearance. Task order within a
/// section is unchanged.
pub fn group_by_section(tasks: &[Task], order: &[String]) -> Vec<Section> {
    let mut groups: IndexMap<&str, Vec<Task>> = IndexMap::new();
    for task in tasks {
        groups
            .entry(task.section.as_str())
            .or_default()
            .push(task.clone());
    }

    let mut sections: Vec<Section> = groups
        .into_iter()
        .map(|(name, tasks)| Section {
            name: name.to_string(),
            tasks,
        })
        .collect();

    // sort_by_key is stable, so unranked sections keep appearance order
    sections.sort_by_key(|s| section_rank(&s.name, order));
    sections
}

fn section_rank(name: &str, order: &[String]) -> usize {
    order
        .iter()
        .position(|o| o == name)
        .unwrap_or(usize::MAX)
}

/// Task filter for the tasks view
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Exact section name, case-insensitive
    pub section: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(ref section) = self.section
            && !task.section.eq_ignore_ascii_case(section)
        {
            return false;
        }
        if let Some(status) = self.status
            && task.status != status
        {
            return false;
        }
        true
    }

    /// Drop non-matching tasks from each section, keeping the sections.
    /// Sections left empty are removed unless `keep_empty` is set.
    pub fn apply(&self, sections: Vec<Section>, keep_empty: bool) -> Vec<Section> {
        sections
            .into_iter()
            .filter(|s| {
                self.section
                    .as_ref()
                    .is_none_or(|name| s.name.eq_ignore_ascii_case(name))
            })
            .map(|mut s| {
                s.tasks.retain(|t| self.matches(t));
                s
            })
            .filter(|s| keep_empty || !s.is_empty())
            .collect()
    }
}

pub fn count_statuses(tasks: &[Task]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in tasks {
        match task.status {
            TaskStatus::Todo => counts.todo += 1,
            TaskStatus::InProgress => counts.in_progress += 1,
            TaskStatus::Done => counts.done += 1,
        }
    }
    counts
}
