use serde::Deserialize;
use std::path::PathBuf;

/// Configuration from plaindeck.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub workspace: WorkspaceSection,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceSection {
    /// Workspace directory. Relative paths resolve against the config file's
    /// directory; absent means the config file's directory itself.
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WorkspaceSection {
    fn default() -> Self {
        WorkspaceSection {
            root: None,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    2000
}

/// Logical paths of the files each view reads
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_tasks_file")]
    pub tasks: String,
    #[serde(default = "default_time_log_file")]
    pub time_log: String,
    #[serde(default = "default_agent_docs")]
    pub agent_docs: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            tasks: default_tasks_file(),
            time_log: default_time_log_file(),
            agent_docs: default_agent_docs(),
        }
    }
}

fn default_tasks_file() -> String {
    "TODO.md".to_string()
}

fn default_time_log_file() -> String {
    "time/time_log.csv".to_string()
}

fn default_agent_docs() -> Vec<String> {
    ["SOUL.md", "HEARTBEAT.md", "MEMORY.md", "AGENTS.md"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Sections listed first, in this order. Others follow in document order.
    #[serde(default = "default_section_order")]
    pub section_order: Vec<String>,
    /// Show the time log newest day first (the CSV is appended chronologically)
    #[serde(default = "default_true")]
    pub newest_first: bool,
    /// Print section headings that matched no tasks after filtering
    #[serde(default)]
    pub show_empty_sections: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            section_order: default_section_order(),
            newest_first: true,
            show_empty_sections: false,
        }
    }
}

fn default_section_order() -> Vec<String> {
    ["In Progress", "Urgent / Scheduled", "Inbox", "This week"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}
