use std::path::PathBuf;
use std::time::Duration;

use super::config::WorkspaceConfig;

/// A resolved workspace: where the files live and how to present them
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Absolute or cwd-relative directory every logical path resolves under
    pub root: PathBuf,
    pub config: WorkspaceConfig,
    /// The plaindeck.toml this came from, if any
    pub config_path: Option<PathBuf>,
}

impl Workspace {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.config.workspace.poll_interval_ms.max(1))
    }

    /// Look up a configured agent doc by file name or stem, case-insensitive.
    /// `None` picks the first configured doc.
    pub fn agent_doc(&self, name: Option<&str>) -> Option<&str> {
        let docs = &self.config.files.agent_docs;
        match name {
            None => docs.first().map(|s| s.as_str()),
            Some(name) => docs
                .iter()
                .find(|doc| {
                    doc.eq_ignore_ascii_case(name)
                        || doc
                            .rsplit('/')
                            .next()
                            .and_then(|file| file.strip_suffix(".md"))
                            .is_some_and(|stem| stem.eq_ignore_ascii_case(name))
                })
                .map(|s| s.as_str()),
        }
    }
}
