use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::io::workspace_io;

/// What a view knows about its file right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// No read has completed yet
    NotLoaded,
    Loaded(String),
    /// The latest read failed with this message
    Failed(String),
}

impl FetchState {
    pub fn data(&self) -> Option<&str> {
        match self {
            FetchState::Loaded(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchState::Loaded(_))
    }
}

/// Re-reads one workspace file on a fixed interval.
///
/// Each successful read replaces the previous text wholesale. A failed read
/// moves to [`FetchState::Failed`] but the last good text stays available
/// through [`FilePoller::last_data`].
#[derive(Debug)]
pub struct FilePoller {
    root: PathBuf,
    logical: String,
    interval: Duration,
    state: FetchState,
    last_data: Option<String>,
}

impl FilePoller {
    pub fn new(root: &Path, logical: &str, interval: Duration) -> Self {
        FilePoller {
            root: root.to_path_buf(),
            logical: logical.to_string(),
            interval,
            state: FetchState::NotLoaded,
            last_data: None,
        }
    }

    pub fn logical_path(&self) -> &str {
        &self.logical
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn last_data(&self) -> Option<&str> {
        self.last_data.as_deref()
    }

    /// Read the file once. Returns true if the state differs from before
    /// the call (new text, a new error, or recovery from an error).
    pub fn poll_once(&mut self) -> bool {
        let next = match workspace_io::read_file(&self.root, &self.logical) {
            Ok(text) => FetchState::Loaded(text),
            Err(e) => {
                tracing::warn!(path = %self.logical, error = %e, "poll failed");
                FetchState::Failed(e.to_string())
            }
        };

        if let FetchState::Loaded(ref text) = next {
            self.last_data = Some(text.clone());
        }
        let changed = next != self.state;
        if changed {
            tracing::debug!(path = %self.logical, "file state changed");
        }
        self.state = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_not_loaded_until_polled() {
        let tmp = TempDir::new().unwrap();
        let poller = FilePoller::new(tmp.path(), "TODO.md", Duration::from_millis(10));
        assert_eq!(poller.state(), &FetchState::NotLoaded);
        assert!(poller.state().data().is_none());
        assert!(poller.state().error().is_none());
    }

    #[test]
    fn test_poll_reports_changes() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("TODO.md"), "- [ ] one").unwrap();
        let mut poller = FilePoller::new(tmp.path(), "TODO.md", Duration::from_millis(10));

        assert!(poller.poll_once());
        assert_eq!(poller.state().data(), Some("- [ ] one"));
        assert!(!poller.poll_once());

        fs::write(tmp.path().join("TODO.md"), "- [x] one").unwrap();
        assert!(poller.poll_once());
        assert_eq!(poller.state().data(), Some("- [x] one"));
    }

    #[test]
    fn test_failure_distinct_from_not_loaded() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("TODO.md"), "- [ ] one").unwrap();
        let mut poller = FilePoller::new(tmp.path(), "TODO.md", Duration::from_millis(10));
        poller.poll_once();

        fs::remove_file(tmp.path().join("TODO.md")).unwrap();
        assert!(poller.poll_once());
        assert_eq!(poller.state().error(), Some("file not found: TODO.md"));
        assert!(!poller.state().is_loaded());
        assert_eq!(poller.last_data(), Some("- [ ] one"));

        // Same failure again is not a change
        assert!(!poller.poll_once());
    }
}
