use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// A file system watcher for the workspace root.
pub struct WorkspaceWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<Vec<PathBuf>>,
}

/// Files the views care about: workspace docs, the time log, and config
fn is_relevant(path: &Path) -> bool {
    // Skip temp files left by atomic writes
    if let Some(name) = path.file_name().and_then(|n| n.to_str())
        && name.starts_with(".tmp")
    {
        return false;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md") | Some("csv") | Some("toml")
    )
}

impl WorkspaceWatcher {
    /// Start watching `root` recursively.
    pub fn start(root: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let root_owned = root.to_path_buf();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(e) => {
                        tracing::warn!(error = %e, "watch error");
                        return;
                    }
                };

                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }

                let relevant: Vec<PathBuf> = event
                    .paths
                    .into_iter()
                    .filter(|p| p.starts_with(&root_owned) && is_relevant(p))
                    .collect();

                if !relevant.is_empty() {
                    let _ = tx.send(relevant);
                }
            },
            Config::default(),
        )?;

        watcher.watch(root, RecursiveMode::Recursive)?;
        Ok(WorkspaceWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Block until a change arrives or `timeout` elapses, then drain
    /// everything queued. Returns the changed paths (empty on timeout).
    pub fn wait(&self, timeout: Duration) -> Vec<PathBuf> {
        let mut changed = match self.rx.recv_timeout(timeout) {
            Ok(paths) => paths,
            Err(_) => return Vec::new(),
        };
        while let Ok(paths) = self.rx.try_recv() {
            changed.extend(paths);
        }
        changed.sort();
        changed.dedup();
        changed
    }
}
