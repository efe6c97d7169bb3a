use std::time::Duration;

use crate::cli::commands::{WatchArgs, WatchView};
use crate::io::poller::{FetchState, FilePoller};
use crate::io::watcher::WorkspaceWatcher;
use crate::model::workspace::Workspace;
use crate::ops::sections::TaskFilter;
use crate::ops::timeline::EntryFilter;

use super::{CmdResult, build_days, build_sections, doc_path, render_days, render_sections};

/// Poll the view's file and re-render whenever it changes. File system
/// events wake the loop early; the poll interval bounds the wait otherwise.
pub fn cmd_watch(workspace: &Workspace, args: WatchArgs, json: bool) -> CmdResult {
    let logical = match args.view {
        WatchView::Tasks => workspace.config.files.tasks.clone(),
        WatchView::Time => workspace.config.files.time_log.clone(),
        WatchView::Doc => doc_path(workspace, args.doc.as_deref())?.to_string(),
    };
    let interval = args
        .interval_ms
        .map(|ms| Duration::from_millis(ms.max(1)))
        .unwrap_or_else(|| workspace.poll_interval());

    let mut poller = FilePoller::new(&workspace.root, &logical, interval);
    let watcher = if args.once {
        None
    } else {
        match WorkspaceWatcher::start(&workspace.root) {
            Ok(w) => Some(w),
            Err(e) => {
                tracing::warn!(error = %e, "file watcher unavailable, polling only");
                None
            }
        }
    };

    tracing::info!(path = %logical, interval_ms = interval.as_millis() as u64, "watching");
    loop {
        if poller.poll_once() {
            render(workspace, args.view, &poller, json, !args.once)?;
        }
        if args.once {
            return Ok(());
        }
        match watcher {
            Some(ref w) => {
                let changed = w.wait(poller.interval());
                if !changed.is_empty() {
                    tracing::debug!(count = changed.len(), "change events");
                }
            }
            None => std::thread::sleep(poller.interval()),
        }
    }
}

fn render(
    workspace: &Workspace,
    view: WatchView,
    poller: &FilePoller,
    json: bool,
    clear: bool,
) -> CmdResult {
    let text = match poller.state() {
        FetchState::NotLoaded => {
            println!("loading {}...", poller.logical_path());
            return Ok(());
        }
        FetchState::Failed(msg) => {
            eprintln!("error reading {}: {}", poller.logical_path(), msg);
            return Ok(());
        }
        FetchState::Loaded(text) => text,
    };

    if clear && !json {
        print!("\x1b[2J\x1b[H");
    }
    match view {
        WatchView::Tasks => render_sections(
            &build_sections(workspace, text, &TaskFilter::default()),
            json,
        ),
        WatchView::Time => render_days(
            &build_days(text, &EntryFilter::default(), workspace.config.ui.newest_first),
            json,
        ),
        WatchView::Doc => {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
