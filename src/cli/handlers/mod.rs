mod watch;
pub use watch::cmd_watch;

use std::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::workspace_io::{self, WorkspaceError};
use crate::model::task::TaskStatus;
use crate::model::time_entry::TimeEntry;
use crate::model::workspace::Workspace;
use crate::ops::files::{parent_path, sort_listing};
use crate::ops::sections::{Section, TaskFilter, group_by_section};
use crate::ops::timeline::{DayGroup, EntryFilter, group_by_date, project_totals};
use crate::parse::{parse_tasks, parse_time_log};

pub type CmdResult = Result<(), Box<dyn Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let workspace = load_workspace(cli.workspace_dir.as_deref(), cli.config.as_deref())?;
    tracing::debug!(root = %workspace.root.display(), "workspace resolved");

    match cli.command {
        None => cmd_tasks(&workspace, TasksArgs::default(), json),
        Some(cmd) => match cmd {
            Commands::Tasks(args) => cmd_tasks(&workspace, args, json),
            Commands::Time(args) => cmd_time(&workspace, args, json),
            Commands::Doc(args) => cmd_doc(&workspace, args, json),
            Commands::Files(args) => cmd_files(&workspace, args, json),
            Commands::Read(args) => cmd_read(&workspace, args, json),
            Commands::Write(args) => cmd_write(&workspace, args),
            Commands::Rm(args) => cmd_rm(&workspace, args),
            Commands::Watch(args) => cmd_watch(&workspace, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_workspace(dir: Option<&str>, config: Option<&str>) -> Result<Workspace, Box<dyn Error>> {
    if let Some(config) = config {
        return Ok(config_io::load_config(Path::new(config))?);
    }
    let start: PathBuf = match dir {
        Some(dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
        None => std::env::current_dir().map_err(WorkspaceError::IoError)?,
    };
    Ok(config_io::load_or_default(&start)?)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse and group the task document for display
pub(crate) fn build_sections(workspace: &Workspace, text: &str, filter: &TaskFilter) -> Vec<Section> {
    let tasks = parse_tasks(text);
    let sections = group_by_section(&tasks, &workspace.config.ui.section_order);
    filter.apply(sections, workspace.config.ui.show_empty_sections)
}

fn filtered_entries(text: &str, filter: &EntryFilter) -> Vec<TimeEntry> {
    parse_time_log(text)
        .into_iter()
        .filter(|e| filter.matches(e))
        .collect()
}

/// Parse, filter, and group the time log for display
pub(crate) fn build_days(text: &str, filter: &EntryFilter, newest_first: bool) -> Vec<DayGroup> {
    group_by_date(&filtered_entries(text, filter), newest_first)
}

pub(crate) fn render_sections(sections: &[Section], json: bool) -> CmdResult {
    if json {
        let out: Vec<SectionJson> = sections.iter().map(SectionJson::from).collect();
        return print_json(&out);
    }
    if sections.is_empty() {
        println!("no tasks");
    } else {
        print_lines(&format_tasks_view(sections));
    }
    Ok(())
}

pub(crate) fn render_days(days: &[DayGroup], json: bool) -> CmdResult {
    if json {
        return print_json(days);
    }
    if days.is_empty() {
        println!("no time entries");
    } else {
        print_lines(&format_time_view(days));
    }
    Ok(())
}

fn task_filter(args: &TasksArgs) -> Result<TaskFilter, Box<dyn Error>> {
    let status = match args.status {
        Some(ref s) => Some(s.parse::<TaskStatus>()?),
        None => None,
    };
    Ok(TaskFilter {
        section: args.section.clone(),
        status,
    })
}

fn doc_path<'a>(workspace: &'a Workspace, name: Option<&str>) -> Result<&'a str, Box<dyn Error>> {
    workspace.agent_doc(name).ok_or_else(|| {
        format!(
            "unknown document '{}' (configured: {})",
            name.unwrap_or(""),
            workspace.config.files.agent_docs.join(", ")
        )
        .into()
    })
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

fn cmd_tasks(workspace: &Workspace, args: TasksArgs, json: bool) -> CmdResult {
    let filter = task_filter(&args)?;
    let text = workspace_io::read_file(&workspace.root, &workspace.config.files.tasks)?;
    render_sections(&build_sections(workspace, &text, &filter), json)
}

fn cmd_time(workspace: &Workspace, args: TimeArgs, json: bool) -> CmdResult {
    let filter = EntryFilter {
        date: args.date,
        project: args.project,
    };
    let newest_first = workspace.config.ui.newest_first && !args.oldest_first;
    let text = workspace_io::read_file(&workspace.root, &workspace.config.files.time_log)?;
    if args.by_project {
        return render_project_totals(&project_totals(&filtered_entries(&text, &filter)), json);
    }
    render_days(&build_days(&text, &filter, newest_first), json)
}

fn render_project_totals(totals: &[(String, f64)], json: bool) -> CmdResult {
    if json {
        let out: Vec<ProjectTotalJson> = totals
            .iter()
            .map(|(project, hours)| ProjectTotalJson {
                project,
                hours: *hours,
            })
            .collect();
        return print_json(&out);
    }
    if totals.is_empty() {
        println!("no time entries");
    } else {
        print_lines(&format_project_totals(totals));
    }
    Ok(())
}

fn cmd_doc(workspace: &Workspace, args: DocArgs, json: bool) -> CmdResult {
    if args.list {
        let docs: Vec<DocInfoJson> = workspace
            .config
            .files
            .agent_docs
            .iter()
            .map(|doc| DocInfoJson {
                name: doc.trim_end_matches(".md").to_string(),
                path: doc.clone(),
                exists: workspace_io::resolve(&workspace.root, doc)
                    .map(|p| p.is_file())
                    .unwrap_or(false),
            })
            .collect();
        if json {
            return print_json(&docs);
        }
        for doc in &docs {
            let marker = if doc.exists { ' ' } else { '!' };
            println!("{} {}", marker, doc.path);
        }
        return Ok(());
    }

    let path = doc_path(workspace, args.name.as_deref())?;
    let content = workspace_io::read_file(&workspace.root, path)?;
    if json {
        return print_json(&FileContentJson {
            path,
            content: &content,
        });
    }
    print!("{}", content);
    if !content.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn cmd_files(workspace: &Workspace, args: FilesArgs, json: bool) -> CmdResult {
    let mut files = workspace_io::list_files(&workspace.root, &args.path)?;
    sort_listing(&mut files);
    if json {
        return print_json(&files);
    }
    if !args.path.trim_matches('/').is_empty() {
        println!("{}", format_parent_line(&parent_path(&args.path)));
    }
    for file in &files {
        println!("{}", format_file_line(file));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// File pass-through
// ---------------------------------------------------------------------------

fn cmd_read(workspace: &Workspace, args: ReadArgs, json: bool) -> CmdResult {
    let content = workspace_io::read_file(&workspace.root, &args.path)?;
    if json {
        return print_json(&FileContentJson {
            path: &args.path,
            content: &content,
        });
    }
    print!("{}", content);
    Ok(())
}

fn cmd_write(workspace: &Workspace, args: WriteArgs) -> CmdResult {
    let content = match args.content {
        Some(content) => content,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    workspace_io::write_file(&workspace.root, &args.path, &content)?;
    println!("wrote {}", args.path);
    Ok(())
}

fn cmd_rm(workspace: &Workspace, args: RmArgs) -> CmdResult {
    workspace_io::delete_file(&workspace.root, &args.path)?;
    println!("deleted {}", args.path);
    Ok(())
}
