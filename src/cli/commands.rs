use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pd", about = concat!("plaindeck v", env!("CARGO_PKG_VERSION"), " - your workspace, read from plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different workspace directory
    #[arg(short = 'C', long = "workspace", global = true)]
    pub workspace_dir: Option<String>,

    /// Use this config file instead of searching for plaindeck.toml
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show tasks grouped by section (the default view)
    Tasks(TasksArgs),
    /// Show the time log grouped by day
    Time(TimeArgs),
    /// Print an agent state document
    Doc(DocArgs),
    /// List a workspace directory
    Files(FilesArgs),
    /// Print a workspace file
    Read(ReadArgs),
    /// Replace a workspace file's contents
    Write(WriteArgs),
    /// Delete a workspace file or directory
    Rm(RmArgs),
    /// Re-render a view whenever its file changes
    Watch(WatchArgs),
}

#[derive(Args, Default)]
pub struct TasksArgs {
    /// Only this section (case-insensitive)
    #[arg(long)]
    pub section: Option<String>,
    /// Filter by status (todo, in-progress, done)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Default)]
pub struct TimeArgs {
    /// Only entries on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Only entries for this project (case-insensitive)
    #[arg(long)]
    pub project: Option<String>,
    /// Show days in file order instead of newest first
    #[arg(long)]
    pub oldest_first: bool,
    /// Show hours per project instead of the day-by-day timeline
    #[arg(long)]
    pub by_project: bool,
}

#[derive(Args, Default)]
pub struct DocArgs {
    /// Document name or file (default: the first configured doc)
    pub name: Option<String>,
    /// List the configured documents instead
    #[arg(long)]
    pub list: bool,
}

#[derive(Args)]
pub struct FilesArgs {
    /// Directory to list (default: workspace root)
    #[arg(default_value = "")]
    pub path: String,
}

#[derive(Args)]
pub struct ReadArgs {
    /// Logical path of the file
    pub path: String,
}

#[derive(Args)]
pub struct WriteArgs {
    /// Logical path of the file
    pub path: String,
    /// New contents (default: read from stdin)
    #[arg(long)]
    pub content: Option<String>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Logical path to delete
    pub path: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum WatchView {
    #[default]
    Tasks,
    Time,
    Doc,
}

#[derive(Args)]
pub struct WatchArgs {
    /// View to render
    #[arg(value_enum, default_value_t = WatchView::Tasks)]
    pub view: WatchView,
    /// Document to show for the doc view
    #[arg(long)]
    pub doc: Option<String>,
    /// Override the configured poll interval
    #[arg(long)]
    pub interval_ms: Option<u64>,
    /// Render a single cycle and exit
    #[arg(long)]
    pub once: bool,
}
