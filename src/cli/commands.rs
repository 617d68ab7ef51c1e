use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tf", about = concat!("taskflow v", env!("CARGO_PKG_VERSION"), " - your tasks stay on your machine"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a taskflow workspace in the current directory
    Init(InitArgs),
    /// List tasks with the active filters
    List(ListArgs),
    /// Add a task
    Add(AddArgs),
    /// Edit an existing task's fields
    Edit(EditArgs),
    /// Toggle a task's completion state
    Toggle(ToggleArgs),
    /// Delete a task
    Rm(RmArgs),
    /// Delete all completed tasks
    Clear(ClearArgs),
    /// Manage projects
    Project(ProjectCmd),
    /// Export tasks to a JSON file
    Export(ExportArgs),
    /// Import tasks from a JSON file (replaces the current tasks)
    Import(ImportArgs),
    /// Show task totals and progress
    Stats,
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Reinitialize even if .taskflow/ already exists
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Filter by project ID (default: all)
    #[arg(long)]
    pub project: Option<String>,
    /// Filter by status (all, pending, completed, today)
    #[arg(long)]
    pub status: Option<String>,
    /// Case-insensitive search over title and description
    #[arg(long)]
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Description
    #[arg(long)]
    pub desc: Option<String>,
    /// Due date (YYYY-MM-DD, or "none"; default: today)
    #[arg(long)]
    pub due: Option<String>,
    /// Priority (high, medium, low)
    #[arg(long)]
    pub priority: Option<String>,
    /// Project ID
    #[arg(long)]
    pub project: Option<String>,
    /// Create the task already completed
    #[arg(long)]
    pub completed: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description
    #[arg(long)]
    pub desc: Option<String>,
    /// New due date (YYYY-MM-DD, or "none" to clear)
    #[arg(long)]
    pub due: Option<String>,
    /// New priority (high, medium, low)
    #[arg(long)]
    pub priority: Option<String>,
    /// New project ID
    #[arg(long)]
    pub project: Option<String>,
    /// Mark completed
    #[arg(long, conflicts_with = "pending")]
    pub done: bool,
    /// Mark not completed
    #[arg(long)]
    pub pending: bool,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task ID
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

// ---------------------------------------------------------------------------
// Project args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ProjectCmd {
    #[command(subcommand)]
    pub command: ProjectCommands,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,
    /// Add a project (ID is derived from the name)
    Add(ProjectAddArgs),
}

#[derive(Args)]
pub struct ProjectAddArgs {
    /// Project display name
    pub name: String,
    /// Swatch color (hex)
    #[arg(long, default_value = "#1976d2")]
    pub color: String,
    /// Icon name
    #[arg(long, default_value = "fa-folder")]
    pub icon: String,
}

// ---------------------------------------------------------------------------
// Import / export args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ExportArgs {
    /// Output path (default: taskflow-tasks-<date>.json)
    pub file: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file to import
    pub file: String,
    /// Skip the replacement confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}
