use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::interact::{AutoConfirm, Interaction, TerminalInteraction};
use crate::io::storage::DirStorage;
use crate::io::{config_io, workspace};
use crate::model::config::AppConfig;
use crate::model::task::Priority;
use crate::ops::editor::TaskEditor;
use crate::ops::{project_ops, task_ops, transfer};
use crate::query::{visible_tasks, Filter, StatusFilter};
use crate::store::DataStore;
use crate::view;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let dir = cli.dir.clone();

    match cli.command {
        // Init runs before workspace discovery
        Commands::Init(args) => cmd_init(args, dir.as_deref()),

        // Read commands
        Commands::List(args) => cmd_list(args, json, dir.as_deref()),
        Commands::Stats => cmd_stats(json, dir.as_deref()),

        // Write commands
        Commands::Add(args) => cmd_add(args, dir.as_deref()),
        Commands::Edit(args) => cmd_edit(args, dir.as_deref()),
        Commands::Toggle(args) => cmd_toggle(args, dir.as_deref()),
        Commands::Rm(args) => cmd_rm(args, dir.as_deref()),
        Commands::Clear(args) => cmd_clear(args, dir.as_deref()),

        // Projects
        Commands::Project(cmd) => match cmd.command {
            ProjectCommands::List => cmd_project_list(json, dir.as_deref()),
            ProjectCommands::Add(args) => cmd_project_add(args, dir.as_deref()),
        },

        // Interchange
        Commands::Export(args) => cmd_export(args, dir.as_deref()),
        Commands::Import(args) => cmd_import(args, dir.as_deref()),
    }
}

// ---------------------------------------------------------------------------
// Workspace plumbing
// ---------------------------------------------------------------------------

fn start_dir(dir_flag: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match dir_flag {
        Some(d) => Ok(fs::canonicalize(d)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", d, e))?),
        None => Ok(std::env::current_dir()?),
    }
}

fn load_store(
    dir_flag: Option<&str>,
) -> Result<(DataStore<DirStorage>, AppConfig), Box<dyn std::error::Error>> {
    let workspace_dir = workspace::discover_workspace(&start_dir(dir_flag)?)?;
    let config = config_io::read_config(&workspace_dir)?;
    let store = DataStore::load(DirStorage::new(workspace_dir))?;
    Ok((store, config))
}

fn interaction(skip_prompt: bool) -> Box<dyn Interaction> {
    if skip_prompt {
        Box::new(AutoConfirm::yes())
    } else {
        Box::new(TerminalInteraction)
    }
}

fn parse_due(s: &str) -> Result<Option<NaiveDate>, String> {
    if s.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("invalid due date '{}': expected YYYY-MM-DD or 'none'", s))
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    match s.to_lowercase().as_str() {
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        other => Err(format!(
            "invalid priority '{}': expected high, medium, or low",
            other
        )),
    }
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

pub fn cmd_init(args: InitArgs, dir_flag: Option<&str>) -> CmdResult {
    let root = start_dir(dir_flag)?;
    let workspace_dir = workspace::init_workspace(&root, args.force)?;
    // Seed the store up front so the first `tf list` shows the samples
    DataStore::load(DirStorage::new(workspace_dir.clone()))?;
    println!("initialized taskflow workspace at {}", workspace_dir.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, json: bool, dir_flag: Option<&str>) -> CmdResult {
    let (store, _config) = load_store(dir_flag)?;
    let today = Local::now().date_naive();

    let mut filter = Filter::new(today);
    if let Some(project) = args.project {
        filter.project = project;
    }
    if let Some(status) = args.status {
        filter.status = StatusFilter::parse(&status);
    }
    if let Some(search) = args.search {
        filter.search = search;
    }

    let visible = visible_tasks(&store.tasks, &filter);
    let rows = view::task_rows(&visible, &store.projects, today);
    let stats = view::stats(&store.tasks);

    if json {
        let out = TaskListJson {
            count: rows.len(),
            tasks: rows,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No tasks found");
        if store.tasks.is_empty() {
            println!("Add your first task to get started: tf add \"...\"");
        } else {
            println!("Try changing your filters or search term");
        }
        return Ok(());
    }

    for row in &rows {
        print_task_row(row);
    }
    let noun = if rows.len() == 1 { "task" } else { "tasks" };
    println!("{} {}", rows.len(), noun);
    Ok(())
}

fn cmd_stats(json: bool, dir_flag: Option<&str>) -> CmdResult {
    let (store, _config) = load_store(dir_flag)?;
    let stats = view::stats(&store.tasks);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, dir_flag: Option<&str>) -> CmdResult {
    let (mut store, config) = load_store(dir_flag)?;
    let today = Local::now().date_naive();

    let mut editor = TaskEditor::create(today, &config.defaults);
    editor.title = args.title;
    if let Some(desc) = args.desc {
        editor.description = desc;
    }
    if let Some(due) = args.due {
        editor.due_date = parse_due(&due)?;
    }
    if let Some(priority) = args.priority {
        editor.priority = parse_priority(&priority)?;
    }
    if let Some(project) = args.project {
        editor.project = project;
    }
    editor.completed = args.completed;

    let task = editor.submit(&mut store)?;
    println!("added {}  {}", task.id, task.title);
    Ok(())
}

fn cmd_edit(args: EditArgs, dir_flag: Option<&str>) -> CmdResult {
    let (mut store, _config) = load_store(dir_flag)?;
    let task = store
        .find_task(&args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?
        .clone();

    let mut editor = TaskEditor::edit(&task);
    if let Some(title) = args.title {
        editor.title = title;
    }
    if let Some(desc) = args.desc {
        editor.description = desc;
    }
    if let Some(due) = args.due {
        editor.due_date = parse_due(&due)?;
    }
    if let Some(priority) = args.priority {
        editor.priority = parse_priority(&priority)?;
    }
    if let Some(project) = args.project {
        editor.project = project;
    }
    if args.done {
        editor.completed = true;
    } else if args.pending {
        editor.completed = false;
    }

    let task = editor.submit(&mut store)?;
    println!("updated {}  {}", task.id, task.title);
    Ok(())
}

fn cmd_toggle(args: ToggleArgs, dir_flag: Option<&str>) -> CmdResult {
    let (mut store, _config) = load_store(dir_flag)?;
    task_ops::toggle_completed(&mut store, &args.id)?;
    // Unknown IDs stay a silent no-op; only report when the task exists
    if let Some(task) = store.find_task(&args.id) {
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        println!("{} {}  {}", checkbox, task.id, task.title);
    }
    Ok(())
}

fn cmd_rm(args: RmArgs, dir_flag: Option<&str>) -> CmdResult {
    let (mut store, _config) = load_store(dir_flag)?;
    let mut port = interaction(args.yes);
    let removed = task_ops::delete_task(&mut store, &args.id, port.as_mut())?;
    if removed {
        println!("deleted {}", args.id);
    } else {
        println!("nothing deleted");
    }
    Ok(())
}

fn cmd_clear(args: ClearArgs, dir_flag: Option<&str>) -> CmdResult {
    let (mut store, _config) = load_store(dir_flag)?;
    let mut port = interaction(args.yes);
    let removed = task_ops::clear_completed(&mut store, port.as_mut())?;
    let noun = if removed == 1 { "task" } else { "tasks" };
    println!("cleared {} completed {}", removed, noun);
    Ok(())
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

fn cmd_project_list(json: bool, dir_flag: Option<&str>) -> CmdResult {
    let (store, _config) = load_store(dir_flag)?;
    if json {
        let out = ProjectListJson {
            projects: store.projects.iter().map(ProjectJson::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    for project in &store.projects {
        println!("{:<12} {}  {}", project.id, project.color, project.name);
    }
    Ok(())
}

fn cmd_project_add(args: ProjectAddArgs, dir_flag: Option<&str>) -> CmdResult {
    let (mut store, _config) = load_store(dir_flag)?;
    let project = project_ops::create_project(&mut store, &args.name, args.color, args.icon)?;
    println!("added project {}  ({})", project.id, project.name);
    Ok(())
}

// ---------------------------------------------------------------------------
// Import / export
// ---------------------------------------------------------------------------

fn cmd_export(args: ExportArgs, dir_flag: Option<&str>) -> CmdResult {
    let (store, _config) = load_store(dir_flag)?;
    let today = Local::now().date_naive();
    let path = args
        .file
        .unwrap_or_else(|| transfer::export_filename(today));

    let payload = transfer::export_tasks(&store.tasks)?;
    fs::write(&path, payload).map_err(|e| format!("could not write {}: {}", path, e))?;

    let noun = if store.tasks.len() == 1 { "task" } else { "tasks" };
    println!("exported {} {} to {}", store.tasks.len(), noun, path);
    Ok(())
}

fn cmd_import(args: ImportArgs, dir_flag: Option<&str>) -> CmdResult {
    let (mut store, _config) = load_store(dir_flag)?;
    let payload = fs::read_to_string(&args.file)
        .map_err(|e| format!("could not read {}: {}", args.file, e))?;

    let mut port = interaction(args.yes);
    match transfer::import_tasks(&mut store, &payload, port.as_mut())? {
        transfer::ImportOutcome::Replaced(count) => {
            let noun = if count == 1 { "task" } else { "tasks" };
            println!("imported {} {}", count, noun);
        }
        transfer::ImportOutcome::Cancelled => println!("cancelled"),
    }
    Ok(())
}
