use std::fs;
use std::path::{Path, PathBuf};

/// Name of the workspace directory that holds the store and config
pub const WORKSPACE_DIR: &str = ".taskflow";

/// Error type for workspace discovery and setup
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("not a taskflow workspace: no {WORKSPACE_DIR}/ directory found (run `tf init`)")]
    NotAWorkspace,
    #[error("workspace already initialized at {0}")]
    AlreadyInitialized(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("could not serialize config.toml: {0}")]
    ConfigSerializeError(#[from] toml::ser::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Discover the workspace by walking up from the given directory, looking
/// for a `.taskflow/` subdirectory. Returns the workspace directory itself.
pub fn discover_workspace(start: &Path) -> Result<PathBuf, WorkspaceError> {
    let mut current = start.to_path_buf();
    loop {
        let workspace = current.join(WORKSPACE_DIR);
        if workspace.is_dir() {
            return Ok(workspace);
        }
        if !current.pop() {
            return Err(WorkspaceError::NotAWorkspace);
        }
    }
}

/// Create a `.taskflow/` workspace under `root` with a default config.
/// Fails if one already exists, unless `force` is set.
pub fn init_workspace(root: &Path, force: bool) -> Result<PathBuf, WorkspaceError> {
    let workspace = root.join(WORKSPACE_DIR);
    if workspace.is_dir() && !force {
        return Err(WorkspaceError::AlreadyInitialized(workspace));
    }
    fs::create_dir_all(&workspace)?;

    let config_path = workspace.join("config.toml");
    if !config_path.exists() || force {
        super::config_io::write_default_config(&workspace)?;
    }
    Ok(workspace)
}
