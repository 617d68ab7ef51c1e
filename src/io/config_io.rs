use std::fs;
use std::path::Path;

use crate::io::workspace::WorkspaceError;
use crate::model::config::AppConfig;

/// Read config.toml from the workspace directory. A missing file yields the
/// default config; a malformed file is an error.
pub fn read_config(workspace: &Path) -> Result<AppConfig, WorkspaceError> {
    let config_path = workspace.join("config.toml");
    let config_text = match fs::read_to_string(&config_path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => {
            return Err(WorkspaceError::ReadError {
                path: config_path,
                source: e,
            });
        }
    };
    let config: AppConfig = toml::from_str(&config_text)?;
    Ok(config)
}

/// Write a default config.toml into the workspace directory.
pub fn write_default_config(workspace: &Path) -> Result<(), WorkspaceError> {
    let config = AppConfig::default();
    let text = toml::to_string_pretty(&config)?;
    fs::write(workspace.join("config.toml"), text)?;
    Ok(())
}
