use serde::{Deserialize, Serialize};

use super::task::Priority;

/// Configuration from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            defaults: DefaultsConfig::default(),
        }
    }
}

/// Defaults applied when creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Project assigned to new tasks when none is given
    #[serde(default = "default_project")]
    pub project: String,
    /// Priority assigned to new tasks when none is given
    #[serde(default)]
    pub priority: Priority,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            project: default_project(),
            priority: Priority::Medium,
        }
    }
}

fn default_project() -> String {
    "personal".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.defaults.project, "personal");
        assert_eq!(config.defaults.priority, Priority::Medium);
    }

    #[test]
    fn partial_defaults_section_fills_in_the_rest() {
        let config: AppConfig = toml::from_str("[defaults]\nproject = \"work\"\n").unwrap();
        assert_eq!(config.defaults.project, "work");
        assert_eq!(config.defaults.priority, Priority::Medium);
    }

    #[test]
    fn priority_parses_lowercase() {
        let config: AppConfig = toml::from_str("[defaults]\npriority = \"high\"\n").unwrap();
        assert_eq!(config.defaults.priority, Priority::High);
    }
}
