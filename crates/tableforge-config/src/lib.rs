//! Configuration system for TableForge.
//!
//! Load table configuration from TOML or YAML files to control the host seat,
//! the search mode, the dish root and the permutation listing without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use tableforge_config::{SearchMode, TableConfig};
//!
//! let config = TableConfig::from_toml_str(r#"
//!     [seating]
//!     host = "Jerry"
//!     search_mode = "parallel"
//!
//!     [order]
//!     display_limit = 10
//! "#).unwrap();
//!
//! assert_eq!(config.seating.host, "Jerry");
//! assert_eq!(config.seating.search_mode, SearchMode::Parallel);
//! assert_eq!(config.order.display_limit, 10);
//! assert_eq!(config.order.guests.len(), 8);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use tableforge_config::TableConfig;
//!
//! let config = TableConfig::load("tableforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default name of the configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "tableforge.toml";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main table configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TableConfig {
    /// Seating search configuration.
    #[serde(default)]
    pub seating: SeatingConfig,

    /// Serving-order configuration.
    #[serde(default)]
    pub dishes: DishesConfig,

    /// Permutation listing configuration.
    #[serde(default)]
    pub order: OrderConfig,
}

impl TableConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML or YAML file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, can't be parsed or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the host name.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.seating.host = host.into();
        self
    }

    /// Sets the search mode.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.seating.search_mode = mode;
        self
    }

    /// Sets the dish root key.
    pub fn with_dish_root(mut self, root: impl Into<String>) -> Self {
        self.dishes.root = root.into();
        self
    }

    /// Sets how many permutations `order` prints by default.
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.order.display_limit = limit;
        self
    }

    /// Checks values that deserialize fine but can't be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seating.host.is_empty() {
            return Err(ConfigError::Invalid(
                "seating.host must not be empty".to_string(),
            ));
        }
        if self.order.guests.is_empty() {
            return Err(ConfigError::Invalid(
                "order.guests must name at least one guest".to_string(),
            ));
        }
        Ok(())
    }
}

/// How the seating search walks the arrangement space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Single-threaded walk in enumeration order.
    #[default]
    Sequential,

    /// Arrangements scored on the rayon thread pool.
    Parallel,
}

/// Seating configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SeatingConfig {
    /// Name given to the host when they join the table.
    #[serde(default = "default_host")]
    pub host: String,

    /// Search mode for the best arrangement.
    #[serde(default)]
    pub search_mode: SearchMode,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            search_mode: SearchMode::default(),
        }
    }
}

/// Serving-order configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DishesConfig {
    /// Key of the synthetic root node every dish hangs from. No dish may use
    /// it as a name.
    #[serde(default)]
    pub root: String,
}

/// Permutation listing configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderConfig {
    /// Permutations printed when no count is given.
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// Guests whose orderings are listed.
    #[serde(default = "default_guests")]
    pub guests: Vec<String>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
            guests: default_guests(),
        }
    }
}

fn default_host() -> String {
    "host".to_string()
}

fn default_display_limit() -> usize {
    100
}

fn default_guests() -> Vec<String> {
    [
        "Elaine", "Kosmo", "Estelle", "Newman", "Jerry", "Frank", "George", "Marisa",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests;
