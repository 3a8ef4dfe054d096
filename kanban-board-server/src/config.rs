//! Server configuration using Figment
//!
//! Sources, later ones override earlier ones:
//! 1. Built-in defaults
//! 2. `kanban-board.{toml,yaml,json}` in the working directory, or one explicit file
//! 3. `CARDS_TABLE_NAME` / `COLUMNS_TABLE_NAME`
//! 4. `KANBAN_BOARD_*` environment variables
//! 5. Command line flags

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use kanban_board::BoardContext;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// File name (without extension) searched for in the working directory
pub const CONFIG_FILE_STEM: &str = "kanban-board";

/// Prefix of environment variables mapped onto [`ServerConfig`] fields
pub const ENV_PREFIX: &str = "KANBAN_BOARD_";

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly named configuration file does not exist
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration file format not supported
    #[error("Unsupported configuration file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] Box<figment::Error>),

    /// Current directory could not be determined
    #[error("Unable to determine current directory: {0}")]
    CurrentDirectory(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Parse(Box::new(error))
    }
}

/// Which table backend the server runs on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// In-process tables, empty at startup
    #[default]
    Memory,
    /// One JSON file per row under `data_dir`
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind: SocketAddr,
    pub storage: StorageKind,
    /// Root of the file tables, used when `storage = "file"`
    pub data_dir: PathBuf,
    pub cards_table: String,
    pub columns_table: String,
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            storage: StorageKind::Memory,
            data_dir: PathBuf::from(".kanban-board"),
            cards_table: "cards".to_string(),
            columns_table: "columns".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration for the current working directory
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd, explicit)
    }

    /// Load configuration, discovering files in `dir` unless `explicit` names one
    pub fn load_from(dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(dir, explicit)?.extract()?;
        debug!(?config, "loaded server configuration");
        Ok(config)
    }

    /// Build the figment with all sources in precedence order
    pub fn figment(dir: &Path, explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::FileNotFound {
                        path: path.to_path_buf(),
                    });
                }
                figment = figment.merge(config_file(path)?);
            }
            None => {
                for (extension, _) in FORMATS {
                    let path = dir.join(format!("{CONFIG_FILE_STEM}.{extension}"));
                    if path.is_file() {
                        trace!(path = %path.display(), "loading config file");
                        figment = figment.merge(config_file(&path)?);
                    }
                }
            }
        }

        Ok(figment
            .merge(table_name_env())
            .merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, bind: Option<SocketAddr>, data_dir: Option<PathBuf>) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        self
    }

    /// Open the board this configuration describes
    pub fn open_board(&self) -> BoardContext {
        match self.storage {
            StorageKind::Memory => BoardContext::in_memory(),
            StorageKind::File => {
                BoardContext::open_with_tables(&self.data_dir, &self.cards_table, &self.columns_table)
            }
        }
    }
}

#[derive(Clone, Copy)]
enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

/// Discovery order; a later file overrides an earlier one
const FORMATS: [(&str, ConfigFormat); 4] = [
    ("toml", ConfigFormat::Toml),
    ("yaml", ConfigFormat::Yaml),
    ("yml", ConfigFormat::Yaml),
    ("json", ConfigFormat::Json),
];

fn config_file(path: &Path) -> Result<Figment, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let format = FORMATS
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, format)| *format)
        .ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    Ok(match format {
        ConfigFormat::Toml => Figment::from(Toml::file(path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
        ConfigFormat::Json => Figment::from(Json::file(path)),
    })
}

/// The deployment's table name variables
fn table_name_env() -> Env {
    Env::raw()
        .only(&["CARDS_TABLE_NAME", "COLUMNS_TABLE_NAME"])
        .map(|key| {
            if key.as_str().eq_ignore_ascii_case("CARDS_TABLE_NAME") {
                "cards_table".into()
            } else {
                "columns_table".into()
            }
        })
}
