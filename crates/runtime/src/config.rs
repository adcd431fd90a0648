//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use crate::repository::DEFAULT_STORAGE_KEY;

/// Directory name used under the platform data/cache directories.
pub const APP_NAME: &str = "rpg-learning";

/// Where the runtime keeps its save file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub save_dir: PathBuf,
    pub storage_key: String,
    pub logging: LoggingConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RPG_SAVE_DIR` - Directory holding the save file (default: platform data dir)
    /// - `RPG_STORAGE_KEY` - Save file name without extension (default: `rpg-learning-save`)
    /// - `RPG_LOG_DIR` - Write logs to `progression.log` here instead of stderr
    /// - `RPG_LOG` - Log filter directives (default: `info`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(dir) = read("RPG_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        if let Some(key) = read("RPG_STORAGE_KEY") {
            config.storage_key = key;
        }

        config.logging.log_dir = read("RPG_LOG_DIR").map(PathBuf::from);

        if let Some(filter) = read("RPG_LOG") {
            config.logging.filter = filter;
        }

        config
    }
}

/// Logging setup consumed by [`crate::logging::init_logging`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log to a file in this directory; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directives.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            filter: "info".to_string(),
        }
    }
}

fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(APP_NAME))
}
