use crate::models::settings::Settings;
use anyhow::Context;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "MONTH_CALENDAR_CONFIG";

const DEFAULT_CONFIG: &str = "\
# month-calendar configuration

# \"Dark\", \"Light\" or \"System\"
# theme = \"Dark\"

# When hours/minutes are zero-padded: \"on_submit\" or \"on_keystroke\"
# time_padding = \"on_submit\"

# First column of the month grid (0 = Sunday, 1 = Monday)
# first_day_of_week = 0

# window_width = 1100.0
# window_height = 700.0
";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not determine a configuration directory")]
    NoConfigDir,

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for `$MONTH_CALENDAR_CONFIG`, or `config.toml` in the
    /// platform config directory.
    pub fn from_environment() -> Result<Self, SettingsError> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(Self::new(path));
        }

        let dirs = ProjectDirs::from("com", "Ken24T", "MonthCalendar")
            .ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(dirs.config_dir().join("config.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields the defaults
    pub fn get(&self) -> Result<Settings, SettingsError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", self.path.display());
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the commented template if no file exists yet, then load.
    /// Template write failures are logged; read and parse failures are returned.
    pub fn load_or_init(&self) -> anyhow::Result<Settings> {
        if let Err(err) = self.create_default_config() {
            log::warn!("Could not write default config: {}", err);
        }

        let settings = self
            .get()
            .with_context(|| format!("Failed to load settings from {}", self.path.display()))?;
        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Write a commented template unless a config file already exists.
    /// Returns whether a file was created.
    pub fn create_default_config(&self) -> Result<bool, SettingsError> {
        if self.path.exists() {
            return Ok(false);
        }
        self.ensure_parent_dir()?;
        std::fs::write(&self.path, DEFAULT_CONFIG).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Wrote default config to {}", self.path.display());
        Ok(true)
    }

    fn ensure_parent_dir(&self) -> Result<(), SettingsError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                    path: parent.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }
}
