//! Settings persistence backed by a TOML file.

mod service;

pub use service::{SettingsError, SettingsService, CONFIG_PATH_ENV};
