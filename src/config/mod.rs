use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "pixelpick";
const APP_CONFIG_FILE: &str = "config.json";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to write config: {path}")]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize config")]
    SerializeConfig(#[from] serde_json::Error),
}

/// RGB readout style. Owned by the UI collaborator, persisted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RgbDisplay {
    #[default]
    Byte,
    Float,
}

/// Externally persisted picker settings from `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub stay_on_top: bool,
    #[serde(default)]
    pub rgb_display: RgbDisplay,
}

pub fn load_settings() -> Settings {
    let (xdg_config_home, home) = config_env_dirs();
    load_settings_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_settings_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Settings {
    let path = match settings_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return Settings::default(),
    };
    if !path.exists() {
        return Settings::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            Settings::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> ConfigResult<()> {
    let (xdg_config_home, home) = config_env_dirs();
    save_settings_with(settings, xdg_config_home.as_deref(), home.as_deref())
}

fn save_settings_with(
    settings: &Settings,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<()> {
    let path = settings_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::WriteConfig {
            path: path.clone(),
            source,
        })?;
    }
    let contents = serde_json::to_string_pretty(settings)?;
    std::fs::write(&path, contents).map_err(|source| ConfigError::WriteConfig { path, source })
}

fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn settings_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<PathBuf> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(xdg_config_home: Option<&Path>, home: Option<&Path>) -> ConfigResult<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
