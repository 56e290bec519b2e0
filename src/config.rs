use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Database file for icon texts (default: platform data dir)
    #[serde(default)]
    pub db_path: Option<PathBuf>,

    /// Side of the virtual square watch canvas, in dp
    #[serde(default = "default_canvas_size")]
    pub canvas_size: f32,

    /// Seconds the display stays awake after opening a text full-screen
    #[serde(default = "default_keep_awake_secs")]
    pub keep_awake_secs: u64,

    /// Interval between simulated accelerometer readings
    #[serde(default = "default_sensor_interval_ms")]
    pub sensor_interval_ms: u64,

    /// Let the simulated watch keep turning on its own
    #[serde(default)]
    pub simulate_tilt: bool,

    /// How long a mouse press must be held to count as a long-press
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
}

fn default_canvas_size() -> f32 {
    192.0
}

fn default_keep_awake_secs() -> u64 {
    60
}

fn default_sensor_interval_ms() -> u64 {
    50
}

fn default_long_press_ms() -> u64 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            canvas_size: default_canvas_size(),
            keep_awake_secs: default_keep_awake_secs(),
            sensor_interval_ms: default_sensor_interval_ms(),
            simulate_tilt: false,
            long_press_ms: default_long_press_ms(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `<config_dir>/emojicon/config.yaml`
/// then `./config.yaml` are tried; finding neither means "use defaults".
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("emojicon").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
