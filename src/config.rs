use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::types::{ClockFace, Theme};

#[derive(Parser)]
pub struct Cli {
    /// Color theme: dark or light
    #[arg(long)]
    pub theme: Option<String>,
    /// Start with the analog clock face
    #[arg(long)]
    pub analog: bool,
    /// Skip the best-effort geolocation lookup for the clock label
    #[arg(long)]
    pub no_location: bool,
    /// Reset saved preferences and exit
    #[arg(long)]
    pub reset: bool,
}

/// UI preferences persisted between runs. Tracking state (stopwatch,
/// countdown) is deliberately not saved.
#[derive(Serialize, Deserialize)]
pub struct SavedConfig {
    pub theme: Theme,
    pub clock_face: ClockFace,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chronodeck").join("config.json"))
}

pub fn load_config() -> Option<SavedConfig> {
    let path = config_path()?;
    let contents = fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

pub fn save_config(config: &SavedConfig) -> io::Result<()> {
    let path = config_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}

/// Remove the saved preferences file. Returns whether one existed.
pub fn reset_config() -> io::Result<bool> {
    let Some(path) = config_path() else {
        return Ok(false);
    };
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
