//! Configuration loading.
//!
//! Settings come from an optional TOML file, then `AURORA__*` environment
//! variables (e.g. `AURORA__WINDOW=5`, `AURORA__THRESHOLDS__NO_DATA_WEIGHT=-40`).
//! Anything unset keeps its default.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use crate::classify::Thresholds;
use crate::error::Result;

/// Local paths of the three feed files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedPaths {
    pub magnetometer: PathBuf,
    pub plasma: PathBuf,
    pub kindex: PathBuf,
}

impl Default for FeedPaths {
    fn default() -> Self {
        Self {
            magnetometer: PathBuf::from("ace_mag_1m.txt"),
            plasma: PathBuf::from("ace_swepam_1m.txt"),
            kindex: PathBuf::from("wingkp_list.txt"),
        }
    }
}

/// Everything a run needs besides the feed text itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub feeds: FeedPaths,
    pub thresholds: Thresholds,
    /// How many of the most recent records to score.
    pub window: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feeds: FeedPaths::default(),
            thresholds: Thresholds::default(),
            window: 1,
        }
    }
}

impl Settings {
    /// Load settings, reading `path` if given, then `AURORA__*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_builder(file_builder(path).add_source(environment()))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        Ok(builder.build()?.try_deserialize()?)
    }
}

fn file_builder(path: Option<&Path>) -> ConfigBuilder<DefaultState> {
    let builder = Config::builder();
    match path {
        Some(path) => builder.add_source(File::from(path)),
        None => builder,
    }
}

fn environment() -> Environment {
    Environment::with_prefix("AURORA")
        .separator("__")
        .try_parsing(true)
}
