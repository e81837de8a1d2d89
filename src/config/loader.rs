//! Loading schedule configurations from files and strings

use super::ScheduleConfig;
use crate::error::{Result, ScheduleError};
use crate::schedule::SharedSchedule;
use std::fs;
use std::path::Path;

/// Parse a YAML schedule description.
pub fn from_yaml_str(yaml: &str) -> Result<ScheduleConfig> {
    serde_yaml::from_str(yaml).map_err(|e| ScheduleError::ConfigParse(e.to_string()))
}

/// Parse a JSON schedule description.
pub fn from_json_str(json: &str) -> Result<ScheduleConfig> {
    serde_json::from_str(json).map_err(|e| ScheduleError::ConfigParse(e.to_string()))
}

/// Load a schedule configuration from disk.
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ScheduleConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|source| ScheduleError::ConfigRead { path: path.to_path_buf(), source })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json { from_json_str(&content)? } else { from_yaml_str(&content)? };

    log::debug!("Loaded {} schedule config from {}", config.kind(), path.display());
    Ok(config)
}

/// Load a configuration from disk and build it.
pub fn load_schedule<P: AsRef<Path>>(path: P) -> Result<SharedSchedule> {
    load_config(path)?.build()
}
