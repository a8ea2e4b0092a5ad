/*
This code is part of the point3d geometry library.
Authors: Dr. John Lindsay
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// The unit in which rotation angles are given on the command line.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Converts an angle in this unit to radians.
    pub fn to_radians(&self, angle: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_radians(),
        }
    }
}

/// A structure to hold environment settings. Backed by settings.json file in the working directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Configs {
    pub verbose_mode: bool,
    pub angle_unit: AngleUnit,
}

fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}

/// Reads settings.json from `dir`. A missing file gives the default settings.
pub fn get_configs(dir: &Path) -> Result<Configs, ConfigError> {
    match fs::read_to_string(settings_path(dir)) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Configs::default()),
        Err(e) => Err(e.into()),
    }
}

pub fn save_configs(dir: &Path, configs: &Configs) -> Result<(), ConfigError> {
    let configs_json = serde_json::to_string_pretty(configs)?;
    fs::write(settings_path(dir), configs_json)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{get_configs, save_configs, AngleUnit, ConfigError, Configs};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let configs = get_configs(dir.path()).unwrap();
        assert_eq!(configs, Configs::default());
        assert!(!configs.verbose_mode);
        assert_eq!(configs.angle_unit, AngleUnit::Radians);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let configs = Configs {
            verbose_mode: true,
            angle_unit: AngleUnit::Degrees,
        };
        save_configs(dir.path(), &configs).unwrap();
        assert_eq!(get_configs(dir.path()).unwrap(), configs);
    }

    #[test]
    fn test_partial_settings_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("settings.json"), r#"{ "angle_unit": "degrees" }"#).unwrap();
        let configs = get_configs(dir.path()).unwrap();
        assert!(!configs.verbose_mode);
        assert_eq!(configs.angle_unit, AngleUnit::Degrees);
    }

    #[test]
    fn test_malformed_settings_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("settings.json"), "{ verbose_mode: ").unwrap();
        match get_configs(dir.path()) {
            Err(ConfigError::Json(_)) => {}
            other => panic!("expected a JSON error, got {:?}", other),
        }
    }

    #[test]
    fn test_angle_unit_conversion() {
        assert_eq!(AngleUnit::Radians.to_radians(1.5), 1.5);
        assert!((AngleUnit::Degrees.to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
    }
}
