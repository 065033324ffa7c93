//! Application configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "salary-predictor.json";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding both artifacts
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,

    /// Exported regression model file name
    #[serde(default = "default_model_file")]
    pub model_file: String,

    /// Exported preprocessor file name
    #[serde(default = "default_preprocessor_file")]
    pub preprocessor_file: String,

    /// Native window title
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_model_file() -> String {
    "model.json".to_string()
}

fn default_preprocessor_file() -> String {
    "preprocessor.json".to_string()
}

fn default_window_title() -> String {
    "Employee Salary Predictor".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifact_dir: default_artifact_dir(),
            model_file: default_model_file(),
            preprocessor_file: default_preprocessor_file(),
            window_title: default_window_title(),
        }
    }
}

impl AppConfig {
    /// Load `salary-predictor.json` from the working directory, falling back
    /// to defaults when it is absent or malformed.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        Self::from_file(path).unwrap_or_else(|e| {
            log::warn!("Ignoring {CONFIG_FILE}: {e:#}");
            Self::default()
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.model_file)
    }

    pub fn preprocessor_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.preprocessor_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "artifact_dir": "/opt/salary" }"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.model_path(), PathBuf::from("/opt/salary/model.json"));
        assert_eq!(
            config.preprocessor_path(),
            PathBuf::from("/opt/salary/preprocessor.json")
        );
        assert_eq!(config.window_title, "Employee Salary Predictor");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ artifact_dir: ").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }
}
