use crate::error::{CliError, Result};
use directories::ProjectDirs;
use fsaptviz::core::models::color::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileApiConfig {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileAnalysisConfig {
    pub threshold: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilePaletteConfig {
    pub neutral: Option<Color>,
    pub attractive: Option<[Color; 3]>,
    pub repulsive: Option<[Color; 3]>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileClassifierConfig {
    pub neutral_cutoff: Option<f64>,
    pub moderate_intensity: Option<f64>,
    pub strong_intensity: Option<f64>,
    pub default_color: Option<Color>,
    pub palette: Option<FilePaletteConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api: Option<FileApiConfig>,
    pub analysis: Option<FileAnalysisConfig>,
    pub classifier: Option<FileClassifierConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

/// Location of the per-user configuration file, whether or not it exists.
pub fn default_config_path() -> Result<PathBuf> {
    ProjectDirs::from("org", "fsapt", "fsaptviz")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or_else(|| CliError::Config("Could not determine config directory path.".to_string()))
}

/// Picks the configuration file to load: an explicit path must exist, the
/// per-user file is used only when present.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CliError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Provided config file does not exist: {}", path.display()),
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }
    match default_config_path() {
        Ok(path) if path.exists() => {
            debug!("Using per-user configuration file {:?}", path);
            Ok(Some(path))
        }
        _ => Ok(None),
    }
}
