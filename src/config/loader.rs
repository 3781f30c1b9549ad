//! Configuration loading and management

use crate::catalog::{OptionCatalog, OptionDefinition};
use crate::config::types::WatchSettings;
use crate::constants::{CONFIG_FILENAMES, DEFAULT_ARTIFACT_TEMPLATE, DEFAULT_BASE_COMMAND};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Settings read from `antdg.json`, `antdg.yaml` or `antdg.yml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "get_default_base_command")]
    pub base_command: String,
    #[serde(default)]
    pub watch: WatchSettings,
    /// Expected artifact, relative to the project folder.
    #[serde(default = "get_default_artifact")]
    pub artifact: String,
    /// Per-kind overrides of `artifact`.
    #[serde(default)]
    pub artifacts: IndexMap<String, String>,
    /// Extra or replacement option catalog entries.
    #[serde(default)]
    pub kinds: IndexMap<String, Vec<OptionDefinition>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_command: get_default_base_command(),
            watch: WatchSettings::default(),
            artifact: get_default_artifact(),
            artifacts: IndexMap::new(),
            kinds: IndexMap::new(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.base_command.trim().is_empty() {
            return Err(Error::ConfigValidation("base_command must not be empty".into()));
        }
        if self.watch.max_attempts == 0 {
            return Err(Error::ConfigValidation(
                "watch.max_attempts must be at least 1".into(),
            ));
        }
        for (kind, options) in &self.kinds {
            if let Some(option) = options.iter().find(|option| option.name.trim().is_empty()) {
                return Err(Error::ConfigValidation(format!(
                    "kind '{kind}' declares an option without a name ({:?})",
                    option.description
                )));
            }
        }
        Ok(())
    }

    /// Looks for the first known config file in `dir`, falling back to
    /// defaults when none exists.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = dir.join(config_file_name);
            if config_file_path.exists() {
                return Self::load(&config_file_path);
            }
        }

        log::debug!("No config file found in {}, using defaults.", dir.display());
        Ok(Self::default())
    }

    /// Loads and validates the given config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound { path: path.display().to_string() });
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        settings.validate()?;

        log::debug!("Loaded config from {}", path.display());
        Ok(settings)
    }

    /// Builtin catalog extended with the configured kinds.
    pub fn catalog(&self) -> OptionCatalog {
        let mut catalog = OptionCatalog::builtin();
        catalog.extend(self.kinds.clone());
        catalog
    }

    /// Artifact template for `kind`.
    pub fn artifact_for(&self, kind: &str) -> &str {
        self.artifacts.get(kind).unwrap_or(&self.artifact)
    }
}

fn get_default_base_command() -> String {
    DEFAULT_BASE_COMMAND.to_string()
}

fn get_default_artifact() -> String {
    DEFAULT_ARTIFACT_TEMPLATE.to_string()
}
