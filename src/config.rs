use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::sources::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
    #[serde(default = "default_destination")]
    pub destination: String,
    #[serde(default)]
    pub merge: bool,
    #[serde(default)]
    pub lang_place: Option<String>,
}

fn default_sources() -> Vec<String> {
    vec!["**/*_i18n.yaml".to_string()]
}

fn default_destination() -> String {
    "i18n/translations_.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            destination: default_destination(),
            merge: false,
            lang_place: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a source pattern is not a valid glob or if
    /// `destination` is empty. An empty `langPlace` is allowed and means none.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.sources {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'sources': \"{}\"", pattern)
                })?;
            }
        }

        if self.destination.is_empty() {
            bail!("'destination' must not be empty");
        }

        Ok(())
    }

    /// Rewrite relative sources and destination against `base`.
    ///
    /// Config values are written relative to the config file, not to the
    /// directory the command runs from.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if base.as_os_str().is_empty() {
            return self;
        }

        let escaped_base = Pattern::escape(&base.to_string_lossy());
        self.sources = self
            .sources
            .into_iter()
            .map(|source| {
                if Path::new(&source).is_absolute() {
                    source
                } else if is_glob_pattern(&source) {
                    format!("{}/{}", escaped_base, source)
                } else {
                    base.join(&source).to_string_lossy().to_string()
                }
            })
            .collect();

        if !Path::new(&self.destination).is_absolute() {
            self.destination = base.join(&self.destination).to_string_lossy().to_string();
        }

        self
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

/// Load the nearest config file, with paths resolved against its directory.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;

            let base = path.parent().unwrap_or(start_dir);
            let config = if base == start_dir {
                config
            } else {
                config.relative_to(base)
            };

            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
