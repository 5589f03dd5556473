use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_LOOKBACK_DAYS, DEFAULT_SECTION_NAME, DEFAULT_SECTION_PREFIX};
use crate::core::{SearchWindow, SectionConfig};
use crate::error::AppError;

/// Persisted settings. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) name_of_section: String,
    pub(crate) section_prefix: String,
    pub(crate) lookback_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) vault: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_of_section: DEFAULT_SECTION_NAME.to_string(),
            section_prefix: DEFAULT_SECTION_PREFIX.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            timezone: None,
            vault: None,
        }
    }
}

/// Config plus the file it belongs to
#[derive(Debug)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    /// Where `save` writes; the file may not exist yet
    pub(crate) path: Option<PathBuf>,
    /// `path` exists but could not be read or parsed, so `config` holds defaults
    pub(crate) unreadable: bool,
}

impl Config {
    pub(crate) fn section(&self) -> SectionConfig {
        SectionConfig::new(&self.name_of_section, &self.section_prefix)
    }

    pub(crate) fn search_window(&self) -> SearchWindow {
        SearchWindow::days(self.lookback_days)
    }

    /// Load from `explicit` if given, otherwise from the first existing default location
    pub(crate) fn load(explicit: Option<&Path>, quiet: bool) -> LoadedConfig {
        if let Some(path) = explicit {
            let config = Self::load_file(path, quiet);
            return LoadedConfig {
                unreadable: config.is_none() && path.exists(),
                config: config.unwrap_or_default(),
                path: Some(path.to_path_buf()),
            };
        }

        let config_paths = Self::get_config_paths();
        let mut broken = None;
        for path in &config_paths {
            if !path.exists() {
                continue;
            }
            match Self::load_file(path, quiet) {
                Some(config) => {
                    return LoadedConfig {
                        config,
                        path: Some(path.clone()),
                        unreadable: false,
                    };
                }
                None => {
                    broken.get_or_insert_with(|| path.clone());
                }
            }
        }

        LoadedConfig {
            config: Self::default(),
            unreadable: broken.is_some(),
            path: broken.or_else(|| config_paths.into_iter().next()),
        }
    }

    fn load_file(path: &Path, quiet: bool) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match Self::parse(&content) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                if !quiet {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                }
                None
            }
        }
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    pub(crate) fn save(&self, path: &Path) -> Result<(), AppError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| AppError::io("create", parent, e))?;
        }
        fs::write(path, content).map_err(|e| AppError::io("write", path, e))?;
        log::info!("Saved config to {}", path.display());
        Ok(())
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/unfinished/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("unfinished").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/unfinished/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("unfinished").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.unfinished.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".unfinished.toml"));
        }

        paths
    }
}
