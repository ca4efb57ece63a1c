//! Loading the theme configuration from disk.
//!
//! The configuration is a JSON document with the shape of
//! [`ThemeConfiguration`]. A missing file is not an error: styling is
//! best-effort, so a warning is logged and an empty configuration is used,
//! which leaves every element untouched.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use themerules::ThemeConfiguration;
use themerules::types::ColorRef;

use crate::{Result, StylescaleError};

/// Configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "theme.config.json";

/// Options a host passes when starting a session.
#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
    /// Path to the configuration, relative paths resolved against the
    /// project root. Defaults to [`DEFAULT_CONFIG_PATH`].
    pub config_path: Option<PathBuf>,
}

impl SessionOptions {
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// The configuration path to read, given the project root.
    pub fn resolve_config_path(&self, root: &Path) -> PathBuf {
        let path = self
            .config_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        root.join(path)
    }
}

/// Parses a configuration document. `path` is only used for error messages.
pub fn parse_config(source: &str, path: &Path) -> Result<ThemeConfiguration> {
    let config: ThemeConfiguration =
        serde_json::from_str(source).map_err(|source| StylescaleError::Config {
            path: path.to_path_buf(),
            source,
        })?;
    warn_unknown_themes(&config);
    Ok(config)
}

/// Reads the configuration at `path`.
///
/// A missing file yields an empty configuration and a warning; unreadable or
/// malformed files are errors.
pub fn load_config(path: impl AsRef<Path>) -> Result<Arc<ThemeConfiguration>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(source) => {
            let config = parse_config(&source, path)?;
            log::debug!(
                "Loaded theme config {}: {} themes, {} components, {} rules",
                path.display(),
                config.colors.len(),
                config.components.len(),
                config.rules.len()
            );
            Ok(Arc::new(config))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::warn!("Config file not found at {}", path.display());
            Ok(Arc::new(ThemeConfiguration::empty()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Logs component and dark-mode entries naming a theme that does not exist.
/// Such entries resolve to nothing.
fn warn_unknown_themes(config: &ThemeConfiguration) {
    let maps = [("components", &config.components), ("darkMode", &config.dark_mode)];
    for (section, map) in maps {
        for (component, theme) in map {
            if let ColorRef::Theme(name) = ColorRef::classify(theme) {
                if config.theme(name).is_none() {
                    log::warn!("{section}.{component} refers to unknown theme `{name}`");
                }
            }
        }
    }
}
