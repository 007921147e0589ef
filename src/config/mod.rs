//! Backing-file configuration.
//!
//! The state-file path is chosen once at store creation. Resolution order:
//! an explicit override (CLI flag or `MICROBIT_STATE_FILE` environment
//! variable, both wired through clap), then an optional
//! `microbit_settings.toml` in the working directory, then the fixed
//! default name. A missing or malformed settings file silently falls back.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::{MbError, Result};

/// Default backing-file name when nothing overrides it.
pub const STATE_FILE_DEFAULT: &str = "microbit_state.json";

/// Optional settings file consulted in the working directory.
pub const SETTINGS_FILE: &str = "microbit_settings.toml";

/// Contents of `microbit_settings.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Backing-file path override.
    pub state_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the working directory, or defaults when the file
    /// is absent or malformed.
    #[must_use]
    pub fn discover() -> Self {
        Self::from_file(Path::new(SETTINGS_FILE))
    }

    /// Load settings from a specific path, or defaults on any failure.
    #[must_use]
    pub fn from_file(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => {
                trace!(path = %path.display(), %error, "no settings file");
                return Self::default();
            }
        };

        match toml::from_str(&text) {
            Ok(settings) => {
                debug!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                debug!(path = %path.display(), %error, "settings file not parsed");
                Self::default()
            }
        }
    }
}

/// Resolve the backing-file path: explicit override, then settings file,
/// then [`STATE_FILE_DEFAULT`]. `~`-prefixed paths expand to the home
/// directory.
pub fn resolve_state_file(override_path: Option<&Path>) -> Result<PathBuf> {
    let chosen = override_path.map_or_else(
        || {
            Settings::discover()
                .state_file
                .unwrap_or_else(|| PathBuf::from(STATE_FILE_DEFAULT))
        },
        Path::to_path_buf,
    );
    expand_home(&chosen)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let text = path.to_string_lossy();

    if text == "~" || text.starts_with("~/") {
        let home = home_dir()?;
        let rest = text.strip_prefix("~/").unwrap_or("");
        let expanded = if rest.is_empty() { home } else { home.join(rest) };
        debug!(
            original = %path.display(),
            expanded = %expanded.display(),
            "Expanded home directory path"
        );
        return Ok(expanded);
    }

    Ok(path.to_path_buf())
}

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| MbError::ConfigInvalid("Could not determine home directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_when_no_override() {
        // No settings file in a fresh temp dir, so the default applies
        let resolved = resolve_state_file(Some(Path::new("explicit.json"))).unwrap();
        assert_eq!(resolved, PathBuf::from("explicit.json"));
    }

    #[test]
    fn test_settings_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "state_file = \"custom_state.json\"\n").unwrap();

        let settings = Settings::from_file(&path);
        assert_eq!(
            settings.state_file,
            Some(PathBuf::from("custom_state.json"))
        );
    }

    #[test]
    fn test_settings_missing_file_defaults() {
        let settings = Settings::from_file(Path::new("/nonexistent/settings.toml"));
        assert!(settings.state_file.is_none());
    }

    #[test]
    fn test_settings_malformed_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "state_file = [not toml").unwrap();

        let settings = Settings::from_file(&path);
        assert!(settings.state_file.is_none());
    }

    #[test]
    fn test_expand_home() {
        let expanded = expand_home(Path::new("~/state.json")).unwrap();
        let home = home_dir().unwrap();
        assert!(expanded.starts_with(&home));
        assert!(expanded.ends_with("state.json"));
    }

    #[test]
    fn test_expand_home_only() {
        assert_eq!(expand_home(Path::new("~")).unwrap(), home_dir().unwrap());
    }

    #[test]
    fn test_absolute_path_untouched() {
        let path = Path::new("/tmp/state.json");
        assert_eq!(expand_home(path).unwrap(), path);
    }
}
