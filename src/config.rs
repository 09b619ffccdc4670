//! Configuration for the theme tool
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/wallet-theme/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::theme::DEFAULT_THEME;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Override for the themes directory (default: ~/.config/wallet-theme/themes)
    pub themes_dir: Option<PathBuf>,

    /// Extract bundled themes to the themes directory on startup
    pub auto_extract: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            themes_dir: None,
            auto_extract: true,
        }
    }
}

/// Config file shape: everything optional so a partial file merges over
/// the defaults
#[derive(Debug, Deserialize)]
struct FileConfig {
    theme: Option<String>,
    themes_dir: Option<PathBuf>,
    auto_extract: Option<bool>,
}

impl Config {
    /// Path to the config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| {
            h.join(".config")
                .join("wallet-theme")
                .join("config.toml")
        })
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        let mut config = Self::from_file().unwrap_or_default();

        if let Ok(theme) = std::env::var("WALLET_THEME") {
            config.theme = theme;
        }
        if let Some(dir) = std::env::var_os("WALLET_THEME_DIR") {
            config.themes_dir = Some(PathBuf::from(dir));
        }

        config
    }

    /// Load configuration from the config file, if present
    fn from_file() -> Option<Self> {
        let path = Self::config_path()?;
        let contents = std::fs::read_to_string(&path).ok()?;

        let file: FileConfig = match toml::from_str(&contents) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), "invalid config file, using defaults: {e}");
                return None;
            }
        };

        let defaults = Self::default();
        Some(Self {
            theme: file.theme.unwrap_or(defaults.theme),
            themes_dir: file.themes_dir.or(defaults.themes_dir),
            auto_extract: file.auto_extract.unwrap_or(defaults.auto_extract),
        })
    }

    /// Render the effective configuration as a commented TOML document.
    /// Single source of truth for `config --reset`.
    pub fn to_toml(&self) -> String {
        let themes_dir = match &self.themes_dir {
            Some(dir) => format!("themes_dir = {:?}", dir.display().to_string()),
            None => "# themes_dir = \"/path/to/themes\"".to_string(),
        };
        format!(
            r#"# wallet-theme configuration
# Values here are overridden by the WALLET_THEME and WALLET_THEME_DIR
# environment variables.

# Selected theme name
theme = {:?}

# Override for the themes directory (default: ~/.config/wallet-theme/themes)
{}

# Extract bundled themes to the themes directory on startup
auto_extract = {}
"#,
            self.theme, themes_dir, self.auto_extract
        )
    }

    /// Write a default config file if none exists
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        Self::ensure_config_exists_at(&path);
    }

    fn ensure_config_exists_at(path: &Path) {
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(path, Config::default().to_toml());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "Wallet");
        assert!(config.auto_extract);
    }

    #[test]
    fn test_default_toml_parses_back() {
        let rendered = Config::default().to_toml();
        let file: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(file.theme.as_deref(), Some("Wallet"));
        assert_eq!(file.auto_extract, Some(true));
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let file: FileConfig = toml::from_str("theme = \"Wallet Dark\"").unwrap();
        let defaults = Config::default();
        let merged = Config {
            theme: file.theme.unwrap_or(defaults.theme),
            themes_dir: file.themes_dir.or(defaults.themes_dir),
            auto_extract: file.auto_extract.unwrap_or(defaults.auto_extract),
        };
        assert_eq!(merged.theme, "Wallet Dark");
        assert!(merged.themes_dir.is_none());
        assert!(merged.auto_extract);
    }

    #[test]
    fn test_themes_dir_file_key() {
        let file: FileConfig = toml::from_str("themes_dir = \"/tmp/themes\"").unwrap();
        assert_eq!(file.themes_dir, Some(PathBuf::from("/tmp/themes")));

        // A configured themes_dir survives the TOML render/parse cycle
        let config = Config {
            themes_dir: Some(PathBuf::from("/tmp/themes")),
            ..Default::default()
        };
        let reparsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        assert_eq!(reparsed.themes_dir, Some(PathBuf::from("/tmp/themes")));
    }

    #[test]
    fn test_ensure_config_creates_once_and_preserves_edits() {
        let dir = std::env::temp_dir().join(format!(
            "wallet-theme-config-test-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("config.toml");

        Config::ensure_config_exists_at(&path);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            Config::default().to_toml()
        );

        // An existing file is never overwritten
        std::fs::write(&path, "theme = \"Wallet Dark\"\n").unwrap();
        Config::ensure_config_exists_at(&path);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "theme = \"Wallet Dark\"\n"
        );

        let _ = std::fs::remove_dir_all(&dir);
    }
}
