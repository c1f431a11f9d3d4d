use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Main configuration structure
///
/// Loaded from `<config_dir>/holdco/config.toml`. Missing file or missing
/// keys fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load config from default location, defaults if it doesn't exist
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        toml::from_str(contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save config to the default location, returning where it went
    pub fn save(&self) -> crate::Result<PathBuf> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Where the font-scale preference lives
    pub fn preferences_path(&self) -> crate::Result<PathBuf> {
        match &self.ui.preferences_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("preferences.toml")),
        }
    }

    fn config_path() -> crate::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// XDG on Linux, Application Support on macOS, AppData on Windows
    fn config_dir() -> crate::Result<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("holdco"))
    }
}

/// The two fixed outbound links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    #[serde(default = "default_incubation_url")]
    pub incubation_center_url: String,

    #[serde(default = "default_map_url")]
    pub map_url: String,
}

fn default_incubation_url() -> String {
    "https://www.k-startup.go.kr".to_string()
}

fn default_map_url() -> String {
    "https://map.naver.com".to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            incubation_center_url: default_incubation_url(),
            map_url: default_map_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Fake loading time before a page switch, purely cosmetic
    #[serde(default = "default_loading_delay")]
    pub loading_delay_ms: u64,
}

fn default_loading_delay() -> u64 {
    300
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: default_loading_delay(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Override for the preference file location
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.navigation.loading_delay_ms, 300);
        assert!(config.links.map_url.starts_with("https://"));
        assert!(config.ui.preferences_path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("loading_delay_ms"));
        assert!(toml.contains("map_url"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml("[navigation]\nloading_delay_ms = 0\n").unwrap();
        assert_eq!(config.navigation.loading_delay_ms, 0);
        assert_eq!(config.links.map_url, default_map_url());
    }

    #[test]
    fn test_preferences_path_override() {
        let config = Config::from_toml("[ui]\npreferences_path = \"/tmp/prefs.toml\"\n").unwrap();
        assert_eq!(
            config.preferences_path().unwrap(),
            PathBuf::from("/tmp/prefs.toml")
        );
    }

    #[test]
    fn test_save_then_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(Config::load_from(&path).unwrap().navigation.loading_delay_ms, 300);

        let mut config = Config::default();
        config.navigation.loading_delay_ms = 50;
        config.links.map_url = "https://map.example.com".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.navigation.loading_delay_ms, 50);
        assert_eq!(loaded.links.map_url, "https://map.example.com");
    }

    #[test]
    fn test_bad_config_is_config_error() {
        let err = Config::from_toml("navigation = 3").unwrap_err();
        assert!(matches!(err, crate::Error::ConfigError(_)));
    }
}
