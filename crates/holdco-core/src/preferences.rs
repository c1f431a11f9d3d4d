// The one setting that survives a restart: text size
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub const MIN_FONT_SCALE: u16 = 75;
pub const MAX_FONT_SCALE: u16 = 150;
pub const FONT_SCALE_STEP: u16 = 10;
pub const DEFAULT_FONT_SCALE: u16 = 100;

/// Font scale as a percentage, always within 75..=150
///
/// Values sit on the 10-point grid through the default (80, 90, ... 150)
/// plus the 75 floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct FontScale(u16);

impl FontScale {
    /// Out-of-range values are clamped, off-grid values snap to the
    /// nearest step (ties round down)
    pub fn new(percent: u16) -> Self {
        let clamped = percent.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE);
        if clamped == MIN_FONT_SCALE {
            return Self(MIN_FONT_SCALE);
        }
        let snapped = (clamped + FONT_SCALE_STEP / 2 - 1) / FONT_SCALE_STEP * FONT_SCALE_STEP;
        Self(snapped.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE))
    }

    pub fn percent(&self) -> u16 {
        self.0
    }

    pub fn increase(self) -> Self {
        Self::new(self.0.saturating_add(FONT_SCALE_STEP))
    }

    pub fn decrease(self) -> Self {
        Self::new(self.0.saturating_sub(FONT_SCALE_STEP))
    }

    pub fn can_increase(&self) -> bool {
        self.0 < MAX_FONT_SCALE
    }

    pub fn can_decrease(&self) -> bool {
        self.0 > MIN_FONT_SCALE
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self(DEFAULT_FONT_SCALE)
    }
}

impl From<u16> for FontScale {
    fn from(percent: u16) -> Self {
        Self::new(percent)
    }
}

impl From<FontScale> for u16 {
    fn from(scale: FontScale) -> Self {
        scale.0
    }
}

impl std::fmt::Display for FontScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default)]
    pub font_scale: FontScale,
}

impl Preferences {
    /// Read from the configured location
    pub fn load(config: &crate::Config) -> crate::Result<Self> {
        Self::load_from(config.preferences_path()?)
    }

    pub fn save(&self, config: &crate::Config) -> crate::Result<()> {
        self.save_to(config.preferences_path()?)
    }

    /// Missing file means defaults
    pub fn load_from<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse preferences: {}", e)))
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::ConfigError(format!("Failed to serialize preferences: {}", e))
        })?;
        std::fs::write(path, contents)?;

        info!("Saved font scale {} to {:?}", self.font_scale, path);
        Ok(())
    }
}
