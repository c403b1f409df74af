use crate::types::HexColor;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// A category present when the screen opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    pub color: HexColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LapwatchConfig {
    /// Color a new category draft starts with.
    #[serde(default = "default_color")]
    pub default_color: HexColor,

    /// Colors offered by the color picker.
    #[serde(default = "default_palette")]
    pub palette: Vec<HexColor>,

    #[serde(default = "default_categories")]
    pub categories: Vec<CategorySeed>,
}

fn default_color() -> HexColor {
    builtin_color("#999")
}

fn default_palette() -> Vec<HexColor> {
    [
        "#ff6666", "#66ccff", "#99cc33", "#ffcc66", "#99ff99", "#cc99ff", "#ff99cc",
    ]
    .into_iter()
    .map(builtin_color)
    .collect()
}

fn default_categories() -> Vec<CategorySeed> {
    vec![
        CategorySeed {
            name: "Study".to_string(),
            color: builtin_color("#FF6666"),
        },
        CategorySeed {
            name: "Break".to_string(),
            color: builtin_color("#66CCFF"),
        },
    ]
}

fn builtin_color(s: &str) -> HexColor {
    match HexColor::parse(s) {
        Ok(color) => color,
        Err(e) => unreachable!("built-in color {s} is invalid: {e}"),
    }
}

impl Default for LapwatchConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            palette: default_palette(),
            categories: default_categories(),
        }
    }
}

impl LapwatchConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("lapwatch")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}
