//! Configuration file handling
//!
//! The hero banner is configured with a TOML file at
//! `<config_dir>/herotype/config.toml`. Every field has a default, so a
//! missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::SkillStagger;
use crate::error::ConfigError;
use crate::tui::theme::Theme;
use crate::typewriter::{RoleList, Timings};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color theme name (default, classic, ocean)
    pub theme: String,
    pub hero: HeroConfig,
    pub timing: TimingConfig,
    pub animation: AnimationConfig,
    pub stats: Vec<StatConfig>,
    pub skills: Vec<SkillConfig>,
}

/// Title and typewriter roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub roles: Vec<String>,
}

/// Typewriter delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub type_interval_ms: u64,
    pub hold_after_typing_ms: u64,
    pub erase_interval_ms: u64,
    pub hold_after_erasing_ms: u64,
}

/// Counter and skill bar timings in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub counter_duration_ms: u64,
    pub skill_stagger_ms: u64,
    pub skill_fill_ms: u64,
}

/// A counter in the stats row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatConfig {
    pub label: String,
    pub target: u64,
    #[serde(default)]
    pub suffix: String,
}

/// A skill bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillConfig {
    pub name: String,
    pub percentage: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            hero: HeroConfig::default(),
            timing: TimingConfig::default(),
            animation: AnimationConfig::default(),
            stats: vec![
                StatConfig {
                    label: "Years Experience".to_string(),
                    target: 6,
                    suffix: "+".to_string(),
                },
                StatConfig {
                    label: "Projects Shipped".to_string(),
                    target: 42,
                    suffix: "+".to_string(),
                },
                StatConfig {
                    label: "Commits".to_string(),
                    target: 12480,
                    suffix: String::new(),
                },
            ],
            skills: vec![
                SkillConfig {
                    name: "Rust".to_string(),
                    percentage: 90,
                },
                SkillConfig {
                    name: "Python".to_string(),
                    percentage: 85,
                },
                SkillConfig {
                    name: "Machine Learning".to_string(),
                    percentage: 80,
                },
                SkillConfig {
                    name: "Distributed Systems".to_string(),
                    percentage: 70,
                },
            ],
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Hi, I build things for the terminal".to_string(),
            roles: vec![
                "Systems Engineer".to_string(),
                "Rust Developer".to_string(),
                "Data Science Practitioner".to_string(),
                "Open Source Maintainer".to_string(),
            ],
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        let t = Timings::default();
        Self {
            type_interval_ms: t.type_interval.as_millis() as u64,
            hold_after_typing_ms: t.hold_after_typing.as_millis() as u64,
            erase_interval_ms: t.erase_interval.as_millis() as u64,
            hold_after_erasing_ms: t.hold_after_erasing.as_millis() as u64,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000,
            skill_stagger_ms: 200,
            skill_fill_ms: 800,
        }
    }
}

impl Config {
    /// Path of the user configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("herotype").join("config.toml"))
    }

    /// Load the user configuration, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate the configuration at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), roles = config.hero.roles.len(), "config loaded");
        Ok(config)
    }

    /// Load from `path` when given, else the user configuration.
    pub fn load_or_default_path(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Write the configuration to the user config path.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(write_err)?;
        Ok(())
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values that serde cannot: roles, theme name, percentages.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.role_list()?;
        if Theme::by_name(&self.theme).is_none() {
            return Err(ConfigError::UnknownTheme(self.theme.clone()));
        }
        if let Some(skill) = self.skills.iter().find(|s| s.percentage > 100) {
            return Err(ConfigError::PercentageOutOfRange {
                name: skill.name.clone(),
                percentage: skill.percentage,
            });
        }
        Ok(())
    }

    /// The configured roles as a validated list.
    pub fn role_list(&self) -> Result<RoleList, ConfigError> {
        Ok(RoleList::new(self.hero.roles.iter().cloned())?)
    }

    pub fn timings(&self) -> Timings {
        Timings {
            type_interval: Duration::from_millis(self.timing.type_interval_ms),
            hold_after_typing: Duration::from_millis(self.timing.hold_after_typing_ms),
            erase_interval: Duration::from_millis(self.timing.erase_interval_ms),
            hold_after_erasing: Duration::from_millis(self.timing.hold_after_erasing_ms),
        }
    }

    pub fn skill_stagger(&self) -> SkillStagger {
        SkillStagger {
            stagger: Duration::from_millis(self.animation.skill_stagger_ms),
            fill: Duration::from_millis(self.animation.skill_fill_ms),
        }
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.animation.counter_duration_ms)
    }

    /// The configured theme, or the default one for an unknown name.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_default()
    }
}
