//! Pipeline configuration, usually read from a `[history]` table in TOML.
//!
//! ```
//! use strand_lib::config::PipelineConfig;
//!
//! let config = PipelineConfig::from_toml("[history]\ncapacity = 8\n").unwrap();
//! assert_eq!(config.history_capacity(), Some(8));
//! ```

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid pipeline config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("history capacity must be at least 1")]
  ZeroCapacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct HistoryConfig {
  pub enabled:  bool,
  pub capacity: usize,
}

impl Default for HistoryConfig {
  fn default() -> Self {
    Self {
      enabled:  true,
      capacity: DEFAULT_HISTORY_CAPACITY,
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct PipelineConfig {
  pub history: HistoryConfig,
}

impl PipelineConfig {
  /// # Errors
  /// [`ConfigError::Parse`] for malformed TOML or unknown keys and
  /// [`ConfigError::ZeroCapacity`] for an enabled history of capacity 0.
  pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
  }

  /// # Errors
  /// [`ConfigError::ZeroCapacity`] for an enabled history of capacity 0.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.history.enabled && self.history.capacity == 0 {
      return Err(ConfigError::ZeroCapacity);
    }
    Ok(())
  }

  /// The capacity to attach a history with, or `None` when history is
  /// disabled.
  pub fn history_capacity(&self) -> Option<usize> {
    self.history.enabled.then_some(self.history.capacity)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_source_uses_defaults() {
    let config = PipelineConfig::from_toml("").unwrap();
    assert_eq!(config, PipelineConfig::default());
    assert_eq!(config.history_capacity(), Some(DEFAULT_HISTORY_CAPACITY));
  }

  #[test]
  fn disabled_history() {
    let config = PipelineConfig::from_toml("[history]\nenabled = false\ncapacity = 0\n").unwrap();
    assert_eq!(config.history_capacity(), None);
  }

  #[test]
  fn zero_capacity_is_rejected() {
    assert!(matches!(
      PipelineConfig::from_toml("[history]\ncapacity = 0\n"),
      Err(ConfigError::ZeroCapacity)
    ));
  }

  #[test]
  fn unknown_keys_are_rejected() {
    assert!(matches!(
      PipelineConfig::from_toml("[history]\nsize = 3\n"),
      Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
      PipelineConfig::from_toml("verbose = true\n"),
      Err(ConfigError::Parse(_))
    ));
  }

  #[test]
  fn round_trips_through_toml() {
    let config = PipelineConfig {
      history: HistoryConfig {
        enabled:  true,
        capacity: 12,
      },
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(PipelineConfig::from_toml(&text).unwrap(), config);
  }
}
