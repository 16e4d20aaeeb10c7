//! Application configuration: YAML file, then environment overrides

use lotto_core::LottoError;
use lotto_draw::GeneratorConfig;
use lotto_history::MAX_HISTORY;
use lotto_rules::RuleProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Overrides `generator.max_attempts`
pub const ENV_MAX_ATTEMPTS: &str = "LOTTO_MAX_ATTEMPTS";

/// Overrides `history_capacity`
pub const ENV_HISTORY_CAPACITY: &str = "LOTTO_HISTORY_CAPACITY";

/// Largest accepted `history_capacity`
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LottoConfig {
    pub generator: GeneratorConfig,
    pub rules: RuleProfile,
    pub history_capacity: usize,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            rules: RuleProfile::standard(),
            history_capacity: MAX_HISTORY,
        }
    }
}

impl LottoConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, LottoError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| LottoError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file if one is given, otherwise use defaults; then apply env overrides
    pub fn load(path: Option<&Path>) -> Result<Self, LottoError> {
        let mut config = match path {
            Some(path) => {
                let yaml = std::fs::read_to_string(path).map_err(|e| {
                    LottoError::Config(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_yaml(&yaml)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in `load`)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), LottoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_MAX_ATTEMPTS) {
            self.generator.max_attempts = parse_override(ENV_MAX_ATTEMPTS, &value)?;
        }
        if let Some(value) = lookup(ENV_HISTORY_CAPACITY) {
            self.history_capacity = parse_override(ENV_HISTORY_CAPACITY, &value)?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), LottoError> {
        self.generator
            .validate()
            .map_err(|e| LottoError::Config(e.to_string()))?;
        self.rules
            .validate()
            .map_err(|e| LottoError::Rules(e.to_string()))?;
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(LottoError::Config(format!(
                "history_capacity {} exceeds {}",
                self.history_capacity, MAX_HISTORY_CAPACITY
            )));
        }
        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, LottoError> {
    value.trim().parse().map_err(|_| {
        LottoError::Config(format!(
            "{} must be a non-negative integer, got {:?}",
            key, value
        ))
    })
}
