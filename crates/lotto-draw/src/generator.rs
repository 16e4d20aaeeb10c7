//! Retry Driver: rejection sampling with a bounded number of attempts

use lotto_core::{AttemptCounter, Candidate};
use lotto_rules::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use crate::config::{ConfigError, GeneratorConfig};
use crate::shuffler::Shuffler;
use crate::source::{RandomSource, RngSource};

/// Outcome of one `generate_valid` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Generation {
    /// A candidate that satisfies every rule
    Valid { candidate: Candidate, attempts: u32 },

    /// The ceiling was reached; `candidate` is the last one sampled and
    /// does not satisfy the rules
    BestEffort { candidate: Candidate, attempts: u32 },
}

impl Generation {
    pub fn candidate(&self) -> &Candidate {
        match self {
            Generation::Valid { candidate, .. } | Generation::BestEffort { candidate, .. } => {
                candidate
            }
        }
    }

    pub fn into_candidate(self) -> Candidate {
        *self.candidate()
    }

    /// Sample+validate cycles spent on this generation
    pub fn attempts(&self) -> u32 {
        match self {
            Generation::Valid { attempts, .. } | Generation::BestEffort { attempts, .. } => *attempts,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Generation::Valid { .. })
    }

    pub fn is_best_effort(&self) -> bool {
        matches!(self, Generation::BestEffort { .. })
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Generation::Valid { candidate, attempts } => {
                write!(f, "{} (valid after {} attempts)", candidate, attempts)
            }
            Generation::BestEffort { candidate, attempts } => {
                write!(f, "{} (best effort after {} attempts)", candidate, attempts)
            }
        }
    }
}

/// Samples candidates until one passes the validator or the ceiling is hit
#[derive(Debug, Clone)]
pub struct Generator<S> {
    shuffler: Shuffler<S>,
    validator: Validator,
    config: GeneratorConfig,
}

impl<S: RandomSource> Generator<S> {
    pub fn new(source: S, validator: Validator, config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            shuffler: Shuffler::new(source),
            validator,
            config,
        })
    }

    /// Standard rules, default ceiling and a private counter
    pub fn standard(source: S) -> Self {
        Self {
            shuffler: Shuffler::new(source),
            validator: Validator::standard(),
            config: GeneratorConfig::default(),
        }
    }

    /// Run rejection sampling.
    ///
    /// Never fails: when `max_attempts` candidates have all been rejected the
    /// last one is returned as `Generation::BestEffort`.
    pub fn generate_valid(&mut self) -> Generation {
        let max_attempts = self.config.max_attempts;
        let mut attempts = 0;

        loop {
            let candidate = self.shuffler.sample();
            attempts += 1;

            if self.validator.is_valid(&candidate) {
                debug!(attempts, %candidate, "found valid combination");
                return Generation::Valid { candidate, attempts };
            }

            if attempts >= max_attempts {
                warn!(
                    max_attempts,
                    %candidate,
                    "could not find a valid combination, returning last candidate"
                );
                return Generation::BestEffort { candidate, attempts };
            }
        }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Shared attempt counter
    pub fn counter(&self) -> &Arc<AttemptCounter> {
        self.validator.counter()
    }

    pub fn total_attempts(&self) -> u64 {
        self.validator.attempts()
    }

    pub fn source_mut(&mut self) -> &mut S {
        self.shuffler.source_mut()
    }
}

impl Generator<RngSource> {
    /// Standard generator seeded from system entropy
    pub fn from_entropy() -> Self {
        Self::standard(RngSource::from_entropy())
    }

    /// Standard generator with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::standard(RngSource::seeded(seed))
    }
}
