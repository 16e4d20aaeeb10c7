//! Session: one generator, its history and the persisted state between runs

use lotto_core::{AttemptCounter, Candidate, LottoError};
use lotto_draw::{Generation, Generator, RandomSource};
use lotto_history::{History, HistorySnapshot};
use lotto_rules::{Evaluation, Validator};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use crate::config::LottoConfig;

/// What survives between runs of the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub total_attempts: u64,
    pub history: HistorySnapshot,
}

impl SessionState {
    /// Read a state file; a missing file is an empty state
    pub fn load(path: &Path) -> Result<Option<Self>, LottoError> {
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| LottoError::History(format!("cannot read {}: {}", path.display(), e)))?;
        let state: Self =
            serde_json::from_str(&json).map_err(|e| LottoError::History(e.to_string()))?;
        Ok(Some(state))
    }

    pub fn save(&self, path: &Path) -> Result<(), LottoError> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| LottoError::History(e.to_string()))?;
        std::fs::write(path, json)
            .map_err(|e| LottoError::History(format!("cannot write {}: {}", path.display(), e)))
    }
}

/// Generator plus history, wired the way the front end uses them
pub struct Session<S> {
    generator: Generator<S>,
    history: History,
}

impl<S: RandomSource> Session<S> {
    pub fn new(config: &LottoConfig, source: S) -> Result<Self, LottoError> {
        Self::restore(config, source, None)
    }

    /// Build a session, continuing the counters and history of a saved state.
    ///
    /// The configured history capacity wins over the one stored in the state.
    pub fn restore(
        config: &LottoConfig,
        source: S,
        state: Option<SessionState>,
    ) -> Result<Self, LottoError> {
        config.validate()?;

        let (counter, history) = match state {
            Some(mut state) => {
                state.history.capacity = config.history_capacity;
                (
                    AttemptCounter::starting_at(state.total_attempts),
                    History::from_snapshot(state.history),
                )
            }
            None => (
                AttemptCounter::new(),
                History::with_capacity(config.history_capacity),
            ),
        };

        let validator = Validator::new(&config.rules, Arc::new(counter));
        let generator = Generator::new(source, validator, config.generator)
            .map_err(|e| LottoError::Config(e.to_string()))?;

        Ok(Self { generator, history })
    }

    /// Generate one combination and record it in the history.
    ///
    /// Best-effort results are recorded too, flagged as such.
    pub fn generate(&mut self) -> Generation {
        let generation = self.generator.generate_valid();
        match generation {
            Generation::Valid { candidate, .. } => self.history.record(candidate),
            Generation::BestEffort { candidate, .. } => self.history.record_best_effort(candidate),
        }
        debug!(
            total_attempts = self.total_attempts(),
            generations = self.history.generation_count(),
            "generation recorded"
        );
        generation
    }

    /// Full rule report for an arbitrary candidate; not counted as an attempt
    pub fn check(&self, candidate: &Candidate) -> Evaluation {
        self.generator.validator().evaluate(candidate)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn total_attempts(&self) -> u64 {
        self.generator.total_attempts()
    }

    pub fn generation_count(&self) -> u64 {
        self.history.generation_count()
    }

    pub fn reset_attempts(&self) {
        self.generator.counter().reset();
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            total_attempts: self.total_attempts(),
            history: self.history.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_draw::{GeneratorConfig, RngSource, SequenceSource};

    #[test]
    fn test_generate_records_history() {
        let mut session = Session::new(&LottoConfig::default(), RngSource::seeded(10)).unwrap();

        let mut spent = 0u64;
        for _ in 0..3 {
            let generation = session.generate();
            assert!(generation.is_valid());
            spent += u64::from(generation.attempts());
        }

        assert_eq!(session.history().len(), 3);
        assert_eq!(session.generation_count(), 3);
        assert_eq!(session.total_attempts(), spent);
    }

    #[test]
    fn test_best_effort_is_flagged() {
        let config = LottoConfig {
            generator: GeneratorConfig::with_max_attempts(3),
            ..LottoConfig::default()
        };
        let mut session = Session::new(&config, SequenceSource::zeros()).unwrap();

        let generation = session.generate();
        assert!(generation.is_best_effort());
        assert!(session.history().latest().unwrap().best_effort);
        assert_eq!(session.total_attempts(), 3);
    }

    #[test]
    fn test_history_capacity_from_config() {
        let config = LottoConfig {
            history_capacity: 2,
            ..LottoConfig::default()
        };
        let mut session = Session::new(&config, RngSource::seeded(1)).unwrap();
        for _ in 0..5 {
            session.generate();
        }
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.generation_count(), 5);
    }

    #[test]
    fn test_check_does_not_count() {
        let session = Session::new(&LottoConfig::default(), RngSource::seeded(1)).unwrap();
        let evaluation = session.check(&Candidate::new([1, 4, 7, 10, 13]).unwrap());
        assert!(!evaluation.is_valid());
        assert_eq!(session.total_attempts(), 0);
    }

    #[test]
    fn test_restore_continues_counters() {
        let config = LottoConfig::default();
        let mut first = Session::new(&config, RngSource::seeded(2)).unwrap();
        first.generate();
        let state = first.state();

        let mut second = Session::restore(&config, RngSource::seeded(3), Some(state.clone())).unwrap();
        assert_eq!(second.total_attempts(), state.total_attempts);
        assert_eq!(second.generation_count(), 1);

        second.generate();
        assert_eq!(second.generation_count(), 2);
        assert!(second.total_attempts() > state.total_attempts);
    }

    #[test]
    fn test_restore_applies_configured_capacity() {
        let mut first = Session::new(&LottoConfig::default(), RngSource::seeded(6)).unwrap();
        for _ in 0..6 {
            first.generate();
        }

        let smaller = LottoConfig {
            history_capacity: 4,
            ..LottoConfig::default()
        };
        let second = Session::restore(&smaller, RngSource::seeded(7), Some(first.state())).unwrap();
        assert_eq!(second.history().len(), 4);
        assert_eq!(second.history().capacity(), 4);
        assert_eq!(second.generation_count(), 6);
    }

    #[test]
    fn test_oversized_capacity_rejected() {
        let config = LottoConfig {
            history_capacity: usize::MAX,
            ..LottoConfig::default()
        };
        assert!(Session::new(&config, RngSource::seeded(1)).is_err());
    }

    #[test]
    fn test_reset_attempts() {
        let mut session = Session::new(&LottoConfig::default(), RngSource::seeded(4)).unwrap();
        session.generate();
        session.reset_attempts();
        assert_eq!(session.total_attempts(), 0);
        assert_eq!(session.generation_count(), 1);
    }

    #[test]
    fn test_state_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        assert_eq!(SessionState::load(&path).unwrap(), None);

        let mut session = Session::new(&LottoConfig::default(), RngSource::seeded(5)).unwrap();
        session.generate();
        session.state().save(&path).unwrap();

        let loaded = SessionState::load(&path).unwrap().unwrap();
        assert_eq!(loaded, session.state());
    }
}
