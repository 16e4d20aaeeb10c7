//! Generation records: a candidate stamped with the time it was produced

use chrono::{DateTime, Utc};
use lotto_core::Candidate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Unique record ID
    pub id: Uuid,

    /// The numbers that were shown
    pub candidate: Candidate,

    /// When the candidate was generated
    pub created_at: DateTime<Utc>,

    /// Produced by the attempt-ceiling fallback rather than a passing draw
    #[serde(default)]
    pub best_effort: bool,
}

impl GenerationRecord {
    /// Stamp a candidate with the current time
    pub fn new(candidate: Candidate) -> Self {
        Self::at(candidate, Utc::now())
    }

    pub fn at(candidate: Candidate, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            candidate,
            created_at,
            best_effort: false,
        }
    }

    pub fn best_effort(mut self) -> Self {
        self.best_effort = true;
        self
    }

    /// Short `HH:MM` label
    pub fn time_label(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }

    /// Full `YYYY-MM-DD HH:MM:SS` label
    pub fn date_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
