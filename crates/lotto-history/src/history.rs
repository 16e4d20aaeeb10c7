//! Bounded history of recent generations
//!
//! Newest first. Only the last `capacity` records are kept, while the
//! lifetime generation count keeps growing.

use chrono::{DateTime, Utc};
use lotto_core::{Candidate, Number, MAX_NUMBER};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use thiserror::Error;
use tracing::info;
use crate::record::GenerationRecord;

/// Records kept by default
pub const MAX_HISTORY: usize = 10;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("invalid history snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Recent generations collector
#[derive(Debug, Clone)]
pub struct History {
    records: VecDeque<GenerationRecord>,
    capacity: usize,
    generation_count: u64,
}

impl History {
    /// Create a history keeping the last `MAX_HISTORY` records
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// Create with a custom size. A capacity of 0 keeps nothing but still counts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity,
            generation_count: 0,
        }
    }

    /// Push a record to the front
    pub fn log(&mut self, record: GenerationRecord) {
        self.records.push_front(record);
        self.generation_count += 1;

        // Trim if over limit
        self.records.truncate(self.capacity);
    }

    /// Record a candidate stamped with the current time
    pub fn record(&mut self, candidate: Candidate) {
        self.log(GenerationRecord::new(candidate));
    }

    /// Record a candidate that came from the attempt-ceiling fallback
    pub fn record_best_effort(&mut self, candidate: Candidate) {
        self.log(GenerationRecord::new(candidate).best_effort());
    }

    /// Records, newest first
    pub fn entries(&self) -> impl Iterator<Item = &GenerationRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&GenerationRecord> {
        self.records.front()
    }

    /// Get entries since a timestamp
    pub fn entries_since(&self, since: DateTime<Utc>) -> Vec<&GenerationRecord> {
        self.records
            .iter()
            .filter(|r| r.created_at >= since)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lifetime number of recorded generations, including trimmed ones
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    /// Clear all records. The generation count is kept.
    pub fn clear(&mut self) {
        let dropped = self.records.len();
        self.records.clear();
        info!(dropped, "history cleared");
    }

    /// Get statistics over the kept records
    pub fn stats(&self) -> HistoryStats {
        let mut frequencies: BTreeMap<Number, usize> = BTreeMap::new();
        for record in &self.records {
            for n in record.candidate.iter() {
                *frequencies.entry(n).or_default() += 1;
            }
        }

        // Ties resolve to the smallest number
        let most_frequent = frequencies
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(&n, _)| n);

        let never_drawn = (1..=MAX_NUMBER)
            .filter(|n| !frequencies.contains_key(n))
            .collect();

        HistoryStats {
            kept: self.records.len(),
            generation_count: self.generation_count,
            best_effort: self.records.iter().filter(|r| r.best_effort).count(),
            frequencies,
            most_frequent,
            never_drawn,
        }
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            capacity: self.capacity,
            generation_count: self.generation_count,
            records: self.records.iter().cloned().collect(),
        }
    }

    /// Rebuild from a snapshot, trimming records beyond its capacity
    pub fn from_snapshot(snapshot: HistorySnapshot) -> Self {
        let mut records: VecDeque<GenerationRecord> = snapshot.records.into();
        records.truncate(snapshot.capacity);
        Self {
            records,
            capacity: snapshot.capacity,
            generation_count: snapshot.generation_count,
        }
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Restore from JSON produced by `to_json`
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let snapshot: HistorySnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable form handed to whatever persists the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default)]
    pub generation_count: u64,
    pub records: Vec<GenerationRecord>,
}

fn default_capacity() -> usize {
    MAX_HISTORY
}

/// Statistics about the kept records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryStats {
    pub kept: usize,
    pub generation_count: u64,
    pub best_effort: usize,
    pub frequencies: BTreeMap<Number, usize>,
    pub most_frequent: Option<Number>,
    pub never_drawn: Vec<Number>,
}
