//! Lotto History: recent generations and lifetime counts
//!
//! # Example
//!
//! ```
//! use lotto_core::Candidate;
//! use lotto_history::History;
//!
//! let mut history = History::new();
//! history.record(Candidate::new([1, 5, 9, 14, 20]).unwrap());
//!
//! let json = history.to_json().unwrap();
//! let restored = History::from_json(&json).unwrap();
//! assert_eq!(restored.generation_count(), 1);
//! ```

pub mod history;
pub mod record;

pub use history::{History, HistoryError, HistorySnapshot, HistoryStats, MAX_HISTORY};
pub use record::GenerationRecord;
