//! Lotto Core: data model shared by the 5/36 generator crates
//!
//! Holds the `Candidate` type (five distinct, ascending numbers in 1..=36),
//! the process-wide `AttemptCounter` handle and the unified error model.

pub mod counter;
pub mod data_model;
pub mod error;

pub use counter::AttemptCounter;
pub use data_model::{Candidate, CandidateError, Number, COMBINATION_SIZE, MAX_NUMBER, MIN_NUMBER};
pub use error::LottoError;

/// Engine version reported by the CLI
pub const LOTTO_VERSION: &str = "1.0.0";
