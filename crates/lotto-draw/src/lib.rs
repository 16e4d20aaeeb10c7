//! Lotto Draw: constrained random 5/36 combinations
//!
//! A `Shuffler` draws uniform 5-subsets of 1..=36 with a Fisher-Yates
//! shuffle; a `Generator` repeats the draw until the `Validator` accepts a
//! candidate or the attempt ceiling is reached.
//!
//! ```text
//! Generator ──▶ Shuffler ──▶ Candidate ──▶ Validator ──▶ bool
//!     ▲                                                  │
//!     └──────────── retry while invalid ◀───────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use lotto_draw::Generator;
//!
//! let mut generator = Generator::seeded(7);
//! let generation = generator.generate_valid();
//!
//! println!("{}", generation);
//! assert_eq!(generator.total_attempts(), u64::from(generation.attempts()));
//! ```

pub mod config;
pub mod generator;
pub mod shuffler;
pub mod source;

pub use config::{ConfigError, GeneratorConfig, DEFAULT_MAX_ATTEMPTS};
pub use generator::{Generation, Generator};
pub use shuffler::{fisher_yates, sample_subset, Shuffler};
pub use source::{RandomSource, RngSource, SequenceSource};

/// Generate one combination with the standard rules and fresh entropy
pub fn generate_valid() -> Generation {
    Generator::from_entropy().generate_valid()
}
