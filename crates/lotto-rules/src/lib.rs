//! Lotto Rules: structural validity of 5/36 combinations
//!
//! A combination is valid when it breaks none of three rules:
//!
//! 1. neighbouring numbers differ by at least 3
//! 2. the numbers do not form a full arithmetic progression
//! 3. no three consecutive numbers fit within a span of 5
//!
//! # Example
//!
//! ```
//! use lotto_core::Candidate;
//! use lotto_rules::Validator;
//!
//! let validator = Validator::standard();
//! let candidate = Candidate::new([1, 5, 9, 14, 20]).unwrap();
//!
//! assert!(validator.is_valid(&candidate));
//! assert_eq!(validator.attempts(), 1);
//!
//! let report = validator.evaluate(&Candidate::new([1, 4, 7, 10, 13]).unwrap());
//! for violation in &report.violations {
//!     println!("  - {}", violation);
//! }
//! ```

pub mod profile;
pub mod rule;
pub mod validator;
pub mod violation;

pub use profile::{ProfileError, RuleProfile};
pub use rule::{default_rules, Rule};
pub use validator::Validator;
pub use violation::{Evaluation, Violation};

use lotto_core::Candidate;

/// Check a candidate against the standard rules without counting the attempt
pub fn check(candidate: &Candidate) -> Evaluation {
    Validator::standard().evaluate(candidate)
}

/// Quick validity check for raw numbers in any order.
///
/// Returns `false` for inputs that are not a well-formed candidate.
pub fn is_valid_combination(numbers: &[u8]) -> bool {
    match Candidate::from_slice(numbers) {
        Ok(candidate) => check(&candidate).is_valid(),
        Err(_) => false,
    }
}
