//! Data Model: Number, Candidate
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single drawn number, always within `MIN_NUMBER..=MAX_NUMBER`.
pub type Number = u8;

/// Smallest number in the pool
pub const MIN_NUMBER: Number = 1;

/// Largest number in the pool
pub const MAX_NUMBER: Number = 36;

/// How many numbers make up one combination
pub const COMBINATION_SIZE: usize = 5;

/// Reasons a set of numbers cannot form a `Candidate`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    #[error("expected {expected} numbers, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("number {0} is outside 1..=36")]
    OutOfRange(Number),

    #[error("number {0} appears more than once")]
    Duplicate(Number),
}

/// Five distinct numbers from the pool, kept in strictly ascending order.
///
/// Every constructor sorts its input, so two candidates built from the same
/// set of numbers compare equal regardless of the order they were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<Number>", into = "Vec<Number>")]
pub struct Candidate([Number; COMBINATION_SIZE]);

impl Candidate {
    /// Build a candidate from five numbers in any order
    pub fn new(mut numbers: [Number; COMBINATION_SIZE]) -> Result<Self, CandidateError> {
        numbers.sort_unstable();

        for &n in &numbers {
            if !(MIN_NUMBER..=MAX_NUMBER).contains(&n) {
                return Err(CandidateError::OutOfRange(n));
            }
        }

        for pair in numbers.windows(2) {
            if pair[0] == pair[1] {
                return Err(CandidateError::Duplicate(pair[0]));
            }
        }

        Ok(Self(numbers))
    }

    /// Build a candidate from a slice, checking its length first
    pub fn from_slice(numbers: &[Number]) -> Result<Self, CandidateError> {
        let array: [Number; COMBINATION_SIZE] =
            numbers.try_into().map_err(|_| CandidateError::WrongLength {
                expected: COMBINATION_SIZE,
                got: numbers.len(),
            })?;
        Self::new(array)
    }

    /// The numbers in ascending order
    pub fn numbers(&self) -> &[Number; COMBINATION_SIZE] {
        &self.0
    }

    /// Differences between neighbouring numbers (`n[i+1] - n[i]`)
    pub fn gaps(&self) -> [Number; COMBINATION_SIZE - 1] {
        let n = &self.0;
        [n[1] - n[0], n[2] - n[1], n[3] - n[2], n[4] - n[3]]
    }

    /// Spans of the windows two positions apart: `(n0,n2)`, `(n1,n3)`, `(n2,n4)`
    pub fn spans(&self) -> [Number; COMBINATION_SIZE - 2] {
        let n = &self.0;
        [n[2] - n[0], n[3] - n[1], n[4] - n[2]]
    }

    pub fn contains(&self, number: Number) -> bool {
        self.0.binary_search(&number).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<Number>> for Candidate {
    type Error = CandidateError;

    fn try_from(value: Vec<Number>) -> Result<Self, Self::Error> {
        Self::from_slice(&value)
    }
}

impl From<Candidate> for Vec<Number> {
    fn from(candidate: Candidate) -> Self {
        candidate.0.to_vec()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| format!("{:02}", n)).collect();
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_input() {
        let candidate = Candidate::new([20, 1, 14, 5, 9]).unwrap();
        assert_eq!(candidate.numbers(), &[1, 5, 9, 14, 20]);
    }

    #[test]
    fn test_same_set_compares_equal() {
        let a = Candidate::new([3, 30, 12, 21, 7]).unwrap();
        let b = Candidate::new([30, 21, 12, 7, 3]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Candidate::new([0, 5, 9, 14, 20]),
            Err(CandidateError::OutOfRange(0))
        );
        assert_eq!(
            Candidate::new([1, 5, 9, 14, 37]),
            Err(CandidateError::OutOfRange(37))
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            Candidate::new([1, 5, 5, 14, 20]),
            Err(CandidateError::Duplicate(5))
        );
    }

    #[test]
    fn test_from_slice_length() {
        assert_eq!(
            Candidate::from_slice(&[1, 2, 3]),
            Err(CandidateError::WrongLength { expected: 5, got: 3 })
        );
        assert!(Candidate::from_slice(&[1, 2, 3, 4, 36]).is_ok());
    }

    #[test]
    fn test_gaps_and_spans() {
        let candidate = Candidate::new([1, 4, 8, 11, 15]).unwrap();
        assert_eq!(candidate.gaps(), [3, 4, 3, 4]);
        assert_eq!(candidate.spans(), [7, 7, 7]);
    }

    #[test]
    fn test_display() {
        let candidate = Candidate::new([1, 5, 9, 14, 20]).unwrap();
        assert_eq!(candidate.to_string(), "01 05 09 14 20");
    }

    #[test]
    fn test_serde_as_array() {
        let candidate = Candidate::new([1, 5, 9, 14, 20]).unwrap();
        let json = serde_json::to_string(&candidate).unwrap();
        assert_eq!(json, "[1,5,9,14,20]");

        let parsed: Candidate = serde_json::from_str("[20,14,9,5,1]").unwrap();
        assert_eq!(parsed, candidate);

        assert!(serde_json::from_str::<Candidate>("[1,1,9,14,20]").is_err());
    }
}
