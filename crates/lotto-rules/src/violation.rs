//! Violation and evaluation types
//!
//! An `Evaluation` is the full report for one candidate: every rule that
//! failed, in rule order.

use lotto_core::Candidate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A specific rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule that was violated
    pub rule_id: String,
    /// Human-readable rule name
    pub rule_name: String,
    /// What went wrong
    pub description: String,
    /// Positions involved, e.g. `n1..n3`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Violation {
    pub fn new(
        rule_id: impl Into<String>,
        rule_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            rule_name: rule_name.into(),
            description: description.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.rule_name, self.description)?;
        if let Some(location) = &self.location {
            write!(f, " [{}]", location)?;
        }
        Ok(())
    }
}

/// Result of checking a candidate against every rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub candidate: Candidate,
    pub violations: Vec<Violation>,
}

impl Evaluation {
    pub fn new(candidate: Candidate, violations: Vec<Violation>) -> Self {
        Self { candidate, violations }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Did the given rule fail?
    pub fn violated(&self, rule_id: &str) -> bool {
        self.violations.iter().any(|v| v.rule_id == rule_id)
    }

    /// Get a one-line summary
    pub fn summary(&self) -> String {
        if self.is_valid() {
            format!("VALID {}", self.candidate)
        } else {
            let ids: Vec<&str> = self.violations.iter().map(|v| v.rule_id.as_str()).collect();
            format!("INVALID {} ({})", self.candidate, ids.join(", "))
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
