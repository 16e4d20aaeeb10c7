//! Validator: applies the rule set and counts every attempt

use lotto_core::{AttemptCounter, Candidate};
use std::sync::Arc;
use tracing::trace;
use crate::profile::RuleProfile;
use crate::rule::Rule;
use crate::violation::Evaluation;

/// Checks candidates against a rule set.
///
/// `is_valid` bumps the shared `AttemptCounter` once per call, so the counter
/// measures validation attempts rather than successful generations.
/// `evaluate` is the side-effect free variant used for reporting.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: Vec<Rule>,
    counter: Arc<AttemptCounter>,
}

impl Validator {
    pub fn new(profile: &RuleProfile, counter: Arc<AttemptCounter>) -> Self {
        Self::with_rules(profile.rules(), counter)
    }

    pub fn with_rules(rules: Vec<Rule>, counter: Arc<AttemptCounter>) -> Self {
        Self { rules, counter }
    }

    /// Standard rules with a private counter
    pub fn standard() -> Self {
        Self::new(&RuleProfile::standard(), Arc::new(AttemptCounter::new()))
    }

    /// Count the attempt, then test the rules, stopping at the first failure
    pub fn is_valid(&self, candidate: &Candidate) -> bool {
        let attempt = self.counter.increment();

        match self.rules.iter().find(|rule| !rule.passes(candidate)) {
            Some(rule) => {
                trace!(attempt, %candidate, rule = rule.id(), "candidate rejected");
                false
            }
            None => true,
        }
    }

    /// Report every failing rule without touching the counter
    pub fn evaluate(&self, candidate: &Candidate) -> Evaluation {
        let violations = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(candidate))
            .collect();
        Evaluation::new(*candidate, violations)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn counter(&self) -> &Arc<AttemptCounter> {
        &self.counter
    }

    /// Total attempts seen by the shared counter
    pub fn attempts(&self) -> u64 {
        self.counter.get()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::standard()
    }
}
