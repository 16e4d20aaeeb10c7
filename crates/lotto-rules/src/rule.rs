//! Individual validity rules
//!
//! Each rule is a pure predicate over an ascending `Candidate`.

use lotto_core::{Candidate, Number};
use serde::{Deserialize, Serialize};
use crate::violation::Violation;

/// A single structural rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// Every pair of neighbours must be at least `min` apart
    MinimumGap { min: Number },

    /// The four neighbour gaps must not all be equal
    NoArithmeticProgression,

    /// Numbers two positions apart must span more than `max_span`
    NoTightCluster { max_span: Number },
}

impl Rule {
    /// Stable identifier used in violations and logs
    pub fn id(&self) -> &'static str {
        match self {
            Rule::MinimumGap { .. } => "minimum_gap",
            Rule::NoArithmeticProgression => "no_arithmetic_progression",
            Rule::NoTightCluster { .. } => "no_tight_cluster",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Rule::MinimumGap { .. } => "Minimum Gap",
            Rule::NoArithmeticProgression => "No Arithmetic Progression",
            Rule::NoTightCluster { .. } => "No Tight Cluster",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Rule::MinimumGap { min } => {
                format!("Neighbouring numbers must differ by at least {}", min)
            }
            Rule::NoArithmeticProgression => {
                "The five numbers must not form an arithmetic progression".to_string()
            }
            Rule::NoTightCluster { max_span } => {
                format!("No three consecutive numbers may fit within a span of {}", max_span)
            }
        }
    }

    /// Fast check with no allocation
    pub fn passes(&self, candidate: &Candidate) -> bool {
        match self {
            Rule::MinimumGap { min } => candidate.gaps().iter().all(|gap| gap >= min),
            Rule::NoArithmeticProgression => {
                let gaps = candidate.gaps();
                !gaps.iter().all(|&gap| gap == gaps[0])
            }
            Rule::NoTightCluster { max_span } => {
                candidate.spans().iter().all(|span| span > max_span)
            }
        }
    }

    /// Evaluate the rule, describing the first offending position on failure
    pub fn evaluate(&self, candidate: &Candidate) -> Option<Violation> {
        if self.passes(candidate) {
            return None;
        }

        let n = candidate.numbers();
        let (location, detail) = match self {
            Rule::MinimumGap { min } => {
                let i = candidate.gaps().iter().position(|gap| gap < min)?;
                (
                    format!("n{}..n{}", i, i + 1),
                    format!(
                        "{} and {} are only {} apart (minimum {})",
                        n[i], n[i + 1], n[i + 1] - n[i], min
                    ),
                )
            }
            Rule::NoArithmeticProgression => (
                "n0..n4".to_string(),
                format!("constant step of {}", candidate.gaps()[0]),
            ),
            Rule::NoTightCluster { max_span } => {
                let i = candidate.spans().iter().position(|span| span <= max_span)?;
                (
                    format!("n{}..n{}", i, i + 2),
                    format!(
                        "{}, {} and {} span only {} (must exceed {})",
                        n[i], n[i + 1], n[i + 2], n[i + 2] - n[i], max_span
                    ),
                )
            }
        };

        Some(
            Violation::new(self.id(), self.name(), detail)
                .with_location(location),
        )
    }
}

/// The three rules with their standard thresholds
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::MinimumGap { min: 3 },
        Rule::NoArithmeticProgression,
        Rule::NoTightCluster { max_span: 5 },
    ]
}
