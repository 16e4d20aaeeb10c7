//! Rule Profiles: thresholds for the validity rules
//!
//! The standard profile reproduces the classic rules (gap >= 3, no
//! progression, three-number span > 5). Profiles can also be loaded from YAML.

use lotto_core::{Candidate, Number, COMBINATION_SIZE, MAX_NUMBER, MIN_NUMBER};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::rule::Rule;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("min_gap {0} leaves no satisfiable combination (allowed 1..={1})")]
    UnsatisfiableGap(Number, Number),

    #[error("profile {0} rejects every combination")]
    Unsatisfiable(String),

    #[error("invalid profile YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Thresholds used to build the rule set
///
/// Missing YAML keys fall back to the standard profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleProfile {
    /// Profile name (e.g., "standard@1.0")
    pub name: String,

    /// Smallest allowed difference between neighbours
    pub min_gap: Number,

    /// Windows of three numbers spanning this much or less are rejected
    pub max_cluster_span: Number,

    /// Reject combinations whose gaps are all equal
    pub forbid_progression: bool,
}

impl RuleProfile {
    /// The classic rule set
    pub fn standard() -> Self {
        Self {
            name: "standard@1.0".to_string(),
            min_gap: 3,
            max_cluster_span: 5,
            forbid_progression: true,
        }
    }

    /// Looser spacing, same progression rule
    pub fn relaxed() -> Self {
        Self {
            name: "relaxed@1.0".to_string(),
            min_gap: 2,
            max_cluster_span: 3,
            forbid_progression: true,
        }
    }

    /// Load profile from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_yaml::from_str(yaml)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Get profile by name
    pub fn for_name(name: &str) -> Self {
        match name {
            "standard" => Self::standard(),
            "relaxed" => Self::relaxed(),
            _ => Self::standard(), // Default to standard
        }
    }

    /// Reject thresholds no combination could ever meet
    pub fn validate(&self) -> Result<(), ProfileError> {
        let largest = (MAX_NUMBER - MIN_NUMBER) / (COMBINATION_SIZE as Number - 1);
        if self.min_gap == 0 || self.min_gap > largest {
            return Err(ProfileError::UnsatisfiableGap(self.min_gap, largest));
        }
        if self.first_satisfying().is_none() {
            return Err(ProfileError::Unsatisfiable(self.name.clone()));
        }
        Ok(())
    }

    /// Lexicographically smallest combination passing every rule
    pub fn first_satisfying(&self) -> Option<Candidate> {
        let rules = self.rules();
        let step = self.min_gap.max(1);
        let top = MAX_NUMBER;

        for a in MIN_NUMBER..=top {
            for b in a + step..=top {
                for c in b + step..=top {
                    for d in c + step..=top {
                        for e in d + step..=top {
                            if let Ok(candidate) = Candidate::new([a, b, c, d, e]) {
                                if rules.iter().all(|rule| rule.passes(&candidate)) {
                                    return Some(candidate);
                                }
                            }
                        }
                    }
                }
            }
        }
        None
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules = vec![Rule::MinimumGap { min: self.min_gap }];
        if self.forbid_progression {
            rules.push(Rule::NoArithmeticProgression);
        }
        rules.push(Rule::NoTightCluster {
            max_span: self.max_cluster_span,
        });
        rules
    }
}

impl Default for RuleProfile {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::default_rules;

    #[test]
    fn test_standard_matches_default_rules() {
        assert_eq!(RuleProfile::standard().rules(), default_rules());
    }

    #[test]
    fn test_for_name_falls_back() {
        assert_eq!(RuleProfile::for_name("relaxed").min_gap, 2);
        assert_eq!(RuleProfile::for_name("unknown"), RuleProfile::standard());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "name: custom\nmin_gap: 4\nmax_cluster_span: 9\n";
        let profile = RuleProfile::from_yaml(yaml).unwrap();
        assert_eq!(profile.min_gap, 4);
        assert!(profile.forbid_progression);

        let partial = RuleProfile::from_yaml("min_gap: 2\n").unwrap();
        assert_eq!(partial.max_cluster_span, 5);
        assert_eq!(partial.name, "standard@1.0");
    }

    #[test]
    fn test_unsatisfiable_gap() {
        // 1 + 4 * 9 = 37 is already out of range
        let yaml = "name: strict\nmin_gap: 9\nmax_cluster_span: 5\n";
        assert!(matches!(
            RuleProfile::from_yaml(yaml),
            Err(ProfileError::UnsatisfiableGap(9, 8))
        ));

        let mut profile = RuleProfile::standard();
        profile.min_gap = 0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_first_satisfying() {
        let first = RuleProfile::standard().first_satisfying().unwrap();
        assert_eq!(first.numbers(), &[1, 4, 7, 10, 14]);
    }

    #[test]
    fn test_cluster_span_covering_pool_rejected() {
        let profile = RuleProfile {
            max_cluster_span: 35,
            ..RuleProfile::standard()
        };
        assert!(matches!(profile.validate(), Err(ProfileError::Unsatisfiable(_))));
    }

    #[test]
    fn test_widest_gap_needs_progressions() {
        // gaps of 8 only fit as 1, 9, 17, 25, 33
        let progression_allowed = RuleProfile {
            min_gap: 8,
            forbid_progression: false,
            ..RuleProfile::standard()
        };
        assert!(progression_allowed.validate().is_ok());
        assert_eq!(
            progression_allowed.first_satisfying().unwrap().numbers(),
            &[1, 9, 17, 25, 33]
        );

        let progression_forbidden = RuleProfile {
            min_gap: 8,
            ..RuleProfile::standard()
        };
        assert!(matches!(
            progression_forbidden.validate(),
            Err(ProfileError::Unsatisfiable(_))
        ));
    }

    #[test]
    fn test_progression_can_be_disabled() {
        let mut profile = RuleProfile::standard();
        profile.forbid_progression = false;
        assert!(!profile.rules().contains(&Rule::NoArithmeticProgression));
    }
}
