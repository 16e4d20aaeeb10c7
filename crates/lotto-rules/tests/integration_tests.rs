//! Integration tests for lotto-rules across the whole 5/36 space.

use lotto_core::{AttemptCounter, Candidate};
use lotto_rules::{RuleProfile, Validator};
use std::sync::Arc;

/// Every 5-subset of 1..=36 in lexicographic order
fn all_candidates() -> Vec<Candidate> {
    let mut out = Vec::with_capacity(376_992);
    for a in 1..=32u8 {
        for b in a + 1..=33 {
            for c in b + 1..=34 {
                for d in c + 1..=35 {
                    for e in d + 1..=36 {
                        out.push(Candidate::new([a, b, c, d, e]).unwrap());
                    }
                }
            }
        }
    }
    out
}

/// The three rules written out longhand
fn reference_is_valid(n: &[u8; 5]) -> bool {
    let gap_ok = (0..4).all(|i| n[i + 1] - n[i] >= 3);
    let d = [n[1] - n[0], n[2] - n[1], n[3] - n[2], n[4] - n[3]];
    let progression = d[0] == d[1] && d[1] == d[2] && d[2] == d[3];
    let cluster = (0..3).any(|i| n[i + 2] - n[i] <= 5);
    gap_ok && !progression && !cluster
}

#[test]
fn test_enumeration_size() {
    assert_eq!(all_candidates().len(), 376_992);
}

#[test]
fn test_validator_matches_reference_everywhere() {
    let validator = Validator::standard();

    for candidate in all_candidates() {
        let expected = reference_is_valid(candidate.numbers());
        assert_eq!(validator.is_valid(&candidate), expected, "{}", candidate);
    }

    assert_eq!(validator.attempts(), 376_992);
}

#[test]
fn test_evaluate_agrees_with_is_valid() {
    let validator = Validator::standard();

    for candidate in all_candidates() {
        let evaluation = validator.evaluate(&candidate);
        assert_eq!(evaluation.is_valid(), reference_is_valid(candidate.numbers()));
    }

    // evaluate never counts
    assert_eq!(validator.attempts(), 0);
}

#[test]
fn test_valid_combinations_exist() {
    let validator = Validator::standard();
    let valid = all_candidates()
        .into_iter()
        .filter(|c| validator.evaluate(c).is_valid())
        .count();

    assert!(valid > 0);
    assert!(valid < 376_992);
}

#[test]
fn test_relaxed_accepts_superset() {
    let counter = Arc::new(AttemptCounter::new());
    let standard = Validator::new(&RuleProfile::standard(), Arc::clone(&counter));
    let relaxed = Validator::new(&RuleProfile::relaxed(), counter);

    for candidate in all_candidates() {
        if standard.evaluate(&candidate).is_valid() {
            assert!(relaxed.evaluate(&candidate).is_valid(), "{}", candidate);
        }
    }
}

#[test]
fn test_reference_cases_report_expected_rules() {
    let validator = Validator::standard();

    let cases: [([u8; 5], &[&str]); 5] = [
        ([1, 4, 7, 10, 13], &["no_arithmetic_progression"]),
        ([1, 5, 9, 14, 20], &[]),
        ([1, 2, 3, 10, 20], &["minimum_gap", "no_tight_cluster"]),
        ([1, 6, 10, 15, 20], &[]),
        ([1, 4, 8, 11, 15], &[]),
    ];

    for (numbers, expected) in cases {
        let evaluation = validator.evaluate(&Candidate::new(numbers).unwrap());
        let ids: Vec<&str> = evaluation.violations.iter().map(|v| v.rule_id.as_str()).collect();
        assert_eq!(ids, expected, "{:?}", numbers);
    }
}
