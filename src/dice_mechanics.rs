//! Outcome encoding: 3-die rolls to totals and High/Low classes.

use crate::constants::HIGH_THRESHOLD;
use crate::types::Outcome;

/// Sum of the three die faces (3-18 for valid dice).
pub fn dice_total(d1: u32, d2: u32, d3: u32) -> u32 {
    d1 + d2 + d3
}

/// Classify a round total: High iff strictly greater than 10.
pub fn outcome_of_total(total: u32) -> Outcome {
    if total > HIGH_THRESHOLD {
        Outcome::High
    } else {
        Outcome::Low
    }
}

/// A die face outside 1-6 marks a malformed feed entry.
pub fn valid_die(d: u32) -> bool {
    (1..=6).contains(&d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_faces() {
        assert_eq!(dice_total(1, 1, 1), 3);
        assert_eq!(dice_total(6, 6, 6), 18);
        assert_eq!(dice_total(3, 4, 4), 11);
    }

    #[test]
    fn threshold_is_strictly_greater_than_10() {
        assert_eq!(outcome_of_total(3), Outcome::Low);
        assert_eq!(outcome_of_total(10), Outcome::Low);
        assert_eq!(outcome_of_total(11), Outcome::High);
        assert_eq!(outcome_of_total(18), Outcome::High);
    }

    #[test]
    fn die_validity_range() {
        assert!(!valid_die(0));
        assert!(valid_die(1));
        assert!(valid_die(6));
        assert!(!valid_die(7));
    }
}
