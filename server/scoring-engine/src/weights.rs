//! Fixed DoD assessment weight table for the Level 2 practices.
//!
//! Keyed by NIST SP 800-171 requirement ids ("3.1.1"); values are the
//! published 1/3/5 point deductions. 3.12.4 carries no entry, and ids absent
//! from the table (including CMMC-style ids like "AC.1.001") deduct at
//! [`DEFAULT_WEIGHT`].

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Weight applied when a control id has no table entry.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Published per-practice deduction values.
#[rustfmt::skip]
pub static DOD_SCORE_VALUES: &[(&str, u32)] = &[
  ("3.1.1", 5), ("3.1.2", 5), ("3.1.3", 1), ("3.1.4", 1), ("3.1.5", 3),
  ("3.1.6", 1), ("3.1.7", 1), ("3.1.8", 1), ("3.1.9", 1), ("3.1.10", 1),
  ("3.1.11", 1), ("3.1.12", 5), ("3.1.13", 5), ("3.1.14", 1), ("3.1.15", 1),
  ("3.1.16", 5), ("3.1.17", 5), ("3.1.18", 5), ("3.1.19", 3), ("3.1.20", 1),
  ("3.1.21", 1), ("3.1.22", 1), ("3.2.1", 5), ("3.2.2", 5), ("3.2.3", 1),
  ("3.3.1", 5), ("3.3.2", 3), ("3.3.3", 1), ("3.3.4", 1), ("3.3.5", 5),
  ("3.3.6", 1), ("3.3.7", 1), ("3.3.8", 1), ("3.3.9", 1), ("3.4.1", 5),
  ("3.4.2", 5), ("3.4.3", 1), ("3.4.4", 1), ("3.4.5", 5), ("3.4.6", 5),
  ("3.4.7", 5), ("3.4.8", 5), ("3.4.9", 1), ("3.5.1", 5), ("3.5.2", 5),
  ("3.5.3", 5), ("3.5.4", 1), ("3.5.5", 1), ("3.5.6", 1), ("3.5.7", 1),
  ("3.5.8", 1), ("3.5.9", 1), ("3.5.10", 5), ("3.5.11", 1), ("3.6.1", 5),
  ("3.6.2", 5), ("3.6.3", 1), ("3.7.1", 3), ("3.7.2", 5), ("3.7.3", 1),
  ("3.7.4", 3), ("3.7.5", 5), ("3.7.6", 1), ("3.8.1", 3), ("3.8.2", 3),
  ("3.8.3", 5), ("3.8.4", 1), ("3.8.5", 1), ("3.8.6", 1), ("3.8.7", 5),
  ("3.8.8", 3), ("3.8.9", 1), ("3.9.1", 3), ("3.9.2", 5), ("3.10.1", 5),
  ("3.10.2", 5), ("3.10.3", 1), ("3.10.4", 1), ("3.10.5", 1), ("3.10.6", 1),
  ("3.11.1", 3), ("3.11.2", 5), ("3.11.3", 1), ("3.12.1", 5), ("3.12.2", 3),
  ("3.12.3", 5), ("3.13.1", 5), ("3.13.2", 5), ("3.13.3", 1), ("3.13.4", 1),
  ("3.13.5", 5), ("3.13.6", 5), ("3.13.7", 1), ("3.13.8", 3), ("3.13.9", 1),
  ("3.13.10", 1), ("3.13.11", 5), ("3.13.12", 1), ("3.13.13", 1), ("3.13.14", 1),
  ("3.13.15", 5), ("3.13.16", 1), ("3.14.1", 5), ("3.14.2", 5), ("3.14.3", 5),
  ("3.14.4", 5), ("3.14.5", 3), ("3.14.6", 5), ("3.14.7", 3),
];

static WEIGHT_MAP: Lazy<HashMap<&'static str, u32>> =
  Lazy::new(|| DOD_SCORE_VALUES.iter().copied().collect());

static MAX_POSSIBLE: Lazy<u32> =
  Lazy::new(|| DOD_SCORE_VALUES.iter().map(|(_, weight)| weight).sum());

/// Deduction weight for a control id ([`DEFAULT_WEIGHT`] if unlisted).
pub fn weight_for(control_id: &str) -> u32 {
  WEIGHT_MAP.get(control_id).copied().unwrap_or(DEFAULT_WEIGHT)
}

/// Sum of every table value: the ceiling for the implementation percentage.
pub fn max_possible_score() -> u32 {
  *MAX_POSSIBLE
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn table_shape() {
    assert_eq!(DOD_SCORE_VALUES.len(), 109);
    assert_eq!(max_possible_score(), 313);
  }

  #[test]
  fn ids_are_unique() {
    let ids: HashSet<_> = DOD_SCORE_VALUES.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids.len(), DOD_SCORE_VALUES.len());
  }

  #[test]
  fn weights_are_published_values_only() {
    assert!(DOD_SCORE_VALUES
      .iter()
      .all(|(_, weight)| matches!(*weight, 1 | 3 | 5)));
  }

  #[test]
  fn known_weights() {
    assert_eq!(weight_for("3.1.1"), 5);
    assert_eq!(weight_for("3.1.3"), 1);
    assert_eq!(weight_for("3.1.5"), 3);
    assert_eq!(weight_for("3.13.11"), 5);
  }

  #[test]
  fn unlisted_ids_fall_back_to_default() {
    assert_eq!(weight_for("3.12.4"), DEFAULT_WEIGHT);
    assert_eq!(weight_for("AC.1.001"), DEFAULT_WEIGHT);
  }
}
