//! Fixed SPRS classification tables.
//!
//! External reports and dashboards match on the exact label text, so the
//! band strings must never change. Bands are evaluated top-down; the first
//! (highest) matching threshold wins.

/// Implementation level bands (SPRS score -> label).
const LEVEL_BANDS: &[(i32, &str)] = &[
  (110, "Level 2 (110 practices)"),
  (100, "Level 2 (100-109 practices)"),
  (80, "Level 2 (80-99 practices)"),
  (60, "Level 1 (60-79 practices)"),
  (1, "Level 1 (1-59 practices)"),
  (-100, "Non-Compliant (0 to -100)"),
];

const LEVEL_FLOOR: &str = "Severely Non-Compliant (Below -100)";

/// Implementation factor bands (implementation percentage -> factor string).
const FACTOR_BANDS: &[(i32, &str)] = &[
  (100, "1.0"),
  (95, "0.95"),
  (90, "0.9"),
  (85, "0.85"),
  (80, "0.8"),
  (75, "0.75"),
  (70, "0.7"),
  (65, "0.65"),
  (60, "0.6"),
  (50, "0.5"),
  (40, "0.4"),
  (30, "0.3"),
  (20, "0.2"),
  (10, "0.1"),
];

const FACTOR_FLOOR: &str = "0.0";

/// Descriptive implementation level for an SPRS score.
pub fn implementation_level(score: i32) -> &'static str {
  band(score, LEVEL_BANDS, LEVEL_FLOOR)
}

/// Implementation factor for an implementation percentage.
pub fn implementation_factor(percentage: i32) -> &'static str {
  band(percentage, FACTOR_BANDS, FACTOR_FLOOR)
}

fn band(value: i32, bands: &[(i32, &'static str)], floor: &'static str) -> &'static str {
  for (threshold, label) in bands {
    if value >= *threshold {
      return label;
    }
  }
  floor
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn level_band_boundaries() {
    assert_eq!(implementation_level(110), "Level 2 (110 practices)");
    assert_eq!(implementation_level(109), "Level 2 (100-109 practices)");
    assert_eq!(implementation_level(100), "Level 2 (100-109 practices)");
    assert_eq!(implementation_level(99), "Level 2 (80-99 practices)");
    assert_eq!(implementation_level(80), "Level 2 (80-99 practices)");
    assert_eq!(implementation_level(79), "Level 1 (60-79 practices)");
    assert_eq!(implementation_level(60), "Level 1 (60-79 practices)");
    assert_eq!(implementation_level(59), "Level 1 (1-59 practices)");
    assert_eq!(implementation_level(1), "Level 1 (1-59 practices)");
    assert_eq!(implementation_level(0), "Non-Compliant (0 to -100)");
    assert_eq!(implementation_level(-100), "Non-Compliant (0 to -100)");
    assert_eq!(implementation_level(-101), "Severely Non-Compliant (Below -100)");
    assert_eq!(implementation_level(-203), "Severely Non-Compliant (Below -100)");
  }

  #[test]
  fn factor_band_boundaries() {
    assert_eq!(implementation_factor(100), "1.0");
    assert_eq!(implementation_factor(99), "0.95");
    assert_eq!(implementation_factor(95), "0.95");
    assert_eq!(implementation_factor(94), "0.9");
    assert_eq!(implementation_factor(60), "0.6");
    assert_eq!(implementation_factor(59), "0.5");
    assert_eq!(implementation_factor(10), "0.1");
    assert_eq!(implementation_factor(9), "0.0");
    assert_eq!(implementation_factor(0), "0.0");
  }

  #[test]
  fn factor_never_panics_on_out_of_range_input() {
    assert_eq!(implementation_factor(-35), "0.0");
    assert_eq!(implementation_factor(250), "1.0");
  }
}
