//! Rounding helpers shared by both calculators.

/// Round half-up (toward +inf): ties go to the larger value, so -45.5
/// reports as -45, not -46. Scores deduct in half-point steps and can land
/// exactly on .5.
pub fn round_half_up(value: f64) -> i64 {
  (value + 0.5).floor() as i64
}

/// Integer percentage of part/whole, or 0 when the whole is 0.
pub fn ratio_percent(part: f64, whole: f64) -> i32 {
  if whole <= 0.0 {
    return 0;
  }
  round_half_up(part / whole * 100.0) as i32
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rounds_positive_half_up() {
    assert_eq!(round_half_up(2.5), 3);
    assert_eq!(round_half_up(2.4), 2);
    assert_eq!(round_half_up(109.5), 110);
  }

  #[test]
  fn rounds_negative_half_toward_positive() {
    assert_eq!(round_half_up(-45.5), -45);
    assert_eq!(round_half_up(-45.6), -46);
    assert_eq!(round_half_up(-0.5), 0);
  }

  #[test]
  fn percent_of_zero_whole_is_zero() {
    assert_eq!(ratio_percent(5.0, 0.0), 0);
  }

  #[test]
  fn percent_rounds_like_scores() {
    assert_eq!(ratio_percent(10.0, 17.0), 59);
    assert_eq!(ratio_percent(16.0, 16.0), 100);
    assert_eq!(ratio_percent(1.0, 3.0), 33);
  }
}
