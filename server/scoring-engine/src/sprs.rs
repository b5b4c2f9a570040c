//! DoD SPRS weighted score for a Level 2 snapshot.
//!
//! Starts from the 110-point ceiling and deducts per-practice weights: full
//! weight for `no`, half weight for `partial`, and full weight for every
//! in-scope practice in the weight table with no response at all. The
//! reported score never drops below the published -203 floor.

use std::collections::{HashMap, HashSet};

use crate::classify;
use crate::error::EngineError;
use crate::percent::{ratio_percent, round_half_up};
use crate::scoping;
use crate::types::{ControlResponse, ResponseStatus, ScopingDecision, SprsReport};
use crate::weights;

/// Maximum reportable score (one point per Level 2 practice).
pub const MAX_SPRS_SCORE: i32 = 110;
/// Published score floor.
pub const MIN_SPRS_SCORE: i32 = -203;

/// Compute the SPRS report for a Level 2 snapshot.
///
/// Callers are responsible for rejecting non-Level-2 assessments before
/// invoking this ([`crate::run`] enforces it for the CLI contract).
pub fn calculate_sprs(
  responses: &[ControlResponse],
  scoping_decisions: &[ScopingDecision],
) -> Result<SprsReport, EngineError> {
  let total_controls = MAX_SPRS_SCORE as u32;

  let scoping_map = scoping::scoping_map(scoping_decisions);
  if scoping_map.len() as u32 > total_controls {
    return Err(EngineError::ScopingExceedsCatalog {
      named: scoping_map.len(),
      total: total_controls,
    });
  }

  // Last-seen response wins for a duplicated control.
  let mut by_control: HashMap<&str, &ControlResponse> = HashMap::with_capacity(responses.len());
  for response in responses {
    by_control.insert(response.control_id.as_str(), response);
  }

  let mut in_scope_controls = 0u32;
  let mut compliant_controls = 0u32;
  let mut partial_controls = 0u32;
  let mut non_compliant_controls = 0u32;
  let mut deductions = 0.0f64;
  let mut assessed: HashSet<&str> = HashSet::with_capacity(by_control.len());

  for (control_id, response) in &by_control {
    assessed.insert(*control_id);
    if !scoping::is_in_scope(control_id, &scoping_map) {
      continue;
    }
    in_scope_controls += 1;
    let weight = weights::weight_for(control_id) as f64;
    match response.status {
      ResponseStatus::Yes => compliant_controls += 1,
      ResponseStatus::Partial => {
        partial_controls += 1;
        deductions += weight * 0.5;
      }
      ResponseStatus::No => {
        non_compliant_controls += 1;
        deductions += weight;
      }
      // Applicability belongs to scoping decisions; a stray not_applicable
      // answer joins no class and deducts nothing.
      ResponseStatus::NotApplicable => {}
    }
  }

  let out_of_scope = scoping::out_of_scope_count(&scoping_map);
  let not_assessed_controls =
    (total_controls as i64 - out_of_scope as i64 - assessed.len() as i64).max(0) as u32;

  // Every in-scope practice with no answer at all deducts its full weight,
  // on top of being counted as not assessed above.
  for (control_id, weight) in weights::DOD_SCORE_VALUES {
    if !assessed.contains(control_id) && scoping::is_in_scope(control_id, &scoping_map) {
      deductions += *weight as f64;
    }
  }

  let sprs_score =
    (round_half_up(MAX_SPRS_SCORE as f64 - deductions) as i32).max(MIN_SPRS_SCORE);

  let max_possible = weights::max_possible_score() as f64;
  let implementation_percentage = ratio_percent(max_possible - deductions, max_possible);

  Ok(SprsReport {
    sprs_score,
    total_controls,
    in_scope_controls,
    compliant_controls,
    partial_controls,
    non_compliant_controls,
    not_assessed_controls,
    total_non_compliant: non_compliant_controls + not_assessed_controls,
    implementation_percentage,
    implementation_level: classify::implementation_level(sprs_score).to_string(),
    implementation_factor: classify::implementation_factor(implementation_percentage).to_string(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::weights::DOD_SCORE_VALUES;

  fn response(control_id: &str, status: ResponseStatus) -> ControlResponse {
    ControlResponse {
      id: 0,
      assessment_id: 1,
      control_id: control_id.into(),
      status,
      evidence: None,
      notes: None,
      updated_at: None,
    }
  }

  fn decision(control_id: &str, applicable: bool) -> ScopingDecision {
    ScopingDecision {
      id: 0,
      assessment_id: 1,
      control_id: control_id.into(),
      applicable,
      reason: None,
    }
  }

  /// Every weighted practice plus 3.12.4 answered with one status.
  fn full_snapshot(status: ResponseStatus) -> Vec<ControlResponse> {
    DOD_SCORE_VALUES
      .iter()
      .map(|(id, _)| response(id, status))
      .chain(std::iter::once(response("3.12.4", status)))
      .collect()
  }

  #[test]
  fn empty_snapshot_bottoms_out() {
    let report = calculate_sprs(&[], &[]).unwrap();
    // All 313 table points deduct; the floor holds at -203.
    assert_eq!(report.sprs_score, MIN_SPRS_SCORE);
    assert_eq!(report.in_scope_controls, 0);
    assert_eq!(report.not_assessed_controls, 110);
    assert_eq!(report.total_non_compliant, 110);
    assert_eq!(report.implementation_percentage, 0);
    assert_eq!(report.implementation_level, "Severely Non-Compliant (Below -100)");
    assert_eq!(report.implementation_factor, "0.0");
  }

  #[test]
  fn fully_compliant_snapshot_scores_the_ceiling() {
    let responses = full_snapshot(ResponseStatus::Yes);
    let report = calculate_sprs(&responses, &[]).unwrap();
    assert_eq!(report.sprs_score, MAX_SPRS_SCORE);
    assert_eq!(report.in_scope_controls, 110);
    assert_eq!(report.compliant_controls, 110);
    assert_eq!(report.not_assessed_controls, 0);
    assert_eq!(report.total_non_compliant, 0);
    assert_eq!(report.implementation_percentage, 100);
    assert_eq!(report.implementation_level, "Level 2 (110 practices)");
    assert_eq!(report.implementation_factor, "1.0");
  }

  #[test]
  fn single_no_deducts_full_weight() {
    let mut responses = full_snapshot(ResponseStatus::Yes);
    responses.retain(|r| r.control_id != "3.1.1");
    responses.push(response("3.1.1", ResponseStatus::No));

    let report = calculate_sprs(&responses, &[]).unwrap();
    assert_eq!(report.sprs_score, 105);
    assert_eq!(report.non_compliant_controls, 1);
    assert_eq!(report.implementation_level, "Level 2 (100-109 practices)");
  }

  #[test]
  fn partial_deducts_half_weight() {
    let mut responses = full_snapshot(ResponseStatus::Yes);
    responses.retain(|r| r.control_id != "3.1.1");
    responses.push(response("3.1.1", ResponseStatus::Partial));

    let report = calculate_sprs(&responses, &[]).unwrap();
    // 110 - 2.5, ties round toward +inf.
    assert_eq!(report.sprs_score, 108);
    assert_eq!(report.partial_controls, 1);
  }

  #[test]
  fn unassessed_practice_deducts_full_weight() {
    let mut responses = full_snapshot(ResponseStatus::Yes);
    responses.retain(|r| r.control_id != "3.1.1");

    let report = calculate_sprs(&responses, &[]).unwrap();
    assert_eq!(report.sprs_score, 105);
    assert_eq!(report.not_assessed_controls, 1);
    assert_eq!(report.total_non_compliant, 1);
  }

  #[test]
  fn out_of_scope_practice_is_fully_excluded() {
    let mut responses = full_snapshot(ResponseStatus::Yes);
    responses.retain(|r| r.control_id != "3.1.1");
    // Answered no, but out of scope: no class count, no deduction.
    responses.push(response("3.1.1", ResponseStatus::No));
    let decisions = vec![decision("3.1.1", false)];

    let report = calculate_sprs(&responses, &decisions).unwrap();
    assert_eq!(report.sprs_score, MAX_SPRS_SCORE);
    assert_eq!(report.in_scope_controls, 109);
    assert_eq!(report.non_compliant_controls, 0);
    assert_eq!(report.not_assessed_controls, 0);
  }

  #[test]
  fn unscoped_unanswered_practice_counts_against_the_score() {
    // No response and no decision for 3.2.1 (weight 5): in scope, not
    // assessed, full deduction.
    let mut responses = full_snapshot(ResponseStatus::Yes);
    responses.retain(|r| r.control_id != "3.2.1");

    let report = calculate_sprs(&responses, &[]).unwrap();
    assert_eq!(report.sprs_score, 105);
    assert_eq!(report.not_assessed_controls, 1);
  }

  #[test]
  fn unlisted_control_id_deducts_default_weight() {
    let mut responses = full_snapshot(ResponseStatus::Yes);
    responses.push(response("AC.1.001", ResponseStatus::No));

    let report = calculate_sprs(&responses, &[]).unwrap();
    assert_eq!(report.sprs_score, 109);
    assert_eq!(report.non_compliant_controls, 1);
  }

  #[test]
  fn not_applicable_answer_is_assessed_but_unclassified() {
    let mut responses = full_snapshot(ResponseStatus::Yes);
    responses.retain(|r| r.control_id != "3.1.1");
    responses.push(response("3.1.1", ResponseStatus::NotApplicable));

    let report = calculate_sprs(&responses, &[]).unwrap();
    // Assessed, so no unanswered deduction; in scope, so counted there.
    assert_eq!(report.sprs_score, MAX_SPRS_SCORE);
    assert_eq!(report.in_scope_controls, 110);
    assert_eq!(report.compliant_controls, 109);
    assert_eq!(report.not_assessed_controls, 0);
  }

  #[test]
  fn status_upgrades_never_lower_the_score() {
    let base: Vec<_> = DOD_SCORE_VALUES
      .iter()
      .take(40)
      .map(|(id, _)| response(id, ResponseStatus::Yes))
      .collect();

    let mut scores = Vec::new();
    for status in [ResponseStatus::No, ResponseStatus::Partial, ResponseStatus::Yes] {
      let mut responses = base.clone();
      responses.push(response("3.13.11", status));
      scores.push(calculate_sprs(&responses, &[]).unwrap().sprs_score);
    }
    assert!(scores[0] <= scores[1] && scores[1] <= scores[2]);
  }

  #[test]
  fn scoping_wider_than_the_level_is_rejected() {
    let decisions: Vec<_> = (0..111)
      .map(|i| decision(&format!("c{}", i), false))
      .collect();
    let err = calculate_sprs(&[], &decisions).unwrap_err();
    assert!(matches!(err, EngineError::ScopingExceedsCatalog { .. }));
  }
}
