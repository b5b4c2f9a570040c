//! Completion and compliance statistics for one assessment snapshot.

use std::collections::HashMap;

use crate::error::EngineError;
use crate::percent::ratio_percent;
use crate::scoping;
use crate::types::{
  AssessmentLevel, CompletionStats, ControlResponse, ResponseStatus, ScopingDecision,
};

/// Compute completion/compliance statistics for a snapshot.
///
/// Out-of-scope controls shrink the applicable denominator. Status counts are
/// taken over the responses as submitted — the scoping filter applies to the
/// denominator only. Compliance weighs `yes` as 1, `partial` as 0.5, `no`
/// as 0.
pub fn calculate_completion(
  level: AssessmentLevel,
  responses: &[ControlResponse],
  scoping_decisions: &[ScopingDecision],
) -> Result<CompletionStats, EngineError> {
  let total_controls = level.total_controls();

  let scoping_map = scoping::scoping_map(scoping_decisions);
  if scoping_map.len() as u32 > total_controls {
    return Err(EngineError::ScopingExceedsCatalog {
      named: scoping_map.len(),
      total: total_controls,
    });
  }

  let out_of_scope = scoping::out_of_scope_count(&scoping_map);
  let applicable_controls = total_controls - out_of_scope;

  // The store upserts one response per control; a duplicate here means the
  // last-seen entry wins.
  let mut by_control: HashMap<&str, &ControlResponse> = HashMap::with_capacity(responses.len());
  for response in responses {
    by_control.insert(response.control_id.as_str(), response);
  }

  let mut answered_controls = 0u32;
  let mut compliant_controls = 0u32;
  let mut partial_controls = 0u32;
  let mut non_compliant_controls = 0u32;
  for response in by_control.values() {
    match response.status {
      ResponseStatus::Yes => {
        answered_controls += 1;
        compliant_controls += 1;
      }
      ResponseStatus::Partial => {
        answered_controls += 1;
        partial_controls += 1;
      }
      ResponseStatus::No => {
        answered_controls += 1;
        non_compliant_controls += 1;
      }
      ResponseStatus::NotApplicable => {}
    }
  }

  let completion_percentage =
    ratio_percent(answered_controls as f64, applicable_controls as f64);
  let compliance_score = ratio_percent(
    compliant_controls as f64 + 0.5 * partial_controls as f64,
    applicable_controls as f64,
  );

  Ok(CompletionStats {
    total_controls,
    applicable_controls,
    answered_controls,
    compliant_controls,
    partial_controls,
    non_compliant_controls,
    completion_percentage,
    compliance_score,
  })
}
