//! Shared scoping resolver: control id -> applicability.
//!
//! Both calculators resolve scope through this module so the
//! default-in-scope rule can never diverge between them.

use std::collections::HashMap;

use crate::types::ScopingDecision;

/// Build a control-id -> decision map for fast lookup.
///
/// The store upserts one decision per (assessment, control) pair, so
/// duplicates should not exist; if they do, the last-seen entry wins.
pub fn scoping_map(decisions: &[ScopingDecision]) -> HashMap<&str, &ScopingDecision> {
  let mut map = HashMap::with_capacity(decisions.len());
  for decision in decisions {
    map.insert(decision.control_id.as_str(), decision);
  }
  map
}

/// A control with no decision on record is in scope; otherwise the decision's
/// `applicable` flag wins. Total over any input.
pub fn is_in_scope(control_id: &str, map: &HashMap<&str, &ScopingDecision>) -> bool {
  map.get(control_id).map_or(true, |decision| decision.applicable)
}

/// Number of distinct controls explicitly marked out of scope.
pub fn out_of_scope_count(map: &HashMap<&str, &ScopingDecision>) -> u32 {
  map.values().filter(|decision| !decision.applicable).count() as u32
}
