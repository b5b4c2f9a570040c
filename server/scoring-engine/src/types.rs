//! Core types for the scoring engine (JSON contracts + domain entities).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Assessment levels
// ---------------------------------------------------------------------------

/// CMMC assessment level. Level 1 covers 17 practices, Level 2 covers 110.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentLevel {
  #[serde(rename = "level1")]
  Level1,
  #[serde(rename = "level2")]
  Level2,
}

impl AssessmentLevel {
  /// Total number of practices assessed at this level.
  pub fn total_controls(self) -> u32 {
    match self {
      Self::Level1 => 17,
      Self::Level2 => 110,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Level1 => "level1",
      Self::Level2 => "level2",
    }
  }
}

// ---------------------------------------------------------------------------
// Response status
// ---------------------------------------------------------------------------

/// Per-control answer. Applicability is normally carried by a
/// [`ScopingDecision`]; `NotApplicable` survives as a status value for
/// compatibility with older submissions and is never counted as answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
  Yes,
  Partial,
  No,
  NotApplicable,
}

impl ResponseStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Yes => "yes",
      Self::Partial => "partial",
      Self::No => "no",
      Self::NotApplicable => "not_applicable",
    }
  }
}

// ---------------------------------------------------------------------------
// Domain entities
// ---------------------------------------------------------------------------

/// Assessment metadata. `completed_percentage` is a display cache the API
/// layer overwrites after each completion calculation; the calculators never
/// read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
  pub id: i64,
  pub name: String,
  pub level: AssessmentLevel,
  pub organization_name: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub completed_percentage: i32,
}

/// One answer for one control. At most one per (assessment_id, control_id);
/// the store upserts in place. Absent/null notes and evidence are normalized
/// to `None` at the repository boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlResponse {
  #[serde(default)]
  pub id: i64,
  #[serde(default)]
  pub assessment_id: i64,
  pub control_id: String,
  pub status: ResponseStatus,
  #[serde(default)]
  pub evidence: Option<String>,
  #[serde(default)]
  pub notes: Option<String>,
  #[serde(default)]
  pub updated_at: Option<DateTime<Utc>>,
}

/// Applicability decision for one control. A control with no decision on
/// record is in scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopingDecision {
  #[serde(default)]
  pub id: i64,
  #[serde(default)]
  pub assessment_id: i64,
  pub control_id: String,
  pub applicable: bool,
  #[serde(default)]
  pub reason: Option<String>,
}

/// Append-only activity record (control updated, scoping updated, evidence
/// uploaded, domain completed). Informational; never read by the calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
  pub id: i64,
  pub assessment_id: i64,
  pub action: String,
  pub details: serde_json::Value,
  pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Calculator outputs (JSON contract — what reports and dashboards consume)
// ---------------------------------------------------------------------------

/// Completion/compliance statistics for one assessment snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
  pub total_controls: u32,
  pub applicable_controls: u32,
  pub answered_controls: u32,
  pub compliant_controls: u32,
  pub partial_controls: u32,
  pub non_compliant_controls: u32,
  pub completion_percentage: i32,
  pub compliance_score: i32,
}

/// DoD SPRS weighted score report for a Level 2 snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprsReport {
  pub sprs_score: i32,
  pub total_controls: u32,
  pub in_scope_controls: u32,
  pub compliant_controls: u32,
  pub partial_controls: u32,
  pub non_compliant_controls: u32,
  pub not_assessed_controls: u32,
  pub total_non_compliant: u32,
  pub implementation_percentage: i32,
  pub implementation_level: String,
  pub implementation_factor: String,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Which calculator a [`ScoreRequest`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOp {
  Completion,
  Sprs,
}

/// One inbound request line from stdin. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
  pub op: ScoreOp,
  pub level: AssessmentLevel,
  #[serde(default)]
  pub responses: Vec<ControlResponse>,
  #[serde(default)]
  pub scoping_decisions: Vec<ScopingDecision>,
}

/// One outbound result line.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ScoreOutcome {
  Completion(CompletionStats),
  Sprs(SprsReport),
}

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn level_constants() {
    assert_eq!(AssessmentLevel::Level1.total_controls(), 17);
    assert_eq!(AssessmentLevel::Level2.total_controls(), 110);
  }

  #[test]
  fn status_round_trips_through_json() {
    for (status, wire) in [
      (ResponseStatus::Yes, "\"yes\""),
      (ResponseStatus::Partial, "\"partial\""),
      (ResponseStatus::No, "\"no\""),
      (ResponseStatus::NotApplicable, "\"not_applicable\""),
    ] {
      assert_eq!(serde_json::to_string(&status).unwrap(), wire);
      let back: ResponseStatus = serde_json::from_str(wire).unwrap();
      assert_eq!(back, status);
    }
  }

  #[test]
  fn response_accepts_minimal_json() {
    let response: ControlResponse =
      serde_json::from_str(r#"{"controlId": "3.1.1", "status": "yes"}"#).unwrap();
    assert_eq!(response.control_id, "3.1.1");
    assert_eq!(response.status, ResponseStatus::Yes);
    assert_eq!(response.id, 0);
    assert!(response.notes.is_none());
    assert!(response.updated_at.is_none());
  }

  #[test]
  fn stats_serialize_with_contract_field_names() {
    let stats = CompletionStats {
      total_controls: 17,
      applicable_controls: 16,
      answered_controls: 16,
      compliant_controls: 16,
      partial_controls: 0,
      non_compliant_controls: 0,
      completion_percentage: 100,
      compliance_score: 100,
    };
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["totalControls"], 17);
    assert_eq!(json["applicableControls"], 16);
    assert_eq!(json["complianceScore"], 100);
  }
}
