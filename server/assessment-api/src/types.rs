//! Request/response types for the assessment API.

use serde::{Deserialize, Serialize};

use scoring_engine::types::{AssessmentLevel, ResponseStatus};

/// Body for creating an assessment. Ids and timestamps are store-assigned.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
  pub name: String,
  pub level: AssessmentLevel,
  pub organization_name: String,
}

/// Partial update for an assessment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPatch {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub level: Option<AssessmentLevel>,
  #[serde(default)]
  pub organization_name: Option<String>,
}

/// Body for the cached completion percentage patch.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CompletionPatch {
  pub percentage: i32,
}

/// Body for saving (upserting) a control response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
  pub control_id: String,
  pub status: ResponseStatus,
  #[serde(default)]
  pub notes: Option<String>,
  #[serde(default)]
  pub evidence: Option<String>,
}

/// Body for saving (upserting) a scoping decision.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopingPayload {
  pub control_id: String,
  pub applicable: bool,
  #[serde(default)]
  pub reason: Option<String>,
}

/// Body for appending an activity log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityPayload {
  pub action: String,
  #[serde(default)]
  pub details: serde_json::Value,
}

/// Query parameters for the activity log listing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ActivityQuery {
  #[serde(default)]
  pub limit: Option<usize>,
}

/// Error body for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub message: String,
}

impl ErrorBody {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}
