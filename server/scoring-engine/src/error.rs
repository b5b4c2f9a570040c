//! Structured error types for the scoring engine.

use thiserror::Error;

use crate::types::AssessmentLevel;

#[derive(Debug, Error)]
pub enum EngineError {
  /// SPRS scoring is defined for the 110-practice Level 2 only.
  #[error("sprs scoring requires a level2 assessment, got {}", .level.as_str())]
  UnsupportedLevel { level: AssessmentLevel },

  /// The scoping set names more distinct controls than the level has.
  /// Surfaced instead of silently wrapping the applicable-control count.
  #[error("scoping names {named} distinct controls but the level has {total}")]
  ScopingExceedsCatalog { named: usize, total: u32 },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}
