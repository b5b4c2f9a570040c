//! CMMC Self-Assessment Scoring Engine — deterministic, rule-based.
//!
//! Turns per-control responses and scoping decisions into completion
//! statistics and the DoD SPRS weighted score (-203..110), with the fixed
//! classification bands reports and dashboards depend on.
//!
//! No AI, no DB, no network; pure arithmetic over in-memory snapshots.

pub mod catalog;
pub mod classify;
pub mod completion;
pub mod error;
pub mod percent;
pub mod report;
pub mod scoping;
pub mod sprs;
pub mod types;
pub mod weights;

pub use completion::calculate_completion;
pub use error::EngineError;
pub use sprs::calculate_sprs;
pub use types::{CompletionStats, ScoreOutcome, ScoreRequest, SprsReport};

use types::{AssessmentLevel, ScoreOp};

/// Run one score request and return the outcome (no I/O).
///
/// Completion runs for any level; SPRS is rejected for anything but Level 2
/// before any calculation happens.
pub fn run(request: &ScoreRequest) -> Result<ScoreOutcome, EngineError> {
  match request.op {
    ScoreOp::Completion => {
      let stats = calculate_completion(
        request.level,
        &request.responses,
        &request.scoping_decisions,
      )?;
      Ok(ScoreOutcome::Completion(stats))
    }
    ScoreOp::Sprs => {
      if request.level != AssessmentLevel::Level2 {
        return Err(EngineError::UnsupportedLevel {
          level: request.level,
        });
      }
      let report = calculate_sprs(&request.responses, &request.scoping_decisions)?;
      Ok(ScoreOutcome::Sprs(report))
    }
  }
}
