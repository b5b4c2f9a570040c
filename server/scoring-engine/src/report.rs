//! CSV report rendering for an assessment snapshot.
//!
//! Produces the per-control table with the summary blocks appended, the
//! layout downstream spreadsheets import. PDF/XLSX rendering is a consumer
//! concern and lives outside this crate.

use crate::scoping;
use crate::types::{Assessment, ControlResponse, ScopingDecision, SprsReport};

/// Stable identifier for a rendered report: a hash of the assessment
/// identity plus the score snapshot, so re-rendering identical data yields
/// the same id.
pub fn report_id(assessment: &Assessment, sprs: Option<&SprsReport>) -> String {
  let mut hasher = blake3::Hasher::new();
  hasher.update(assessment.name.as_bytes());
  hasher.update(b"|");
  hasher.update(assessment.organization_name.as_bytes());
  hasher.update(b"|");
  hasher.update(assessment.level.as_str().as_bytes());
  hasher.update(b"|");
  hasher.update(&assessment.completed_percentage.to_le_bytes());
  if let Some(report) = sprs {
    hasher.update(b"|");
    hasher.update(&report.sprs_score.to_le_bytes());
    hasher.update(report.implementation_factor.as_bytes());
  }
  let hex = hasher.finalize().to_hex();
  format!("rpt-{}", &hex[..16])
}

/// Render the CSV report: one row per response, then the assessment summary,
/// then the SPRS summary when one was computed.
pub fn generate_csv_report(
  assessment: &Assessment,
  responses: &[ControlResponse],
  scoping_decisions: &[ScopingDecision],
  sprs: Option<&SprsReport>,
) -> String {
  let scoping_map = scoping::scoping_map(scoping_decisions);

  let mut lines: Vec<String> = Vec::new();
  lines.push("Control ID,Status,In Scope,Implementation Notes,Last Updated".to_string());

  for response in responses {
    let in_scope = scoping::is_in_scope(&response.control_id, &scoping_map);
    let updated = response
      .updated_at
      .map(|t| t.to_rfc3339())
      .unwrap_or_default();
    lines.push(format!(
      "{},{},{},{},{}",
      response.control_id,
      response.status.as_str(),
      if in_scope { "Yes" } else { "No" },
      quote(response.notes.as_deref().unwrap_or("")),
      updated,
    ));
  }

  lines.push(String::new());
  lines.push(format!("\"Assessment Name\",{}", quote(&assessment.name)));
  lines.push(format!(
    "\"Organization\",{}",
    quote(&assessment.organization_name)
  ));
  lines.push(format!(
    "\"Completion\",\"{}%\"",
    assessment.completed_percentage
  ));

  if let Some(report) = sprs {
    lines.push(String::new());
    lines.push("SPRS Score Summary".to_string());
    lines.push(format!(
      "\"Report ID\",\"{}\"",
      report_id(assessment, Some(report))
    ));
    lines.push(format!("\"SPRS Score\",\"{}\"", report.sprs_score));
    lines.push(format!(
      "\"Implementation Factor\",\"{}\"",
      report.implementation_factor
    ));
    lines.push(format!(
      "\"Implementation Level\",\"{}\"",
      report.implementation_level
    ));
  }

  lines.join("\n")
}

/// CSV-quote a free-text field (embedded quotes doubled).
fn quote(field: &str) -> String {
  format!("\"{}\"", field.replace('"', "\"\""))
}
