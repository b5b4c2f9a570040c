//! HTTP handlers for the assessment API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use scoring_engine::types::{
  ActivityLog, Assessment, AssessmentLevel, CompletionStats, ControlResponse, ScopingDecision,
  SprsReport,
};
use scoring_engine::{calculate_completion, calculate_sprs, report};

use crate::state::AppState;
use crate::types::{
  ActivityPayload, ActivityQuery, AssessmentPatch, CompletionPatch, ErrorBody, NewAssessment,
  ResponsePayload, ScopingPayload,
};

type ApiError = (StatusCode, Json<ErrorBody>);

fn not_found(what: &str) -> ApiError {
  (
    StatusCode::NOT_FOUND,
    Json(ErrorBody::new(format!("{} not found", what))),
  )
}

fn bad_request(message: &str) -> ApiError {
  (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message)))
}

fn engine_failure(err: scoring_engine::EngineError) -> ApiError {
  eprintln!("assessment-api: engine error: {}", err);
  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Json(ErrorBody::new(err.to_string())),
  )
}

pub async fn health() -> &'static str {
  "ok"
}

// ---------------------------------------------------------------------------
// Assessments
// ---------------------------------------------------------------------------

pub async fn list_assessments(State(state): State<Arc<AppState>>) -> Json<Vec<Assessment>> {
  Json(state.store.assessments())
}

pub async fn get_assessment(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
) -> Result<Json<Assessment>, ApiError> {
  state
    .store
    .assessment(id)
    .map(Json)
    .ok_or_else(|| not_found("assessment"))
}

pub async fn create_assessment(
  State(state): State<Arc<AppState>>,
  Json(payload): Json<NewAssessment>,
) -> (StatusCode, Json<Assessment>) {
  let assessment = state.store.create_assessment(payload);
  (StatusCode::CREATED, Json(assessment))
}

pub async fn patch_assessment(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
  Json(patch): Json<AssessmentPatch>,
) -> Result<Json<Assessment>, ApiError> {
  state
    .store
    .update_assessment(id, patch)
    .map(Json)
    .ok_or_else(|| not_found("assessment"))
}

pub async fn patch_completion(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
  Json(patch): Json<CompletionPatch>,
) -> Result<Json<Assessment>, ApiError> {
  if !(0..=100).contains(&patch.percentage) {
    return Err(bad_request("percentage must be between 0 and 100"));
  }
  state
    .store
    .update_completion_percentage(id, patch.percentage)
    .map(Json)
    .ok_or_else(|| not_found("assessment"))
}

pub async fn delete_assessment(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  if state.store.delete_assessment(id) {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(not_found("assessment"))
  }
}

// ---------------------------------------------------------------------------
// Control responses
// ---------------------------------------------------------------------------

pub async fn list_responses(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
) -> Json<Vec<ControlResponse>> {
  Json(state.store.responses(id))
}

pub async fn get_response(
  State(state): State<Arc<AppState>>,
  Path((id, control_id)): Path<(i64, String)>,
) -> Result<Json<ControlResponse>, ApiError> {
  state
    .store
    .response(id, &control_id)
    .map(Json)
    .ok_or_else(|| not_found("control response"))
}

pub async fn save_response(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
  Json(payload): Json<ResponsePayload>,
) -> Result<(StatusCode, Json<ControlResponse>), ApiError> {
  if state.store.assessment(id).is_none() {
    return Err(not_found("assessment"));
  }

  let response = state.store.save_response(id, payload);
  state.store.add_activity_log(
    id,
    ActivityPayload {
      action: "updated_control".into(),
      details: serde_json::json!({
        "controlId": response.control_id,
        "status": response.status.as_str(),
      }),
    },
  );
  Ok((StatusCode::CREATED, Json(response)))
}

// ---------------------------------------------------------------------------
// Scoping decisions
// ---------------------------------------------------------------------------

pub async fn list_scoping(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
) -> Json<Vec<ScopingDecision>> {
  Json(state.store.scoping_decisions(id))
}

pub async fn save_scoping(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
  Json(payload): Json<ScopingPayload>,
) -> Result<(StatusCode, Json<ScopingDecision>), ApiError> {
  if state.store.assessment(id).is_none() {
    return Err(not_found("assessment"));
  }

  let decision = state.store.save_scoping_decision(id, payload);
  state.store.add_activity_log(
    id,
    ActivityPayload {
      action: "updated_scoping".into(),
      details: serde_json::json!({
        "controlId": decision.control_id,
        "applicable": decision.applicable,
      }),
    },
  );
  Ok((StatusCode::CREATED, Json(decision)))
}

// ---------------------------------------------------------------------------
// Activity logs
// ---------------------------------------------------------------------------

pub async fn list_activities(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
  Query(query): Query<ActivityQuery>,
) -> Json<Vec<ActivityLog>> {
  Json(state.store.activity_logs(id, query.limit))
}

pub async fn add_activity(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
  Json(payload): Json<ActivityPayload>,
) -> Result<(StatusCode, Json<ActivityLog>), ApiError> {
  if state.store.assessment(id).is_none() {
    return Err(not_found("assessment"));
  }
  let log = state.store.add_activity_log(id, payload);
  Ok((StatusCode::CREATED, Json(log)))
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Compute completion statistics and write the cached percentage back onto
/// the assessment (the one side effect of the scoring path).
pub async fn calculate_completion_stats(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
) -> Result<Json<CompletionStats>, ApiError> {
  let assessment = state.store.assessment(id).ok_or_else(|| not_found("assessment"))?;
  let responses = state.store.responses(id);
  let scoping = state.store.scoping_decisions(id);

  let stats = calculate_completion(assessment.level, &responses, &scoping)
    .map_err(engine_failure)?;

  state
    .store
    .update_completion_percentage(id, stats.completion_percentage);

  Ok(Json(stats))
}

pub async fn sprs_score(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
) -> Result<Json<SprsReport>, ApiError> {
  let assessment = state.store.assessment(id).ok_or_else(|| not_found("assessment"))?;
  if assessment.level != AssessmentLevel::Level2 {
    return Err(bad_request(
      "SPRS scoring is only available for CMMC Level 2 assessments",
    ));
  }

  let responses = state.store.responses(id);
  let scoping = state.store.scoping_decisions(id);
  let report = calculate_sprs(&responses, &scoping).map_err(engine_failure)?;
  Ok(Json(report))
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

pub async fn csv_report(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
  let assessment = state.store.assessment(id).ok_or_else(|| not_found("assessment"))?;
  let responses = state.store.responses(id);
  let scoping = state.store.scoping_decisions(id);

  let sprs = if assessment.level == AssessmentLevel::Level2 {
    Some(calculate_sprs(&responses, &scoping).map_err(engine_failure)?)
  } else {
    None
  };

  let body = report::generate_csv_report(&assessment, &responses, &scoping, sprs.as_ref());
  Ok((
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
      (
        header::CONTENT_DISPOSITION,
        "attachment; filename=\"assessment-report.csv\"",
      ),
    ],
    body,
  ))
}
