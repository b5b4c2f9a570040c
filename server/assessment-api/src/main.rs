//! Binary entrypoint for the assessment API.

use axum::{
  routing::{get, patch},
  Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use assessment_api::{handlers, AppState, MemStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "5005".into())
    .parse()
    .expect("PORT must be a valid u16");

  let state = Arc::new(AppState {
    store: MemStore::seeded(),
  });

  let app = Router::new()
    .route("/health", get(handlers::health))
    .route(
      "/api/assessments",
      get(handlers::list_assessments).post(handlers::create_assessment),
    )
    .route(
      "/api/assessments/:id",
      get(handlers::get_assessment)
        .patch(handlers::patch_assessment)
        .delete(handlers::delete_assessment),
    )
    .route(
      "/api/assessments/:id/completion",
      patch(handlers::patch_completion),
    )
    .route(
      "/api/assessments/:id/responses",
      get(handlers::list_responses).post(handlers::save_response),
    )
    .route(
      "/api/assessments/:id/responses/:control_id",
      get(handlers::get_response),
    )
    .route(
      "/api/assessments/:id/scoping",
      get(handlers::list_scoping).post(handlers::save_scoping),
    )
    .route(
      "/api/assessments/:id/activities",
      get(handlers::list_activities).post(handlers::add_activity),
    )
    .route(
      "/api/assessments/:id/calculate-completion",
      get(handlers::calculate_completion_stats),
    )
    .route("/api/assessments/:id/sprs-score", get(handlers::sprs_score))
    .route("/api/assessments/:id/report.csv", get(handlers::csv_report))
    .layer(CorsLayer::permissive())
    .with_state(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  println!("assessment-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
