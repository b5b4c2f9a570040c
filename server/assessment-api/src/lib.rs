//! CMMC Assessment API
//!
//! HTTP service over the scoring engine: CRUD for assessments, control
//! responses, scoping decisions, and activity logs on an in-memory store,
//! plus the completion, SPRS, and CSV report endpoints.
//! Bind to 127.0.0.1 by default (internal only).

pub mod handlers;
pub mod state;
pub mod store;
pub mod types;

pub use state::AppState;
pub use store::MemStore;
