//! Shared application state.

use crate::store::MemStore;

pub struct AppState {
  pub store: MemStore,
}
