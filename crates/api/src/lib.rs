//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for resetting, querying, and mutating the ledger
//! - Error-to-response mapping
//! - Shared application state

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use ledgerly_core::ledger::LedgerService;
use ledgerly_db::InMemoryAccountStore;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Ledger shared between handlers.
///
/// One lock guards the whole store, so each event's read-validate-write runs
/// without interleaving.
pub type SharedLedger = Arc<Mutex<LedgerService<InMemoryAccountStore>>>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The ledger engine and its store.
    pub ledger: SharedLedger,
}

impl AppState {
    /// Creates state around a ledger over the given store.
    #[must_use]
    pub fn new(store: InMemoryAccountStore) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(LedgerService::new(store))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(InMemoryAccountStore::new())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
