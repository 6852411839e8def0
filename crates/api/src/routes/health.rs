//! Liveness endpoint.

use axum::{Json, Router, extract::State, routing::get};
use ledgerly_core::ledger::AccountStore;
use serde::Serialize;

use crate::AppState;

/// Liveness report for the ledger process.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `healthy` when the handler runs.
    pub status: &'static str,
    /// Crate version of the running binary.
    pub version: &'static str,
    /// Accounts currently held in memory.
    pub accounts: usize,
}

/// GET `/health` - Liveness plus the size of the in-memory ledger.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let accounts = state.ledger.lock().await.store().len();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        accounts,
    })
}

/// Creates the health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_health(state: AppState) -> (StatusCode, Value) {
        let response = routes()
            .with_state(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_on_empty_ledger() {
        let (status, body) = get_health(AppState::default()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["accounts"], 0);
    }

    #[tokio::test]
    async fn test_health_counts_accounts() {
        let state = AppState::default();
        {
            let mut ledger = state.ledger.lock().await;
            ledger.deposit(&"100".into(), Decimal::ONE).unwrap();
            ledger.deposit(&"300".into(), Decimal::TEN).unwrap();
        }

        let (_, body) = get_health(state).await;

        assert_eq!(body["accounts"], 2);
    }
}
