//! Account routes: store reset and balance lookup.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use ledgerly_core::ledger::AccountStore;
use ledgerly_shared::{AccountId, AppError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{AppState, error::ApiError};

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reset", post(reset))
        .route("/balance", get(get_balance))
}

/// Query parameters for a balance lookup.
#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    /// Account to look up.
    pub account_id: AccountId,
}

/// Balance rendered as a bare JSON number.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BalanceResponse(#[serde(with = "rust_decimal::serde::arbitrary_precision")] pub Decimal);

/// POST `/reset` - Remove every account.
async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    let mut ledger = state.ledger.lock().await;
    let cleared = ledger.store().len();
    ledger.reset();
    info!(cleared, "Ledger reset");

    (StatusCode::OK, "OK")
}

/// GET `/balance?account_id=` - Current balance of an account.
async fn get_balance(
    State(state): State<AppState>,
    query: Result<Query<BalanceQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let balance = state.ledger.lock().await.balance(&query.account_id);
    debug!(account_id = %query.account_id, found = balance.is_some(), "Balance lookup");

    let balance = balance
        .ok_or_else(|| AppError::NotFound(format!("Account not found: {}", query.account_id)))?;

    Ok((StatusCode::OK, Json(BalanceResponse(balance))))
}
