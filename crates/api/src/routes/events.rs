//! Event route: deposits, withdrawals, and transfers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use ledgerly_core::ledger::{EventKind, LedgerError, LedgerEvent};
use ledgerly_shared::AccountId;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{AppState, error::ApiError};

/// Creates the event routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/event", post(post_event))
}

/// Request body for an event.
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    /// Event type: deposit, withdraw, or transfer (any case).
    #[serde(rename = "type")]
    pub kind: String,
    /// Account debited by withdraw and transfer.
    pub origin: Option<AccountId>,
    /// Account credited by deposit and transfer.
    pub destination: Option<AccountId>,
    /// Amount moved by the event.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl EventRequest {
    /// Validates the request shape and converts it into a typed event.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownEventType`] or
    /// [`LedgerError::MissingField`].
    pub fn into_event(self) -> Result<LedgerEvent, LedgerError> {
        let kind: EventKind = self.kind.parse()?;
        LedgerEvent::new(kind, self.origin, self.destination, self.amount)
    }
}

/// POST `/event` - Apply a deposit, withdrawal, or transfer.
async fn post_event(
    State(state): State<AppState>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let event = request.into_event().inspect_err(|e| {
        warn!(error = %e, "Malformed event");
    })?;

    let kind = event.kind();
    let amount = event.amount();
    let result = state.ledger.lock().await.apply(event);

    match result {
        Ok(outcome) => {
            info!(%kind, %amount, "Event applied");
            Ok((StatusCode::CREATED, Json(outcome)))
        }
        Err(e) => {
            warn!(%kind, %amount, error = %e, "Event rejected");
            Err(e.into())
        }
    }
}
