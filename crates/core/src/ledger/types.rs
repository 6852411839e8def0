//! Domain types for ledger events.
//!
//! Wire-level event requests are turned into [`LedgerEvent`] values once, at
//! the boundary. Everything past that point matches on the variants.

use ledgerly_shared::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// A balance record keyed by an opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account identifier.
    pub id: AccountId,
    /// Current balance.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl Account {
    /// Creates an account record.
    #[must_use]
    pub const fn new(id: AccountId, balance: Decimal) -> Self {
        Self { id, balance }
    }
}

/// Kind of a ledger event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Credit a destination account, creating it if needed.
    Deposit,
    /// Debit an existing origin account.
    Withdraw,
    /// Move funds from an origin to a destination account.
    Transfer,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Withdraw => write!(f, "withdraw"),
            Self::Transfer => write!(f, "transfer"),
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            "transfer" => Ok(Self::Transfer),
            _ => Err(LedgerError::UnknownEventType(s.to_string())),
        }
    }
}

/// A transient instruction applied to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    /// Deposit into `destination`.
    Deposit {
        /// Account receiving the funds.
        destination: AccountId,
        /// Amount to credit.
        amount: Decimal,
    },
    /// Withdraw from `origin`.
    Withdraw {
        /// Account giving up the funds.
        origin: AccountId,
        /// Amount to debit.
        amount: Decimal,
    },
    /// Transfer from `origin` to `destination`.
    Transfer {
        /// Account giving up the funds.
        origin: AccountId,
        /// Account receiving the funds.
        destination: AccountId,
        /// Amount to move.
        amount: Decimal,
    },
}

impl LedgerEvent {
    /// Builds an event from its loosely-typed parts.
    ///
    /// Fields the kind does not use are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MissingField`] when the kind needs an account
    /// that was not supplied.
    pub fn new(
        kind: EventKind,
        origin: Option<AccountId>,
        destination: Option<AccountId>,
        amount: Decimal,
    ) -> Result<Self, LedgerError> {
        let require = |id: Option<AccountId>, field: &'static str| {
            id.ok_or(LedgerError::MissingField { kind, field })
        };

        Ok(match kind {
            EventKind::Deposit => Self::Deposit {
                destination: require(destination, "destination")?,
                amount,
            },
            EventKind::Withdraw => Self::Withdraw {
                origin: require(origin, "origin")?,
                amount,
            },
            EventKind::Transfer => Self::Transfer {
                origin: require(origin, "origin")?,
                destination: require(destination, "destination")?,
                amount,
            },
        })
    }

    /// Returns the kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Deposit { .. } => EventKind::Deposit,
            Self::Withdraw { .. } => EventKind::Withdraw,
            Self::Transfer { .. } => EventKind::Transfer,
        }
    }

    /// Returns the amount carried by this event.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        match self {
            Self::Deposit { amount, .. }
            | Self::Withdraw { amount, .. }
            | Self::Transfer { amount, .. } => *amount,
        }
    }
}

/// Result of a successfully applied event.
///
/// Serializes to `{"destination": ..}`, `{"origin": ..}` or
/// `{"origin": .., "destination": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventOutcome {
    /// A deposit was applied.
    Deposited {
        /// The credited account after the deposit.
        destination: Account,
    },
    /// A withdrawal was applied.
    Withdrawn {
        /// The debited account after the withdrawal.
        origin: Account,
    },
    /// A transfer was applied.
    Transferred {
        /// The debited account after the transfer.
        origin: Account,
        /// The credited account after the transfer.
        destination: Account,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[rstest]
    #[case("deposit", EventKind::Deposit)]
    #[case("DEPOSIT", EventKind::Deposit)]
    #[case("Withdraw", EventKind::Withdraw)]
    #[case("tRaNsFeR", EventKind::Transfer)]
    fn test_event_kind_case_insensitive(#[case] raw: &str, #[case] expected: EventKind) {
        assert_eq!(raw.parse::<EventKind>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("refund")]
    #[case("deposits")]
    #[case(" deposit")]
    fn test_event_kind_unknown(#[case] raw: &str) {
        let err = raw.parse::<EventKind>().unwrap_err();
        assert!(matches!(err, LedgerError::UnknownEventType(ref s) if s == raw));
    }

    #[test]
    fn test_event_kind_display_round_trip() {
        for kind in [EventKind::Deposit, EventKind::Withdraw, EventKind::Transfer] {
            assert_eq!(kind.to_string().parse::<EventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_event_new_deposit_ignores_origin() {
        let event = LedgerEvent::new(
            EventKind::Deposit,
            Some("1".into()),
            Some("100".into()),
            dec!(10),
        )
        .unwrap();

        assert_eq!(
            event,
            LedgerEvent::Deposit {
                destination: "100".into(),
                amount: dec!(10)
            }
        );
        assert_eq!(event.kind(), EventKind::Deposit);
        assert_eq!(event.amount(), dec!(10));
    }

    #[rstest]
    #[case(EventKind::Deposit, Some("1"), None, "destination")]
    #[case(EventKind::Withdraw, None, Some("1"), "origin")]
    #[case(EventKind::Transfer, None, Some("1"), "origin")]
    #[case(EventKind::Transfer, Some("1"), None, "destination")]
    fn test_event_new_missing_field(
        #[case] kind: EventKind,
        #[case] origin: Option<&str>,
        #[case] destination: Option<&str>,
        #[case] missing: &str,
    ) {
        let err = LedgerEvent::new(
            kind,
            origin.map(AccountId::from),
            destination.map(AccountId::from),
            dec!(1),
        )
        .unwrap_err();

        match err {
            LedgerError::MissingField { kind: k, field } => {
                assert_eq!(k, kind);
                assert_eq!(field, missing);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_outcome_json_shapes() {
        let deposited = EventOutcome::Deposited {
            destination: Account::new("100".into(), dec!(10)),
        };
        assert_eq!(
            serde_json::to_value(&deposited).unwrap(),
            json!({"destination": {"id": "100", "balance": 10}})
        );

        let withdrawn = EventOutcome::Withdrawn {
            origin: Account::new("100".into(), dec!(15)),
        };
        assert_eq!(
            serde_json::to_value(&withdrawn).unwrap(),
            json!({"origin": {"id": "100", "balance": 15}})
        );

        let transferred = EventOutcome::Transferred {
            origin: Account::new("100".into(), dec!(0)),
            destination: Account::new("300".into(), dec!(15)),
        };
        assert_eq!(
            serde_json::to_value(&transferred).unwrap(),
            json!({
                "origin": {"id": "100", "balance": 0},
                "destination": {"id": "300", "balance": 15}
            })
        );
    }

    #[test]
    fn test_balance_serializes_exactly() {
        let account = Account::new("7".into(), dec!(0.1) + dec!(0.2));
        assert_eq!(
            serde_json::to_string(&account).unwrap(),
            r#"{"id":"7","balance":0.3}"#
        );
    }
}
