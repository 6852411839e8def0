//! Typed account identifier.
//!
//! Account identifiers are opaque strings chosen by the caller. Wrapping them
//! keeps them from being confused with event types or other free-form text.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Unique identifier for a ledger account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates an ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_account_id_display() {
        assert_eq!(AccountId::from("100").to_string(), "100");
    }

    #[test]
    fn test_account_id_is_opaque() {
        // Leading zeros and whitespace are part of the identifier
        assert_ne!(AccountId::from("100"), AccountId::from("0100"));
        assert_ne!(AccountId::from("100"), AccountId::from(" 100"));
    }

    #[test]
    fn test_account_id_serde_transparent() {
        let id = AccountId::from("300");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""300""#);

        let parsed: AccountId = serde_json::from_str(r#""300""#).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_account_id_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(AccountId::from("100"), 1);
        assert_eq!(map.get("100"), Some(&1));
    }
}
