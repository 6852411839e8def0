//! Core business logic for Ledgerly.
//!
//! This crate contains pure ledger logic with ZERO web or storage dependencies.
//! Storage is reached only through the [`ledger::AccountStore`] contract.
//!
//! # Modules
//!
//! - `ledger` - Accounts, events, and the rules for applying them

pub mod ledger;
