//! Storage layer for Ledgerly.
//!
//! This crate provides:
//! - Repository implementations of the core `AccountStore` contract

pub mod repositories;

pub use repositories::InMemoryAccountStore;
