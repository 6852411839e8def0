//! Repository implementations for data access.
//!
//! Repositories provide a clean interface for storage operations,
//! hiding the physical representation from the rest of the application.

pub mod account;

pub use account::InMemoryAccountStore;
