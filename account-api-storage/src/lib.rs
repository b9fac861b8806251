//! Persistent storage adapters for the Account API.
//!
//! Each adapter implements `account_api_core::AccountStore` and is gated
//! behind its own cargo feature so frontends only pull in the drivers they use.

#[cfg(feature = "sqlite-store")]
mod sqlite;

#[cfg(feature = "sqlite-store")]
pub use sqlite::SqliteStore;
