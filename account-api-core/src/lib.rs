//! Account API Core Library
//!
//! Provides the platform-independent pieces of the account service:
//! - Account types (`Account`, `AccountPayload`, `AccountId`)
//! - The `AccountStore` persistence abstraction
//! - `InMemoryAccountStore`, the default store
//!
//! HTTP concerns live in `account-api-web`; persistent adapters live in
//! `account-api-storage`.

pub mod error;
pub mod traits;
pub mod types;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use traits::{AccountStore, InMemoryAccountStore};
pub use types::{Account, AccountId, AccountPayload};
