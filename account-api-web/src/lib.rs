//! Actix-web frontend for the Account API.
//!
//! Exposes `/accounts` CRUD over any `AccountStore`. The binary wires
//! configuration, logging and store selection around `server::run`.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod routes;
pub mod server;
pub mod store;

pub use endpoint::AccountEndpoint;
pub use error::{ApiError, ApiResult};
