//! # Labour API Database Crate
//!
//! This crate is the only place that talks to PostgreSQL and to the secret
//! store that guards it.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here, behind the [`Repository`] trait. The
//!   router only ever sees typed records or a [`DbError`].
//! - **One handle per process:** [`acquire_connection`] builds the pool once at
//!   start-up and fails loudly; nothing in this crate exits the process.
//! - **Fixed queries:** Every query is a constant. Nothing from a request is
//!   ever interpolated into SQL.
//!
//! ## Public API
//!
//! - `acquire_connection`: resolves credentials, connects and pings.
//! - `Repository` / `DbRepository`: the data access contract and its PostgreSQL implementation.
//! - `DbCredentials` / `SecretsManagerSource`: secret retrieval.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod secrets;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{acquire_connection, connect_options, resolve_credentials};
pub use error::DbError;
pub use repository::{DbRepository, Repository};
pub use secrets::{DbCredentials, SecretsManagerSource};
