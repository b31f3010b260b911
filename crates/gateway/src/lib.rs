//! Request routing for the API Gateway integration.
//!
//! A [`Router`] owns the shared [`database::Repository`] and a table of
//! `(method, path)` routes. Each route's handler runs one query and hands the
//! outcome to the encoder in [`response`], so every request ends in exactly one
//! `Response<Body>`: 200, 404 or 500.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;

pub use error::AppError;
pub use router::{Handler, HandlerFuture, RouteTable, Router, route_key};
