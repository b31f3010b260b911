use lambda_http::{Body, Response};
use thiserror::Error;

use crate::response;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Converts the error into the fixed 500 response.
    ///
    /// The detail is logged here and nowhere else; the client only ever sees
    /// `{"message":"Internal Server Error"}`.
    pub fn into_response(self) -> Response<Body> {
        match &self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
            }
            AppError::Serialization(json_err) => {
                tracing::error!(error = ?json_err, "JSON marshal error.");
            }
        }
        response::internal_error()
    }
}
