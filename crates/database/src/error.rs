use std::time::Duration;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to retrieve database secret `{secret_id}`: {source}")]
    SecretRetrievalError {
        secret_id: String,
        #[source]
        source: BoxError,
    },

    #[error("Database secret `{0}` has no string value.")]
    SecretMissingError(String),

    #[error("Database secret is not a valid username/password document: {0}")]
    SecretFormatError(#[from] serde_json::Error),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Timed out after {0:?} connecting to the database.")]
    ConnectTimeout(Duration),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("The query returned no rows.")]
    EmptyResult,
}
