use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use serde::Deserialize;
use std::fmt;

use crate::error::DbError;

/// A username/password pair for PostgreSQL.
///
/// This is also the JSON document stored in Secrets Manager, so it
/// deserializes straight from the secret string.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct DbCredentials {
    pub username: String,
    pub password: String,
}

impl DbCredentials {
    /// Decodes a `{"username": ..., "password": ...}` secret document.
    pub fn parse(raw: &str) -> Result<Self, DbError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Reads database credentials out of AWS Secrets Manager.
#[derive(Debug, Clone)]
pub struct SecretsManagerSource {
    client: Client,
}

impl SecretsManagerSource {
    /// Builds a client from the ambient AWS configuration (region, role credentials).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches and decodes the secret identified by `secret_id` (ARN or name).
    pub async fn fetch(&self, secret_id: &str) -> Result<DbCredentials, DbError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    secret_id,
                    error = %DisplayErrorContext(&e),
                    "Error getting secret."
                );
                DbError::SecretRetrievalError {
                    secret_id: secret_id.to_string(),
                    source: Box::new(e),
                }
            })?;

        let raw = output
            .secret_string()
            .ok_or_else(|| DbError::SecretMissingError(secret_id.to_string()))?;

        DbCredentials::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_username_and_password() {
        let raw = r#"{"username":"reader","password":"s3cret","engine":"postgres"}"#;

        let credentials = DbCredentials::parse(raw).unwrap();

        assert_eq!(credentials.username, "reader");
        assert_eq!(credentials.password, "s3cret");
    }

    #[rstest]
    #[case::missing_password(r#"{"username":"reader"}"#)]
    #[case::missing_username(r#"{"password":"s3cret"}"#)]
    #[case::numeric_password(r#"{"username":"reader","password":1234}"#)]
    #[case::not_json("reader:s3cret")]
    #[case::empty("")]
    fn malformed_secret_is_a_format_error(#[case] raw: &str) {
        let err = DbCredentials::parse(raw).unwrap_err();
        assert!(matches!(err, DbError::SecretFormatError(_)));
    }

    #[test]
    fn debug_output_hides_the_password() {
        let credentials = DbCredentials {
            username: "reader".to_string(),
            password: "s3cret".to_string(),
        };

        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("reader"));
        assert!(!rendered.contains("s3cret"));
    }
}
