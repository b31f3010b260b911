use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: DatabaseSettings,
}

/// Where and how to reach PostgreSQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    /// The database (not the server) to connect to.
    pub name: String,
    pub credentials: CredentialSource,
    /// How long bootstrap waits for the first connection before giving up.
    pub acquire_timeout: Duration,
}

/// The two ways the process can obtain database credentials.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Fetch `{"username", "password"}` from AWS Secrets Manager by ARN or name.
    SecretsManager { secret_id: String },
    /// Use a username and password supplied directly in the environment.
    Static { username: String, password: String },
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::SecretsManager { secret_id } => f
                .debug_struct("SecretsManager")
                .field("secret_id", secret_id)
                .finish(),
            CredentialSource::Static { username, .. } => f
                .debug_struct("Static")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// The flat `DB_*` variables exactly as they arrive from the environment.
#[derive(Deserialize)]
pub(crate) struct DatabaseEnv {
    #[serde(default)]
    host: String,
    #[serde(default)]
    name: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default)]
    secret_arn: Option<String>,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default = "default_acquire_timeout_secs")]
    acquire_timeout_secs: u64,
}

fn default_port() -> u16 {
    5432
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl DatabaseEnv {
    /// Checks required fields and picks the credential source.
    ///
    /// A secret ARN wins over static credentials when both are present.
    pub(crate) fn validate(self) -> Result<DatabaseSettings, ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::ValidationError("DB_HOST must be set.".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError("DB_NAME must be set.".to_string()));
        }

        let credentials = match (
            non_empty(self.secret_arn),
            non_empty(self.user),
            self.password,
        ) {
            (Some(secret_id), _, _) => CredentialSource::SecretsManager { secret_id },
            (None, Some(username), Some(password)) => {
                CredentialSource::Static { username, password }
            }
            _ => {
                return Err(ConfigError::ValidationError(
                    "Either DB_SECRET_ARN or both DB_USER and DB_PASSWORD must be set.".to_string(),
                ));
            }
        };

        Ok(DatabaseSettings {
            host: self.host,
            port: self.port,
            name: self.name,
            credentials,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        })
    }
}
