use crate::error::DbError;
use crate::secrets::{DbCredentials, SecretsManagerSource};
use configuration::{CredentialSource, DatabaseSettings};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgConnection, PgPool};

/// Requests are served one at a time per process, so one connection is all the pool needs.
const MAX_CONNECTIONS: u32 = 1;

/// Establishes the process-wide database handle.
///
/// Resolves credentials from the configured source, opens one connection
/// directly and pings the server, then builds the pool. Any failure is
/// returned to the caller, which is expected to abort start-up: a process
/// without a live handle must not serve traffic.
pub async fn acquire_connection(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let credentials = resolve_credentials(&settings.credentials).await?;
    let options = connect_options(settings, &credentials);

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.name,
        "Connecting to PostgreSQL."
    );

    // Opened outside the pool so a failure carries the driver error
    // (refused, auth, unknown database) instead of a pool timeout.
    let mut conn = tokio::time::timeout(
        settings.acquire_timeout,
        PgConnection::connect_with(&options),
    )
    .await
    .map_err(|_| DbError::ConnectTimeout(settings.acquire_timeout))?
    .map_err(DbError::ConnectionError)?;
    conn.ping().await.map_err(DbError::ConnectionError)?;
    conn.close().await.map_err(DbError::ConnectionError)?;

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy_with(options);

    tracing::info!("Database connection established.");
    Ok(pool)
}

/// Turns the configured credential source into a concrete username/password.
pub async fn resolve_credentials(source: &CredentialSource) -> Result<DbCredentials, DbError> {
    match source {
        CredentialSource::SecretsManager { secret_id } => {
            tracing::info!(
                secret_id = %secret_id,
                "Fetching database credentials from Secrets Manager."
            );
            SecretsManagerSource::from_env().await.fetch(secret_id).await
        }
        CredentialSource::Static { username, password } => {
            tracing::info!("Using database credentials from the environment.");
            Ok(DbCredentials {
                username: username.clone(),
                password: password.clone(),
            })
        }
    }
}

/// Builds connect options field by field, so credentials are never spliced
/// into a connection string.
pub fn connect_options(
    settings: &DatabaseSettings,
    credentials: &DbCredentials,
) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .database(&settings.name)
        .username(&credentials.username)
        .password(&credentials.password)
        .application_name("labour-api")
}
