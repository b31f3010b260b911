use crate::DbError;
use async_trait::async_trait;
use core_types::LabourParticipation;
use sqlx::postgres::PgPool;

const HELLO_QUERY: &str = "SELECT 'Hello from PostgreSQL!'";

const LABOUR_PARTICIPATION_QUERY: &str = r#"
    SELECT
        age, age_string, area, area_string, labour_status, labour_status_string,
        total, person_one, person_two, person_three, person_four, person_five
    FROM
        labour_participation
"#;

/// The data access contract the router depends on.
///
/// Every method runs one fixed, read-only query. Any future query that takes
/// input must bind it as a parameter.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Reads the single greeting row produced by the database.
    ///
    /// Zero rows is an error ([`DbError::EmptyResult`]), not an empty greeting.
    async fn hello_message(&self) -> Result<String, DbError>;

    /// Reads the whole `labour_participation` table. An empty table is an empty `Vec`.
    async fn labour_participation(&self) -> Result<Vec<LabourParticipation>, DbError>;
}

/// The `DbRepository` provides the PostgreSQL implementation of [`Repository`].
/// It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` over the shared database handle.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for DbRepository {
    async fn hello_message(&self) -> Result<String, DbError> {
        sqlx::query_scalar::<_, String>(HELLO_QUERY)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::EmptyResult)
    }

    async fn labour_participation(&self) -> Result<Vec<LabourParticipation>, DbError> {
        let rows = sqlx::query_as::<_, LabourParticipation>(LABOUR_PARTICIPATION_QUERY)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), "Fetched labour participation rows.");
        Ok(rows)
    }
}
