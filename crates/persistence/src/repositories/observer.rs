//! Observer repository for database operations.

use domain::error::{CreationError, LookupError};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{AccountTypeDb, ObserverEntity};
use crate::metrics::QueryTimer;
use crate::repositories::creation_error;

/// Repository for observer-related database operations.
#[derive(Clone)]
pub struct ObserverRepository {
    pool: PgPool,
}

impl ObserverRepository {
    /// Creates a new ObserverRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// True iff exactly one observer record matches the email.
    pub async fn exists(&self, email: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("observer_exists");
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM observers WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(count.0 == 1)
    }

    /// Register a new observer. The email uniqueness check is atomic: the
    /// UNIQUE constraint decides, not a prior read.
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        age: i32,
        account_type: AccountTypeDb,
        installation_id: &str,
    ) -> Result<ObserverEntity, CreationError> {
        let timer = QueryTimer::new("create_observer");
        let result = sqlx::query_as::<_, ObserverEntity>(
            r#"
            INSERT INTO observers (email, name, age, account_type, installation_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(age)
        .bind(account_type)
        .bind(installation_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| creation_error("observer", email, e));
        timer.record();
        result
    }

    /// Fetch the unique observer for an email. Zero matches is not-found;
    /// two or more means the uniqueness invariant is broken and the lookup
    /// fails rather than picking one.
    pub async fn get_by_email(&self, email: &str) -> Result<ObserverEntity, LookupError> {
        let timer = QueryTimer::new("get_observer_by_email");
        let mut rows = sqlx::query_as::<_, ObserverEntity>(
            r#"
            SELECT * FROM observers WHERE email = $1 LIMIT 2
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LookupError::storage("observer", e))?;
        timer.record();

        match rows.len() {
            1 => Ok(rows.remove(0)),
            0 => Err(LookupError::not_found("observer", email)),
            _ => Err(LookupError::ambiguous("observer", email)),
        }
    }

    /// Find an observer by surrogate key, for resolving references on read.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ObserverEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_observer_by_id");
        let result = sqlx::query_as::<_, ObserverEntity>(
            r#"
            SELECT * FROM observers WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
