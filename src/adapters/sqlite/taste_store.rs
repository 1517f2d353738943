//! SQLite adapter for the TasteStore port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::domain::{
    foundation::{DomainError, ErrorCode, Timestamp},
    taste::{Interaction, TasteProfile, TasteVector},
    user::User,
};
use crate::ports::TasteStore;

/// Creates the three tables on startup. Idempotent.
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<(), DomainError> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            external_id TEXT NOT NULL UNIQUE,
            display_name TEXT,
            created_at TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS user_taste_profiles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            baseline_vector TEXT,
            refined_vector TEXT,
            engagement_score REAL NOT NULL DEFAULT 0.0,
            updated_at TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS user_artwork_interactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            artwork_id TEXT NOT NULL,
            rating INTEGER NOT NULL,
            source TEXT NOT NULL DEFAULT 'quiz',
            dwell_time REAL,
            viewed_at TEXT NOT NULL,
            metadata TEXT
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_interactions_user ON user_artwork_interactions(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_interactions_artwork ON user_artwork_interactions(artwork_id)",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(db_error)?;
    }
    Ok(())
}

/// SQLite implementation of TasteStore.
pub struct SqliteTasteStore {
    pool: SqlitePool,
}

impl SqliteTasteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn user_from_row(row: &SqliteRow) -> Result<User, DomainError> {
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(db_error)?;
        Ok(User {
            id: row.try_get("id").map_err(db_error)?,
            external_id: row.try_get("external_id").map_err(db_error)?,
            display_name: row.try_get("display_name").map_err(db_error)?,
            created_at: Timestamp::from_datetime(created_at),
        })
    }

    fn profile_from_row(row: &SqliteRow) -> Result<TasteProfile, DomainError> {
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(db_error)?;
        Ok(TasteProfile {
            baseline_vector: vector_from_json(
                row.try_get("baseline_vector").map_err(db_error)?,
                "baseline_vector",
            )?,
            refined_vector: vector_from_json(
                row.try_get("refined_vector").map_err(db_error)?,
                "refined_vector",
            )?,
            engagement_score: row.try_get("engagement_score").map_err(db_error)?,
            updated_at: Timestamp::from_datetime(updated_at),
        })
    }
}

#[async_trait]
impl TasteStore for SqliteTasteStore {
    async fn find_or_create_user(
        &self,
        external_id: &str,
        display_name: Option<&str>,
    ) -> Result<User, DomainError> {
        if let Some(user) = self.find_user_by_external_id(external_id).await? {
            return Ok(user);
        }

        let created_at = Timestamp::now();
        let result = sqlx::query(
            "INSERT INTO users (external_id, display_name, created_at) VALUES (?1, ?2, ?3)",
        )
        .bind(external_id)
        .bind(display_name)
        .bind(*created_at.as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(User {
                id: done.last_insert_rowid(),
                external_id: external_id.to_string(),
                display_name: display_name.map(str::to_string),
                created_at,
            }),
            Err(sqlx::Error::Database(db))
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                // Lost the creation race; another request inserted this
                // external id between our read and write. Re-read the winner.
                self.find_user_by_external_id(external_id)
                    .await?
                    .ok_or_else(|| {
                        DomainError::new(
                            ErrorCode::ConstraintViolation,
                            format!("Duplicate external id not resolvable: {}", external_id),
                        )
                    })
            }
            Err(e) => Err(db_error(e)),
        }
    }

    async fn find_user_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, external_id, display_name, created_at FROM users WHERE external_id = ?1",
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        match row {
            Some(row) => Ok(Some(Self::user_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn append_interactions(
        &self,
        user_id: i64,
        interactions: &[Interaction],
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        for interaction in interactions {
            let metadata = interaction
                .metadata
                .as_ref()
                .map(|m| serde_json::to_string(m))
                .transpose()
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::InternalError,
                        format!("Failed to serialize interaction metadata: {}", e),
                    )
                })?;

            sqlx::query(
                r#"
                INSERT INTO user_artwork_interactions
                    (user_id, artwork_id, rating, source, dwell_time, viewed_at, metadata)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
            )
            .bind(user_id)
            .bind(&interaction.artwork_id)
            .bind(interaction.rating.value() as i64)
            .bind(&interaction.source)
            .bind(interaction.dwell_time)
            .bind(*interaction.viewed_at.as_datetime())
            .bind(metadata)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;
        }

        tx.commit().await.map_err(db_error)
    }

    async fn get_profile(&self, user_id: i64) -> Result<Option<TasteProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT baseline_vector, refined_vector, engagement_score, updated_at
            FROM user_taste_profiles WHERE user_id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        match row {
            Some(row) => Ok(Some(Self::profile_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_profile(
        &self,
        user_id: i64,
        profile: &TasteProfile,
    ) -> Result<(), DomainError> {
        let baseline = vector_to_json(profile.baseline_vector.as_ref())?;
        let refined = vector_to_json(profile.refined_vector.as_ref())?;

        sqlx::query(
            r#"
            INSERT INTO user_taste_profiles
                (user_id, baseline_vector, refined_vector, engagement_score, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(user_id) DO UPDATE SET
                baseline_vector = excluded.baseline_vector,
                refined_vector = excluded.refined_vector,
                engagement_score = excluded.engagement_score,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(baseline)
        .bind(refined)
        .bind(profile.engagement_score)
        .bind(*profile.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
}

fn vector_to_json(vector: Option<&TasteVector>) -> Result<Option<String>, DomainError> {
    vector
        .map(|v| serde_json::to_string(v))
        .transpose()
        .map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize taste vector: {}", e),
            )
        })
}

fn vector_from_json(
    value: Option<String>,
    column: &str,
) -> Result<Option<TasteVector>, DomainError> {
    value
        .map(|s| serde_json::from_str(&s))
        .transpose()
        .map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Corrupt {} column: {}", column, e),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taste::{QuizAnswer, Rating};
    use sqlx::sqlite::SqlitePoolOptions;

    // One connection so every query sees the same in-memory database.
    async fn test_store() -> SqliteTasteStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        bootstrap_schema(&pool).await.unwrap();
        SqliteTasteStore::new(pool)
    }

    #[tokio::test]
    async fn bootstrap_schema_is_idempotent() {
        let store = test_store().await;
        bootstrap_schema(&store.pool).await.unwrap();
    }

    #[tokio::test]
    async fn find_or_create_user_round_trips() {
        let store = test_store().await;

        let created = store
            .find_or_create_user("clerk-1", Some("Ada"))
            .await
            .unwrap();
        assert_eq!(created.external_id, "clerk-1");
        assert_eq!(created.display_name.as_deref(), Some("Ada"));

        let found = store
            .find_user_by_external_id("clerk-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);

        // Second call resolves to the same row, even with a different name.
        let again = store.find_or_create_user("clerk-1", None).await.unwrap();
        assert_eq!(again.id, created.id);
        assert_eq!(again.display_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn unknown_external_id_is_absent() {
        let store = test_store().await;
        assert!(store
            .find_user_by_external_id("nobody")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn append_interactions_writes_all_rows() {
        let store = test_store().await;
        let user = store.find_or_create_user("clerk-1", None).await.unwrap();

        let now = Timestamp::now();
        let batch: Vec<Interaction> = [("a", Rating::Like), ("b", Rating::Dislike), ("c", Rating::Neutral)]
            .iter()
            .map(|(id, r)| Interaction::from_quiz_answer(&QuizAnswer::new(*id, *r), now))
            .collect();
        store.append_interactions(user.id, &batch).await.unwrap();

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM user_artwork_interactions WHERE user_id = ?1")
                .bind(user.id)
                .fetch_one(&store.pool)
                .await
                .unwrap();
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn profile_upsert_and_get_round_trip() {
        let store = test_store().await;
        let user = store.find_or_create_user("clerk-1", None).await.unwrap();

        assert!(store.get_profile(user.id).await.unwrap().is_none());

        let vector =
            TasteVector::new([1.0, 1.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0]).normalized();
        let profile = TasteProfile {
            baseline_vector: Some(vector),
            refined_vector: Some(vector),
            engagement_score: 1.2,
            updated_at: Timestamp::now(),
        };
        store.upsert_profile(user.id, &profile).await.unwrap();

        let stored = store.get_profile(user.id).await.unwrap().unwrap();
        assert_eq!(stored.baseline_vector, Some(vector));
        assert_eq!(stored.refined_vector, Some(vector));
        assert!((stored.engagement_score - 1.2).abs() < 1e-9);

        // Update in place keeps a single row per user.
        let updated = TasteProfile {
            engagement_score: 2.4,
            ..profile
        };
        store.upsert_profile(user.id, &updated).await.unwrap();

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM user_taste_profiles WHERE user_id = ?1")
                .bind(user.id)
                .fetch_one(&store.pool)
                .await
                .unwrap();
        assert_eq!(count, 1);

        let stored = store.get_profile(user.id).await.unwrap().unwrap();
        assert!((stored.engagement_score - 2.4).abs() < 1e-9);
    }

    #[tokio::test]
    async fn profile_without_vectors_round_trips_nulls() {
        let store = test_store().await;
        let user = store.find_or_create_user("clerk-1", None).await.unwrap();

        let profile = TasteProfile::empty(Timestamp::now());
        store.upsert_profile(user.id, &profile).await.unwrap();

        let stored = store.get_profile(user.id).await.unwrap().unwrap();
        assert!(stored.baseline_vector.is_none());
        assert!(stored.refined_vector.is_none());
        assert_eq!(stored.engagement_score, 0.0);
    }
}
