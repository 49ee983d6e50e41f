//! Per-user lookup history, backed by a local SQLite database.
//!
//! The store owns the whole entry lifecycle: callers append and read,
//! nothing updates or deletes. Recording is meant to run after a resolution
//! has already been rendered, so a storage failure here must never be
//! allowed to cancel the movie the user is looking at.

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::model::{HistoryEntry, TitleCount};

/// How many rows the listing queries return by default.
pub const DEFAULT_PAGE_LIMIT: i64 = 30;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("storage unavailable: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    pool: SqlitePool,
}

impl HistoryStore {
    /// Open (creating if absent) the database at `db_path` and make sure the
    /// schema exists.
    pub async fn open(db_path: &Path) -> Result<Self, HistoryError> {
        let newly_created = !db_path.exists();

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        // WAL keeps concurrent readers out of the writer's way
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await?;
        sqlx::query("PRAGMA busy_timeout = 5000")
            .execute(&pool)
            .await?;

        if newly_created {
            info!("Initialized new history database: {}", db_path.display());
        }

        Self::with_pool(pool).await
    }

    /// Wrap an existing pool, creating the schema idempotently. Tests use
    /// this with `sqlite::memory:`.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, HistoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS stats (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                user_name      TEXT,
                query          TEXT,
                original_title TEXT
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Append one lookup. Ids are assigned by the database and only grow.
    pub async fn record(
        &self,
        user_name: &str,
        query: &str,
        original_title: &str,
    ) -> Result<i64, HistoryError> {
        let result = sqlx::query(
            "INSERT INTO stats (user_name, query, original_title) VALUES (?, ?, ?)",
        )
        .bind(user_name)
        .bind(query)
        .bind(original_title)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Most recent lookups of one user, newest first.
    pub async fn recent_queries(
        &self,
        user_name: &str,
        limit: i64,
    ) -> Result<Vec<HistoryEntry>, HistoryError> {
        let entries = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT id, user_name, query, original_title
            FROM stats
            WHERE user_name = ?
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(user_name)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Most looked-up titles of one user, by descending count. The order of
    /// equal counts is unspecified; callers must not depend on it.
    pub async fn top_titles(
        &self,
        user_name: &str,
        limit: i64,
    ) -> Result<Vec<TitleCount>, HistoryError> {
        let counts = sqlx::query_as::<_, TitleCount>(
            r#"
            SELECT original_title, count(*) AS shows
            FROM stats
            WHERE user_name = ?
            GROUP BY original_title
            ORDER BY shows DESC
            LIMIT ?
            "#,
        )
        .bind(user_name)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }
}
