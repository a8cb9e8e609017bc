//! Persistence for review submissions
//!
//! One SQLite file, one `reviews` table, created on open when absent.
//! There are no migrations.

pub mod error;
pub mod repos;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tracing::info;

pub use error::{Error, Result};
pub use repos::reviews::{NewReview, Review, ReviewDigest, ReviewsRepo};

/// Schema for the single `reviews` table.
const CREATE_REVIEWS_TABLE: &str = "CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    rating INTEGER NOT NULL,
    review TEXT NOT NULL,
    ai_response TEXT NOT NULL,
    ai_summary TEXT NOT NULL,
    ai_action TEXT NOT NULL
)";

/// Database connection pool
#[derive(Clone)]
pub struct ReviewStore {
    pool: SqlitePool,
}

impl ReviewStore {
    /// Open (or create) the database file and ensure the schema exists
    pub async fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Io(format!("Failed to create database directory: {}", e)))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.initialize().await?;

        info!(path = %db_path.display(), "review store ready");
        Ok(store)
    }

    /// Default database path (`./reviews.db`)
    pub fn default_path() -> PathBuf {
        PathBuf::from("./reviews.db")
    }

    async fn initialize(&self) -> Result<()> {
        sqlx::query(CREATE_REVIEWS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Cheap liveness probe
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Get the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the reviews repository
    pub fn reviews(&self) -> ReviewsRepo {
        ReviewsRepo::new(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_store_creates_file_and_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("reviews.db");

        let store = ReviewStore::open(&db_path).await.unwrap();
        assert!(db_path.exists());
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_schema_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let store = ReviewStore::open(temp_dir.path().join("reviews.db"))
            .await
            .unwrap();

        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='reviews'",
        )
        .fetch_one(store.pool())
        .await
        .unwrap();
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn test_reopen_keeps_rows() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("reviews.db");

        {
            let store = ReviewStore::open(&db_path).await.unwrap();
            store
                .reviews()
                .insert(&NewReview {
                    rating: 4,
                    review: "Nice".into(),
                    ai_response: "Thanks".into(),
                    ai_summary: "Positive".into(),
                    ai_action: "None".into(),
                })
                .await
                .unwrap();
            store.pool().close().await;
        }

        let store = ReviewStore::open(&db_path).await.unwrap();
        assert_eq!(store.reviews().count().await.unwrap(), 1);
    }
}
