//! Repository for review records

use sqlx::SqlitePool;
use tracing::debug;

use crate::{Error, Result};

/// Stored review row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub rating: i64,
    pub review: String,
    pub ai_response: String,
    pub ai_summary: String,
    pub ai_action: String,
}

/// Values for a new row; `id` is assigned by SQLite
#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: i64,
    pub review: String,
    pub ai_response: String,
    pub ai_summary: String,
    pub ai_action: String,
}

/// Admin-facing projection: no `id`, no `ai_response`
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ReviewDigest {
    pub rating: i64,
    pub review: String,
    pub ai_summary: String,
    pub ai_action: String,
}

/// Repository for managing review records
#[derive(Clone)]
pub struct ReviewsRepo {
    pool: SqlitePool,
}

impl ReviewsRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a review and return its new id
    pub async fn insert(&self, review: &NewReview) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO reviews (rating, review, ai_response, ai_summary, ai_action)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(review.rating)
        .bind(&review.review)
        .bind(&review.ai_response)
        .bind(&review.ai_summary)
        .bind(&review.ai_action)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, rating = review.rating, "review inserted");
        Ok(id)
    }

    /// Find a review by id
    pub async fn find_by_id(&self, id: i64) -> Result<Review> {
        sqlx::query_as::<_, Review>(
            "SELECT id, rating, review, ai_response, ai_summary, ai_action
             FROM reviews
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Review with id {} not found", id)))
    }

    /// All rows projected for the admin listing, in the order SQLite returns them
    pub async fn list_digests(&self) -> Result<Vec<ReviewDigest>> {
        let rows = sqlx::query_as::<_, ReviewDigest>(
            "SELECT rating, review, ai_summary, ai_action FROM reviews",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Number of stored reviews
    pub async fn count(&self) -> Result<i64> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}
