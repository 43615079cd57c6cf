//! Course repository
//!
//! Plain CRUD over the `course` table. Deleting a course cascades to its
//! enrollments through the foreign key.

use sqlx::{FromRow, PgConnection, PgPool};

use crate::models::CourseName;
use super::DbError;

/// Course record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

/// Course repository
pub struct CourseRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CourseRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every course, oldest first.
    pub async fn list(&self) -> Result<Vec<Course>, DbError> {
        let courses = sqlx::query_as::<_, Course>("SELECT id, name FROM course ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(courses)
    }

    pub async fn get(&self, id: i64) -> Result<Course, DbError> {
        sqlx::query_as::<_, Course>("SELECT id, name FROM course WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Insert a course and return it with its generated id.
    pub async fn create(&self, name: CourseName) -> Result<Course, DbError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO course (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(course_id = course.id, "created course");
        Ok(course)
    }

    pub async fn update(&self, id: i64, name: CourseName) -> Result<Course, DbError> {
        sqlx::query_as::<_, Course>(
            "UPDATE course SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(name.as_str())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Delete a course. Fails with `NotFound` when no row was removed.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM course WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(course_id = id, "deleted course");
        Ok(())
    }

    /// Return which of `ids` name existing courses, taking a share lock on
    /// each match so it cannot be deleted before the caller's transaction
    /// commits.
    pub async fn lock_existing(conn: &mut PgConnection, ids: &[i64]) -> Result<Vec<i64>, DbError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM course WHERE id = ANY($1) ORDER BY id FOR SHARE",
        )
        .bind(ids)
        .fetch_all(&mut *conn)
        .await?;

        Ok(found)
    }
}

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: "course",
        id: id.to_string(),
    }
}
