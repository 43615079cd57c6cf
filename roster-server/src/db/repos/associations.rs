//! Enrollment (person ↔ course) repository
//!
//! Owns every write to `person_course`. A replace:
//! 1. locks the owning person row (`FOR UPDATE`), so concurrent replaces for
//!    one person run one after the other
//! 2. checks the whole requested set against `course` in a single query,
//!    share-locking the matches
//! 3. only then deletes the old set and inserts the new one
//!
//! All three steps share one transaction. An unknown course id aborts before
//! anything is deleted, and a failure mid-write rolls back to the prior set.

use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use sqlx::{PgConnection, PgPool};

use crate::models::CourseSet;
use super::{CourseRepo, DbError};

/// Enrollment repository
pub struct AssociationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AssociationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Stream the course ids a person is enrolled in. Rows are yielded as
    /// they arrive; no ordering is promised.
    pub fn stream(&self, person_id: i64) -> BoxStream<'a, Result<i64, DbError>> {
        sqlx::query_scalar::<_, i64>("SELECT course_id FROM person_course WHERE person_id = $1")
            .bind(person_id)
            .fetch(self.pool)
            .map_err(DbError::from)
            .boxed()
    }

    /// Collect a person's enrolled course ids.
    pub async fn get(&self, person_id: i64) -> Result<Vec<i64>, DbError> {
        self.stream(person_id).try_collect().await
    }

    /// Remove every enrollment for a person. Succeeds when there were none.
    pub async fn delete_all(&self, person_id: i64) -> Result<u64, DbError> {
        let mut conn = self.pool.acquire().await?;
        Self::delete_all_in(&mut conn, person_id).await
    }

    /// Replace a person's enrollments with exactly `courses`, in its own
    /// transaction.
    pub async fn replace(&self, person_id: i64, courses: &CourseSet) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;
        Self::replace_in(&mut tx, person_id, courses).await?;
        tx.commit().await?;
        Ok(())
    }

    /// `delete_all` on a caller-supplied connection or transaction.
    pub async fn delete_all_in(conn: &mut PgConnection, person_id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM person_course WHERE person_id = $1")
            .bind(person_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// `replace` inside a caller-owned transaction. The caller commits.
    ///
    /// Fails with `UnknownCourse` naming the smallest id that does not exist,
    /// or `NotFound` when the person row is gone. Neither failure has
    /// written anything.
    pub async fn replace_in(
        conn: &mut PgConnection,
        person_id: i64,
        courses: &CourseSet,
    ) -> Result<(), DbError> {
        lock_person(conn, person_id).await?;

        let requested = courses.to_vec();
        let found = CourseRepo::lock_existing(conn, &requested).await?;
        if let Some(&id) = courses.missing_from(&found).first() {
            tracing::debug!(person_id, course_id = id, "rejecting enrollment in unknown course");
            return Err(DbError::UnknownCourse { id });
        }

        let removed = Self::delete_all_in(conn, person_id).await?;

        if !requested.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO person_course (person_id, course_id)
                SELECT $1, UNNEST($2::BIGINT[])
                "#,
            )
            .bind(person_id)
            .bind(&requested)
            .execute(&mut *conn)
            .await?;
        }

        tracing::debug!(
            person_id,
            removed,
            course_count = requested.len(),
            "replaced enrollments"
        );
        Ok(())
    }
}

/// Take a row lock on the person, or fail with `NotFound`.
async fn lock_person(conn: &mut PgConnection, person_id: i64) -> Result<(), DbError> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM person WHERE id = $1 FOR UPDATE")
        .bind(person_id)
        .fetch_optional(&mut *conn)
        .await?
        .map(|_| ())
        .ok_or_else(|| DbError::NotFound {
            resource: "person",
            id: person_id.to_string(),
        })
}
