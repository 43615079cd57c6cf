//! Person repository
//!
//! People are addressed by full name (`first_name || ' ' || last_name`).
//! A unique index on that expression keeps every full name pointing at
//! exactly one row, including names that split differently
//! ("Ada Mary" + "Lovelace" vs "Ada" + "Mary Lovelace").
//!
//! Create, update, and delete each run in one transaction together with the
//! enrollment writes they imply.

use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder, Row};

use crate::models::{FullName, NewPerson, PersonKind};
use super::{AssociationRepo, DbError, PersonFilter};

/// Person with the ids of every course it is enrolled in (ascending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletePerson {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub kind: PersonKind,
    pub age: i32,
    pub courses: Vec<i64>,
}

/// Person columns plus aggregated enrollments. Callers append WHERE and
/// must finish with `GROUP BY p.id`.
const SELECT_COMPLETE_PERSON: &str = r#"
    SELECT
        p.id,
        p.first_name,
        p.last_name,
        p.type,
        p.age,
        COALESCE(
            ARRAY_AGG(pc.course_id ORDER BY pc.course_id)
                FILTER (WHERE pc.course_id IS NOT NULL),
            '{}'::BIGINT[]
        ) AS courses
    FROM person p
    LEFT JOIN person_course pc ON pc.person_id = p.id
"#;

const RESOLVE_FULL_NAME: &str =
    "SELECT id FROM person WHERE first_name || ' ' || last_name = $1";

const RESOLVE_FULL_NAME_FOR_UPDATE: &str =
    "SELECT id FROM person WHERE first_name || ' ' || last_name = $1 FOR UPDATE";

/// Person repository
pub struct PersonRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PersonRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List people matching every filter that is present.
    pub async fn list(&self, filter: &PersonFilter) -> Result<Vec<CompletePerson>, DbError> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_COMPLETE_PERSON);
        filter.push_where(&mut builder);
        builder.push(" GROUP BY p.id ORDER BY p.id");

        let rows = builder.build().fetch_all(self.pool).await?;
        rows.iter().map(person_from_row).collect()
    }

    /// Get a person by full name.
    pub async fn get(&self, full_name: &FullName) -> Result<CompletePerson, DbError> {
        let mut conn = self.pool.acquire().await?;
        let id = resolve(&mut conn, full_name, RESOLVE_FULL_NAME).await?;
        drop(conn);
        self.get_by_id(id).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CompletePerson, DbError> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_COMPLETE_PERSON);
        builder.push(" WHERE p.id = ");
        builder.push_bind(id);
        builder.push(" GROUP BY p.id");

        let row = builder
            .build()
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "person",
                id: id.to_string(),
            })?;

        person_from_row(&row)
    }

    /// Insert a person and its enrollments. Returns the new id.
    ///
    /// An unknown course id rolls back the whole insert, so no person row
    /// is left behind.
    pub async fn create(&self, person: &NewPerson) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO person (first_name, last_name, type, age)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(person.first_name.as_str())
        .bind(person.last_name.as_str())
        .bind(person.kind.as_str())
        .bind(person.age.get())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DbError::from_person_write(e, person.full_name()))?;

        AssociationRepo::replace_in(&mut tx, id, &person.courses).await?;

        tx.commit().await?;
        tracing::debug!(person_id = id, "created person");
        Ok(id)
    }

    /// Overwrite the person addressed by `full_name`, replacing its
    /// enrollments wholesale, and return the stored result.
    pub async fn update(
        &self,
        full_name: &FullName,
        person: &NewPerson,
    ) -> Result<CompletePerson, DbError> {
        let mut tx = self.pool.begin().await?;
        let id = resolve(&mut tx, full_name, RESOLVE_FULL_NAME_FOR_UPDATE).await?;

        sqlx::query(
            r#"
            UPDATE person
            SET first_name = $1, last_name = $2, type = $3, age = $4
            WHERE id = $5
            "#,
        )
        .bind(person.first_name.as_str())
        .bind(person.last_name.as_str())
        .bind(person.kind.as_str())
        .bind(person.age.get())
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| DbError::from_person_write(e, person.full_name()))?;

        AssociationRepo::replace_in(&mut tx, id, &person.courses).await?;

        tx.commit().await?;
        tracing::debug!(person_id = id, "updated person");
        self.get_by_id(id).await
    }

    /// Delete the person addressed by `full_name` and all its enrollments.
    pub async fn delete(&self, full_name: &FullName) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;
        let id = resolve(&mut tx, full_name, RESOLVE_FULL_NAME_FOR_UPDATE).await?;

        AssociationRepo::delete_all_in(&mut tx, id).await?;
        sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(person_id = id, "deleted person");
        Ok(())
    }
}

/// Find the person id for a full name using one of the resolve queries
/// above.
async fn resolve(
    conn: &mut PgConnection,
    full_name: &FullName,
    query: &'static str,
) -> Result<i64, DbError> {
    sqlx::query_scalar::<_, i64>(query)
        .bind(full_name.as_str())
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "person",
            id: full_name.to_string(),
        })
}

fn person_from_row(row: &PgRow) -> Result<CompletePerson, DbError> {
    let kind: String = row.try_get("type")?;
    let kind = kind
        .parse::<PersonKind>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(CompletePerson {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        kind,
        age: row.try_get("age")?,
        courses: row.try_get("courses")?,
    })
}
