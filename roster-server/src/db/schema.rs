//! Idempotent schema bootstrap for the course, person, and enrollment tables

use sqlx::PgPool;

/// Unique index on the rendered full name (`first_name || ' ' || last_name`),
/// the key people are addressed by. Violations are reported as duplicate
/// names.
pub const PERSON_NAME_CONSTRAINT: &str = "person_full_name_unique";

/// Statements run in order. Each is safe to repeat.
const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS course (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL CHECK (name <> '')
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS person (
        id BIGSERIAL PRIMARY KEY,
        first_name TEXT NOT NULL CHECK (first_name <> ''),
        last_name TEXT NOT NULL CHECK (last_name <> ''),
        type TEXT NOT NULL CHECK (type IN ('student', 'professor')),
        age INTEGER NOT NULL CHECK (age > 0)
    )
    "#,
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS person_full_name_unique
        ON person ((first_name || ' ' || last_name))
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS person_course (
        person_id BIGINT NOT NULL REFERENCES person(id) ON DELETE CASCADE,
        course_id BIGINT NOT NULL REFERENCES course(id) ON DELETE CASCADE,
        PRIMARY KEY (person_id, course_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_person_course_course ON person_course(course_id)",
    "CREATE INDEX IF NOT EXISTS idx_person_age ON person(age)",
];

/// Create any missing tables and indexes.
pub async fn bootstrap(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Bootstrapping roster schema...");

    for statement in STATEMENTS {
        sqlx::query(*statement).execute(pool).await?;
    }

    tracing::info!(statements = STATEMENTS.len(), "Schema ready");
    Ok(())
}
