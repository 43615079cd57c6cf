//! Repository implementations for database access
//!
//! Each repository borrows the pool it is handed and follows these patterns:
//! - Aggregates enrollments with a JOIN for reads (no N+1)
//! - Takes a row lock on the owning person before rewriting its enrollments
//! - Uses transactions for multi-step operations

pub mod associations;
pub mod courses;
pub mod filter;
pub mod people;

pub use associations::AssociationRepo;
pub use courses::{Course, CourseRepo};
pub use filter::{PersonFilter, Predicate};
pub use people::{CompletePerson, PersonRepo};

use crate::db::schema::PERSON_NAME_CONSTRAINT;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("course {id} does not exist")]
    UnknownCourse { id: i64 },

    #[error("a person named '{full_name}' already exists")]
    DuplicateName { full_name: String },
}

impl DbError {
    /// Translate a write error, turning a violation of the full-name index
    /// into `DuplicateName`.
    pub(crate) fn from_person_write(err: sqlx::Error, full_name: String) -> Self {
        let duplicate = err
            .as_database_error()
            .map(|db| db.is_unique_violation() && db.constraint() == Some(PERSON_NAME_CONSTRAINT))
            .unwrap_or(false);

        if duplicate {
            Self::DuplicateName { full_name }
        } else {
            Self::Sqlx(err)
        }
    }
}
