//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod course;
pub mod course_set;
pub mod person;

pub use validation::ValidationError;
pub use course::CourseName;
pub use course_set::CourseSet;
pub use person::{Age, FullName, NewPerson, PersonKind, PersonName};
