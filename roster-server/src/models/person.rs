//! Person field validation
//!
//! A person write is accepted only when every field passes:
//! - first and last name non-empty (whitespace stripped)
//! - type is `student` or `professor`
//! - age is a positive integer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CourseSet, ValidationError};

/// Maximum length for a first or last name
const MAX_NAME_LEN: usize = 100;

/// Validated first or last name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Validate a name part. `field` names the payload field in errors.
    pub fn new(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field,
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Role of a person. Stored and serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Student,
    Professor,
}

impl PersonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Professor => "professor",
        }
    }
}

impl FromStr for PersonKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Err(ValidationError::Empty { field: "type" }),
            "student" => Ok(Self::Student),
            "professor" => Ok(Self::Professor),
            _ => Err(ValidationError::InvalidVariant {
                field: "type",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positive age in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Age(i32);

impl Age {
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NotPositive { field: "age" });
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

/// The `"{first_name} {last_name}"` key used to address a person by path.
///
/// The store keeps it unique across people.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName(String);

impl FullName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "full name" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully validated person write, including its enrollments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub kind: PersonKind,
    pub age: Age,
    pub courses: CourseSet,
}

impl NewPerson {
    /// The full name this person will be addressable by once written.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.as_str(), self.last_name.as_str())
    }
}
