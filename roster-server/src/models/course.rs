//! Course name validation

use super::ValidationError;

/// Maximum length for course names
const MAX_COURSE_NAME_LEN: usize = 255;

/// Validated course name (non-empty after trimming)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseName(String);

impl CourseName {
    /// Create a new course name.
    ///
    /// Surrounding whitespace is stripped; what remains must be non-empty
    /// and at most 255 characters.
    ///
    /// # Example
    /// ```
    /// use roster_server::models::CourseName;
    ///
    /// assert_eq!(CourseName::new("  Algorithms ").unwrap().as_str(), "Algorithms");
    /// assert!(CourseName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "course name",
            });
        }

        if trimmed.chars().count() > MAX_COURSE_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "course name",
                max: MAX_COURSE_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CourseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_name() {
        assert_eq!(CourseName::new("Algorithms").unwrap().as_str(), "Algorithms");
    }

    #[test]
    fn rejects_empty() {
        let err = CourseName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn rejects_whitespace_only() {
        let err = CourseName::new(" \t ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        assert!(CourseName::new(&"a".repeat(255)).is_ok());

        let err = CourseName::new(&"a".repeat(256)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));
    }
}
