//! Person listing filters
//!
//! A `PersonFilter` lowers to an ordered list of `Predicate`s. Each predicate
//! writes its clause and binds its values in the same step, so placeholder
//! numbers always follow clause order no matter which filters are present.

use sqlx::{Postgres, QueryBuilder};

use crate::models::ValidationError;

/// One WHERE clause together with the values it binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// First name or last name equals the value
    NameEquals(String),
    /// Age equals the value
    AgeEquals(i32),
}

impl Predicate {
    fn push_to(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::NameEquals(name) => {
                builder.push("(p.first_name = ");
                builder.push_bind(name.clone());
                builder.push(" OR p.last_name = ");
                builder.push_bind(name.clone());
                builder.push(")");
            }
            Self::AgeEquals(age) => {
                builder.push("p.age = ");
                builder.push_bind(*age);
            }
        }
    }
}

/// Optional filters for listing people. Absent filters match everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl PersonFilter {
    /// Build a filter from raw query parameters. Empty values count as
    /// absent; a non-numeric age is rejected.
    pub fn parse(name: Option<&str>, age: Option<&str>) -> Result<Self, ValidationError> {
        let name = name.filter(|n| !n.is_empty()).map(str::to_owned);

        let age = match age.filter(|a| !a.is_empty()) {
            Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| {
                ValidationError::InvalidFormat {
                    field: "age",
                    reason: format!("'{}' is not an integer", raw),
                }
            })?),
            None => None,
        };

        Ok(Self { name, age })
    }

    /// Predicates in the order they appear in the generated query.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::with_capacity(2);
        if let Some(name) = &self.name {
            predicates.push(Predicate::NameEquals(name.clone()));
        }
        if let Some(age) = self.age {
            predicates.push(Predicate::AgeEquals(age));
        }
        predicates
    }

    /// Append ` WHERE a AND b ...` to `builder`, or nothing when unfiltered.
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        for (i, predicate) in self.predicates().iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_to(builder);
        }
    }
}
