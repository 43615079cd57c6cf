//! Set of course ids requested for a person's enrollments

use std::collections::BTreeSet;

/// Course ids a person should be enrolled in.
///
/// Duplicate ids in the input collapse to one entry. `to_vec` yields
/// ascending ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSet(BTreeSet<i64>);

impl CourseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids as a vector, for binding to a Postgres array parameter.
    pub fn to_vec(&self) -> Vec<i64> {
        self.0.iter().copied().collect()
    }

    /// Ids in this set that do not appear in `found`, ascending.
    pub fn missing_from(&self, found: &[i64]) -> Vec<i64> {
        let found: BTreeSet<i64> = found.iter().copied().collect();
        self.0.difference(&found).copied().collect()
    }
}

impl FromIterator<i64> for CourseSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<i64>> for CourseSet {
    fn from(ids: Vec<i64>) -> Self {
        ids.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set = CourseSet::from(vec![3, 1, 3, 2, 1]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn missing_from_reports_unmatched_ids_in_order() {
        let set = CourseSet::from(vec![9, 1, 4]);
        assert_eq!(set.missing_from(&[4]), vec![1, 9]);
        assert!(set.missing_from(&[1, 4, 9, 12]).is_empty());
    }

    #[test]
    fn empty_set() {
        let set = CourseSet::new();
        assert!(set.is_empty());
        assert!(set.missing_from(&[]).is_empty());
    }
}
