// crates/graves-core/src/model/search.rs
use super::domain::{Feature, GraveDb};
use crate::alias::LogicalField;
use crate::common::DbStats;
use crate::error::Result;
use crate::search::{matches, FilterCriteria};
use crate::traits::{FieldResolve, GraveSearch};

impl GraveSearch for GraveDb {
    fn stats(&self) -> DbStats {
        let count = |field: LogicalField| {
            self.features()
                .iter()
                .filter(|f| !f.field(field).is_empty())
                .count()
        };
        DbStats {
            graves: self.len(),
            with_first_name: count(LogicalField::FirstName),
            with_last_name: count(LogicalField::LastName),
            with_birth_date: count(LogicalField::BirthDate),
            with_death_date: count(LogicalField::DeathDate),
        }
    }

    fn graves(&self) -> &[Feature] {
        self.features()
    }

    fn grave(&self, index: i64) -> Result<&Feature> {
        self.get(index)
    }

    fn search(&self, criteria: &FilterCriteria) -> Vec<&Feature> {
        if criteria.is_unconstrained() {
            return self.features().iter().collect();
        }
        // Linear scan, the dataset is a single cemetery.
        self.features()
            .iter()
            .filter(|f| matches(f, criteria))
            .collect()
    }

    fn search_indices(&self, criteria: &FilterCriteria) -> Vec<usize> {
        if criteria.is_unconstrained() {
            return (0..self.len()).collect();
        }
        self.features()
            .iter()
            .enumerate()
            .filter(|(_, f)| matches(f, criteria))
            .map(|(i, _)| i)
            .collect()
    }
}
