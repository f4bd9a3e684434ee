// crates/graves-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`GraveSearch::stats`](crate::traits::GraveSearch::stats).
/// Field counts only include graves where the field resolves to a
/// non-empty value through its alias list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub graves: usize,
    pub with_first_name: usize,
    pub with_last_name: usize,
    pub with_birth_date: usize,
    pub with_death_date: usize,
}
