// crates/graves-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod search;

pub use domain::{Feature, FeatureCollection, GraveDb, Properties};
