// crates/graves-core/src/lib.rs

//! # graves-core
//!
//! Read-only store and query engine for cemetery grave records kept as
//! GeoJSON features.
//!
//! The source data was entered by hand, so the same person attribute can sit
//! under several property keys (`imie`, `Imie`, `IMIE`, ...). Searching goes
//! through logical fields that know their [aliases](alias::LogicalField::aliases)
//! and compares case-insensitively by substring.
//!
//! ```no_run
//! use graves_core::{FilterCriteria, GraveDb, GraveSearch, LogicalField};
//!
//! let db = GraveDb::load_from_path("Data/mogily.geojson")?;
//! let criteria = FilterCriteria::new().with(LogicalField::LastName, "kow");
//! for grave in db.search(&criteria) {
//!     println!("{:?}", grave.properties);
//! }
//! # Ok::<(), graves_core::GraveError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod alias;
pub mod api; // Views for list rows and downloads
pub mod common;
pub mod error;
#[cfg(feature = "json")]
pub mod loader; // File-backed loading and the process-wide cache
pub mod model;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::alias::LogicalField;
pub use crate::common::DbStats;
pub use crate::error::{GraveError, Result};
pub use crate::model::{Feature, FeatureCollection, GraveDb, Properties};
pub use crate::search::FilterCriteria;
pub use crate::traits::{FieldResolve, GraveSearch};

pub mod prelude {
    pub use crate::api::{download_filename, GraveSummary};
    pub use crate::{
        DbStats, Feature, FeatureCollection, FieldResolve, FilterCriteria, GraveDb, GraveError,
        GraveSearch, LogicalField, Result,
    };
}
