// crates/graves-core/src/model/convert.rs
use super::domain::{Feature, FeatureCollection, GraveDb};
use crate::error::{GraveError, Result};
use serde::Deserialize;

/// Top-level shape of a dataset file as it comes from disk.
///
/// `type` is optional on read so that we can give a precise error instead
/// of a generic serde message. A missing `features` member reads as an
/// empty collection.
#[derive(Debug, Deserialize)]
pub struct CollectionRaw {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// **Standard Converter:** Raw -> GraveDb.
pub fn from_raw(raw: CollectionRaw) -> Result<GraveDb> {
    match raw.kind.as_deref() {
        None | Some(FeatureCollection::TYPE) => Ok(GraveDb::from_features(raw.features)),
        Some(other) => Err(GraveError::InvalidDataset(format!(
            "expected a {} document, found type {other:?}",
            FeatureCollection::TYPE
        ))),
    }
}
