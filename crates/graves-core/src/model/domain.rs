// crates/graves-core/src/model/domain.rs
use crate::error::{GraveError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Attribute mapping of a single feature.
pub type Properties = Map<String, Value>;

/// One grave record as a GeoJSON feature.
///
/// `geometry` is never inspected. Any foreign members of the source object
/// (`id`, `bbox`, ...) are kept in `extra` so the feature serializes back
/// the way it was read.
///
/// `geometry` is `None` only when the member was missing; an explicit
/// `null` reads as `Some(Value::Null)` and is written back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub geometry: Option<Value>,
    /// `None` when the source had no `properties` or an explicit `null`.
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn feature_type() -> String {
    "Feature".to_owned()
}

// Only called when the member exists, so `null` stays distinguishable from absent.
fn present<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

impl Feature {
    /// Builds a point-less feature from a property map.
    pub fn from_properties(properties: Properties) -> Self {
        Self {
            kind: feature_type(),
            geometry: None,
            properties: Some(properties),
            extra: Map::new(),
        }
    }

    /// Attribute lookup for a single key. Missing mapping behaves as empty.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }
}

/// GeoJSON `FeatureCollection` as returned by list queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub const TYPE: &'static str = "FeatureCollection";

    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: Self::TYPE.to_owned(),
            features,
        }
    }
}

impl<'a> FromIterator<&'a Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = &'a Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().cloned().collect())
    }
}

/// The grave database: an immutable, ordered sequence of features.
///
/// Positions are assigned in source order, start at 0 and never change for
/// the life of a `GraveDb`. A position is not tied to the record's content;
/// loading a reordered dataset changes which grave an index denotes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraveDb {
    features: Vec<Feature>,
}

impl GraveDb {
    /// Wraps already-parsed features. No validation happens here.
    pub fn from_features(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// All features in load order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Positional lookup.
    ///
    /// Takes a signed index so callers can hand through whatever the outer
    /// layer parsed; anything outside `[0, len)` is [`GraveError::NotFound`].
    pub fn get(&self, index: i64) -> Result<&Feature> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.features.get(i))
            .ok_or(GraveError::NotFound {
                index,
                len: self.features.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
