// crates/graves-core/src/traits.rs
use crate::alias::{LogicalField, GRAVE_ID_ALIASES};
use crate::common::DbStats;
use crate::error::Result;
use crate::model::{Feature, Properties};
use crate::search::{resolve_aliases, resolve_field, FilterCriteria};
use crate::text::contains_folded;

/// Schema-tolerant field access for types that carry grave properties.
///
/// Implementors expose their raw property mapping via
/// [`FieldResolve::properties`] and get alias-aware helpers on top:
/// - [`FieldResolve::field`] — resolved text of a logical field
/// - [`FieldResolve::field_contains`] — case-insensitive substring match
///
/// # Examples
/// ```rust
/// use graves_core::alias::LogicalField;
/// use graves_core::traits::FieldResolve;
/// use graves_core::Feature;
///
/// let feature: Feature = serde_json::from_str(
///     r#"{"type":"Feature","geometry":null,"properties":{"NAZWISKO":"Kowalski"}}"#,
/// ).unwrap();
///
/// assert_eq!(feature.field(LogicalField::LastName), "Kowalski");
/// assert!(feature.field_contains(LogicalField::LastName, "KOW"));
/// ```
pub trait FieldResolve {
    /// Raw property mapping, `None` when the record has none.
    fn properties(&self) -> Option<&Properties>;

    /// Value of `field` after walking its aliases. Empty when unresolved.
    #[inline]
    fn field(&self, field: LogicalField) -> String {
        resolve_field(self.properties(), field)
    }

    /// Case-insensitive substring match on the resolved value.
    #[inline]
    fn field_contains(&self, field: LogicalField, fragment: &str) -> bool {
        contains_folded(&self.field(field), fragment)
    }

    /// The record's own identifier (`id` / `ID` property), if any.
    fn grave_id(&self) -> Option<String> {
        Some(resolve_aliases(self.properties(), GRAVE_ID_ALIASES)).filter(|s| !s.is_empty())
    }
}

impl FieldResolve for Feature {
    fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }
}

/// Read-only query surface of a grave store.
pub trait GraveSearch {
    fn stats(&self) -> DbStats;

    /// Every grave in load order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use graves_core::{GraveDb, GraveSearch};
    ///
    /// let db = GraveDb::load().unwrap();
    /// for (i, grave) in db.graves().iter().enumerate().take(5) {
    ///     println!("#{i}: {:?}", grave.properties);
    /// }
    /// ```
    fn graves(&self) -> &[Feature];

    /// Positional lookup; out of range is [`GraveError::NotFound`](crate::GraveError::NotFound).
    fn grave(&self, index: i64) -> Result<&Feature>;

    /// List query. With no criteria present this is the whole store;
    /// otherwise every matching grave in store order.
    fn search(&self, criteria: &FilterCriteria) -> Vec<&Feature>;

    /// Like [`GraveSearch::search`] but yields positions, which are the
    /// identifiers accepted by [`GraveSearch::grave`].
    fn search_indices(&self, criteria: &FilterCriteria) -> Vec<usize>;

    /// Single-field shortcut for [`GraveSearch::search`].
    fn find_by_field(&self, field: LogicalField, fragment: &str) -> Vec<&Feature> {
        self.search(&FilterCriteria::new().with(field, fragment))
    }
}
