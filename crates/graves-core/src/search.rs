// crates/graves-core/src/search.rs

//! # Filter Engine
//!
//! Alias-driven field resolution and multi-field substring matching.
//! Everything here is total: no input makes it fail, it can only match or
//! not match.

use crate::alias::LogicalField;
use crate::model::{Feature, Properties};
use crate::text::{contains_folded, value_text};
use serde::{Deserialize, Serialize};

/// Per-query search criteria, one optional fragment per logical field.
///
/// `None` means no constraint. `Some("")` is kept distinct at this level,
/// but since the empty string is a substring of everything it constrains
/// nothing either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "imie", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "nazwisko", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "data_urodzenia", default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(rename = "data_smierci", default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fragment for one field, replacing any previous value.
    pub fn with(mut self, field: LogicalField, fragment: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(fragment.into());
        self
    }

    pub fn get(&self, field: LogicalField) -> Option<&str> {
        match field {
            LogicalField::FirstName => self.first_name.as_deref(),
            LogicalField::LastName => self.last_name.as_deref(),
            LogicalField::BirthDate => self.birth_date.as_deref(),
            LogicalField::DeathDate => self.death_date.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: LogicalField) -> &mut Option<String> {
        match field {
            LogicalField::FirstName => &mut self.first_name,
            LogicalField::LastName => &mut self.last_name,
            LogicalField::BirthDate => &mut self.birth_date,
            LogicalField::DeathDate => &mut self.death_date,
        }
    }

    /// Present criteria in field order.
    pub fn iter(&self) -> impl Iterator<Item = (LogicalField, &str)> + '_ {
        LogicalField::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|frag| (f, frag)))
    }

    /// `true` when no field carries a fragment at all.
    pub fn is_unconstrained(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Resolves a logical field against a property mapping.
///
/// Walks the field's aliases in priority order and returns the text form of
/// the first value that is present, not `null`, and not blank after
/// trimming. The returned text itself is not trimmed. Yields `""` when no
/// alias qualifies.
pub fn resolve_field(properties: Option<&Properties>, field: LogicalField) -> String {
    resolve_aliases(properties, field.aliases())
}

pub(crate) fn resolve_aliases(properties: Option<&Properties>, aliases: &[&str]) -> String {
    let Some(props) = properties else {
        return String::new();
    };
    aliases
        .iter()
        .filter_map(|key| props.get(*key))
        .filter_map(value_text)
        .find(|text| !text.trim().is_empty())
        .map(|text| text.into_owned())
        .unwrap_or_default()
}

/// AND over every present criterion: the folded fragment must occur in the
/// folded resolved value.
pub fn matches(feature: &Feature, criteria: &FilterCriteria) -> bool {
    let props = feature.properties.as_ref();
    criteria
        .iter()
        .all(|(field, fragment)| contains_folded(&resolve_field(props, field), fragment))
}
