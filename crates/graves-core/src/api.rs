// crates/graves-core/src/api.rs

//! Presentation views over grave records (list rows, popups, file names).

use crate::alias::LogicalField;
use crate::model::Feature;
use crate::text::{fold_key, sanitize_file_name};
use crate::traits::FieldResolve;
use serde::Serialize;
use std::fmt;

/// Flattened, resolved view of one grave.
///
/// Every field is already pushed through its alias list, so consumers never
/// deal with the raw key variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraveSummary {
    /// Position in the store.
    pub index: usize,
    pub grave_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub death_date: String,
}

impl GraveSummary {
    pub fn new(index: usize, feature: &Feature) -> Self {
        Self {
            index,
            grave_id: feature.grave_id(),
            first_name: feature.field(LogicalField::FirstName),
            last_name: feature.field(LogicalField::LastName),
            birth_date: feature.field(LogicalField::BirthDate),
            death_date: feature.field(LogicalField::DeathDate),
        }
    }

    /// `"<first> <last>"`, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

impl fmt::Display for GraveSummary {
    /// One result-list row: `#3 Jan Kowalski (id 12), b. 1901, d. 1944`.
    /// Unknown dates print as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_dash = |s: &str| if s.is_empty() { "-".to_owned() } else { s.to_owned() };
        write!(f, "#{} {}", self.index, self.full_name())?;
        if let Some(id) = &self.grave_id {
            write!(f, " (id {id})")?;
        }
        write!(
            f,
            ", b. {}, d. {}",
            or_dash(&self.birth_date),
            or_dash(&self.death_date)
        )
    }
}

/// Download file name for a single grave: `grob_<first>_<last>.json`.
///
/// Names are lowercased and every run of characters outside
/// `[a-z0-9_.-]` becomes one `_`. A grave without a first name is
/// named `grob`.
///
/// # Examples
///
/// ```rust
/// use graves_core::api::download_filename;
/// use graves_core::Feature;
///
/// let f: Feature = serde_json::from_str(
///     r#"{"properties":{"imie":"Jan","nazwisko":"Kowalski"}}"#,
/// ).unwrap();
/// assert_eq!(download_filename(&f), "grob_jan_kowalski.json");
/// ```
pub fn download_filename(feature: &Feature) -> String {
    let first = feature.field(LogicalField::FirstName);
    let first = if first.is_empty() { "grob".to_owned() } else { fold_key(&first) };
    let last = fold_key(&feature.field(LogicalField::LastName));
    sanitize_file_name(&format!("grob_{first}_{last}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(v: serde_json::Value) -> Feature {
        serde_json::from_value(json!({ "properties": v })).unwrap()
    }

    #[test]
    fn summary_resolves_aliases() {
        let f = feature(json!({
            "Imie": "Anna",
            "NAZWISKO": "Nowak",
            "Data ┼Ť": "1944",
            "ID": 7
        }));
        let s = GraveSummary::new(1, &f);
        assert_eq!(s.full_name(), "Anna Nowak");
        assert_eq!(s.death_date, "1944");
        assert_eq!(s.grave_id.as_deref(), Some("7"));
        assert_eq!(s.to_string(), "#1 Anna Nowak (id 7), b. -, d. 1944");
    }

    #[test]
    fn filename_is_sanitized() {
        let f = feature(json!({ "imie": "Józef", "nazwisko": "Wąs-Kowalski" }));
        assert_eq!(download_filename(&f), "grob_j_zef_w_s-kowalski.json");
    }

    #[test]
    fn filename_without_first_name() {
        let f = feature(json!({ "nazwisko": "Nowak" }));
        assert_eq!(download_filename(&f), "grob_grob_nowak.json");
    }
}
