// crates/graves-core/src/alias.rs

//! # Field Aliases
//!
//! The source dataset was typed in by hand across several tools, so the same
//! attribute shows up under differently cased, abbreviated or mis-decoded
//! property keys. Every logical field owns an ordered alias list; resolution
//! walks it front to back and stops at the first usable value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `"Data śmierci"` written as UTF-8 and read back as CP852 ("Data ś" -> "Data ┼Ť").
pub const MOJIBAKE_DEATH_DATE: &str = "Data ┼Ť";

/// A person attribute that can be searched, independent of its storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    FirstName,
    LastName,
    BirthDate,
    DeathDate,
}

impl LogicalField {
    /// All searchable fields in criteria order.
    pub const ALL: [LogicalField; 4] = [
        LogicalField::FirstName,
        LogicalField::LastName,
        LogicalField::BirthDate,
        LogicalField::DeathDate,
    ];

    /// Property keys to try, highest priority first.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            LogicalField::FirstName => &["imie", "Imie", "IMIE"],
            LogicalField::LastName => &["nazwisko", "Nazwisko", "NAZWISKO"],
            LogicalField::BirthDate => &["data_urodzenia", "Data urodz", "DATA_URODZ"],
            LogicalField::DeathDate => &[
                "data_smierci",
                "Data śmierci",
                "DATA_SMIERCI",
                MOJIBAKE_DEATH_DATE,
            ],
        }
    }

    /// Name of the query parameter carrying this field's fragment.
    pub const fn query_key(self) -> &'static str {
        match self {
            LogicalField::FirstName => "imie",
            LogicalField::LastName => "nazwisko",
            LogicalField::BirthDate => "data_urodzenia",
            LogicalField::DeathDate => "data_smierci",
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogicalField::FirstName => "first name",
            LogicalField::LastName => "last name",
            LogicalField::BirthDate => "birth date",
            LogicalField::DeathDate => "death date",
        };
        f.write_str(label)
    }
}

impl FromStr for LogicalField {
    type Err = String;

    /// Accepts the query key (`nazwisko`) or the snake_case name (`last_name`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LogicalField::ALL
            .into_iter()
            .find(|f| {
                f.query_key().eq_ignore_ascii_case(s)
                    || f.to_string().replace(' ', "_").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| format!("unknown field: {s}"))
    }
}

/// Keys carrying the grave's own identifier. Display only, never searched.
pub const GRAVE_ID_ALIASES: &[&str] = &["id", "ID"];
