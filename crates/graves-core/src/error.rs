// crates/graves-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading or querying the grave database.
///
/// The first four variants make up the dataset failure family: they only
/// occur while the store is being built and are fatal to the process.
/// [`GraveError::NotFound`] is the only per-request error.
#[derive(Debug, Error)]
pub enum GraveError {
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Positional lookup outside `[0, len)`.
    #[error("Grave {index} not found (dataset holds {len} graves)")]
    NotFound { index: i64, len: usize },
}

impl GraveError {
    /// `true` for every variant that can only come out of dataset loading.
    pub fn is_dataset_error(&self) -> bool {
        !matches!(self, GraveError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, GraveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_not_a_dataset_error() {
        let e = GraveError::NotFound { index: 5, len: 2 };
        assert!(!e.is_dataset_error());
        assert_eq!(e.to_string(), "Grave 5 not found (dataset holds 2 graves)");
    }

    #[test]
    fn load_failures_are_dataset_errors() {
        assert!(GraveError::DatasetNotFound("x".into()).is_dataset_error());
        assert!(GraveError::InvalidDataset("x".into()).is_dataset_error());
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(GraveError::from(json).is_dataset_error());
    }
}
