// crates/graves-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and hands the payload to
//! the GeoJSON converter. A dataset is read exactly once; the resulting
//! [`GraveDb`] is immutable.

use crate::error::{GraveError, Result};
use crate::model::convert::{self, CollectionRaw};
use crate::model::GraveDb;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

pub mod common_io;

// Single in-process cache so the default dataset is parsed once per process.
static GRAVE_DB_CACHE: OnceCell<Arc<GraveDb>> = OnceCell::new();

impl GraveDb {
    /// Directory the default dataset lives in, relative to the working directory.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from("Data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "mogily.geojson"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Loads the default dataset once and shares it for the rest of the process.
    ///
    /// Later calls return the same store, even if the file has changed on disk.
    pub fn load() -> Result<Arc<Self>> {
        GRAVE_DB_CACHE
            .get_or_try_init(|| Self::load_from_path(Self::default_dataset_path()).map(Arc::new))
            .cloned()
    }

    /// Reads and parses a GeoJSON `FeatureCollection` file.
    ///
    /// A missing file is [`GraveError::DatasetNotFound`]; bad JSON or a
    /// wrong top-level `type` are load errors as well. None of them leave a
    /// partial store behind.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening grave dataset");
        let reader = common_io::open_stream(path)?;
        let db = Self::load_from_reader(reader).map_err(|e| match e {
            GraveError::InvalidDataset(msg) => {
                GraveError::InvalidDataset(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        info!(path = %path.display(), graves = db.len(), "grave dataset loaded");
        Ok(db)
    }

    /// Parses a dataset from any reader (uncompressed JSON).
    pub fn load_from_reader(reader: impl Read) -> Result<Self> {
        let raw: CollectionRaw = serde_json::from_reader(reader)?;
        convert::from_raw(raw)
    }

    /// Parses a dataset held in memory.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: CollectionRaw = serde_json::from_str(s)?;
        convert::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("graves-core-{}-{name}", std::process::id()))
    }

    #[test]
    fn loads_file_from_disk() {
        let path = temp_path("ok.geojson");
        fs::write(
            &path,
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Point","coordinates":[21.0,52.2]},
                 "properties":{"imie":"Jan"}}]}"#,
        )
        .unwrap();
        let db = GraveDb::load_from_path(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn missing_file_is_dataset_not_found() {
        let err = GraveDb::load_from_path(temp_path("absent.geojson")).unwrap_err();
        assert!(matches!(err, GraveError::DatasetNotFound(_)));
        assert!(err.is_dataset_error());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = GraveDb::from_json_str(r#"{"type":"FeatureCollection","features":["#).unwrap_err();
        assert!(matches!(err, GraveError::Json(_)));
    }

    #[test]
    fn wrong_type_mentions_path() {
        let path = temp_path("point.geojson");
        fs::write(&path, r#"{"type":"Point","coordinates":[0,0]}"#).unwrap();
        let err = GraveDb::load_from_path(&path).unwrap_err();
        fs::remove_file(&path).ok();
        match err {
            GraveError::InvalidDataset(msg) => assert!(msg.contains("point.geojson")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzip_datasets() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let path = temp_path("packed.geojson.gz");
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(br#"{"type":"FeatureCollection","features":[{"properties":{}},{"properties":{}}]}"#)
            .unwrap();
        fs::write(&path, enc.finish().unwrap()).unwrap();
        let db = GraveDb::load_from_path(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(db.len(), 2);
    }
}
