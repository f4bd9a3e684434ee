//! graves-cli
//! ==========
//!
//! Command-line interface and HTTP API for the `graves-core` grave store.
//!
//! The binary (`graves`) is the primary deliverable. The library target
//! exposes the HTTP [`server`] so it can be mounted and tested on its own.
//!
//! Basic usage:
//!
//! ```text
//! graves --help
//! graves --input Data/mogily.geojson serve --listen 127.0.0.1:8000
//! graves stats
//! graves list --nazwisko kow
//! graves get 3 --out downloads/
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;
pub mod server;
