use clap::{Args, Parser, Subcommand};
use graves_core::{FilterCriteria, GraveDb, LogicalField};
use std::net::SocketAddr;
use std::path::PathBuf;

/// CLI arguments for graves
#[derive(Debug, Parser)]
#[command(
    name = "graves",
    version,
    about = "Serve and query a GeoJSON dataset of cemetery graves"
)]
pub struct CliArgs {
    /// Path to the GeoJSON FeatureCollection (default: Data/mogily.geojson)
    #[arg(short = 'i', long = "input", env = "GRAVES_DATA", global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn dataset_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(GraveDb::default_dataset_path)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short = 'l', long, default_value = "0.0.0.0:8000")]
        listen: SocketAddr,
    },

    /// Show a summary of the dataset
    Stats,

    /// List graves, optionally filtered (case-insensitive substring match)
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the result as a GeoJSON FeatureCollection
        #[arg(long)]
        json: bool,
    },

    /// Show a single grave by its position in the dataset
    Get {
        /// Zero-based position
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// Write the grave to this file, or into this directory as grob_<imie>_<nazwisko>.json
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// First name fragment
    #[arg(long)]
    pub imie: Option<String>,
    /// Last name fragment
    #[arg(long)]
    pub nazwisko: Option<String>,
    /// Birth date fragment (e.g. 1980)
    #[arg(long = "data-urodzenia")]
    pub data_urodzenia: Option<String>,
    /// Death date fragment (e.g. 2020)
    #[arg(long = "data-smierci")]
    pub data_smierci: Option<String>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(a: FilterArgs) -> Self {
        let mut c = FilterCriteria::new();
        for (field, value) in [
            (LogicalField::FirstName, a.imie),
            (LogicalField::LastName, a.nazwisko),
            (LogicalField::BirthDate, a.data_urodzenia),
            (LogicalField::DeathDate, a.data_smierci),
        ] {
            if let Some(v) = value {
                c = c.with(field, v);
            }
        }
        c
    }
}
