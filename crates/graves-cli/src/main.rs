//! graves — query and serve a cemetery grave dataset
//!
//! The dataset is a GeoJSON `FeatureCollection` of grave markers. It is read
//! once at startup; if it is missing or malformed the process exits before
//! doing anything else.
//!
//! Usage examples
//! --------------
//!
//! - Run the HTTP API
//!   $ graves serve --listen 127.0.0.1:8000
//!
//! - Show how many graves carry each searchable field
//!   $ graves stats
//!
//! - Search (all filters are case-insensitive substrings, combined with AND)
//!   $ graves list --nazwisko kow --data-smierci 1944
//!   $ graves list --imie anna --json
//!
//! - Show or export one grave by position
//!   $ graves get 0
//!   $ graves get 12 --out ./downloads
//!
//! Data source
//! -----------
//!
//! `--input <path>` or `GRAVES_DATA` select the dataset; the default is
//! `Data/mogily.geojson` under the working directory. Paths ending in `.gz`
//! are decompressed on the fly.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use graves_cli::logging;
use graves_cli::server::{self, AppState};
use graves_core::api::{download_filename, GraveSummary};
use graves_core::{FeatureCollection, FilterCriteria, GraveDb, GraveSearch};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // RUST_LOG wins; INFO otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter())
        .with_writer(std::io::stderr)
        .init();

    // Fail fast: nothing runs without a complete dataset.
    let input_path = args.dataset_path();
    let db = GraveDb::load_from_path(&input_path)
        .with_context(|| format!("failed to load grave dataset {}", input_path.display()))?;

    match args.command {
        Commands::Serve { listen } => serve(Arc::new(db), listen).await?,

        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Graves: {}", stats.graves);
            println!("  With first name: {}", stats.with_first_name);
            println!("  With last name: {}", stats.with_last_name);
            println!("  With birth date: {}", stats.with_birth_date);
            println!("  With death date: {}", stats.with_death_date);
        }

        Commands::List { filter, json } => {
            let criteria = FilterCriteria::from(filter);
            if json {
                let fc: FeatureCollection = db.search(&criteria).into_iter().collect();
                println!("{}", serde_json::to_string_pretty(&fc)?);
            } else {
                let hits = db.search_indices(&criteria);
                if hits.is_empty() {
                    println!("No graves found matching the search criteria.");
                }
                for i in hits {
                    println!("{}", GraveSummary::new(i, &db.graves()[i]));
                }
            }
        }

        Commands::Get { id, out } => {
            let feature = db.grave(id)?;
            let json = serde_json::to_string_pretty(feature)?;
            match out {
                Some(out) => {
                    let target = if out.is_dir() {
                        out.join(download_filename(feature))
                    } else {
                        out
                    };
                    write_file(&target, &json)?;
                    println!("Wrote grave {id} to {}", target.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

async fn serve(db: Arc<GraveDb>, listen: std::net::SocketAddr) -> Result<()> {
    let app = server::router(AppState::new(db));
    let listener = TcpListener::bind(listen)
        .await
        .with_context(|| format!("bind {listen}"))?;
    info!("graves API listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("graves API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
