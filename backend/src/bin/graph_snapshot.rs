//! Print one social graph query result as JSON.
//!
//! Store settings come from the environment (`SIX_DEGREE_*`); the query is
//! chosen on the command line.
//!
//! # Examples
//! ```sh
//! SIX_DEGREE_LATENCY_MS=0 cargo run --bin graph-snapshot -- graph --include-pending
//! cargo run --bin graph-snapshot -- recommendations --max-degrees 3 --city Taipei
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use serde::Serialize;
use six_degree_backend::domain::RecommendationFilter;
use six_degree_backend::{SocialGraphApi, StoreSettings};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `graph-snapshot` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "graph-snapshot",
    about = "Query the in-memory social graph and print the result as JSON",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    query: Query,
}

#[derive(Debug, Clone, Subcommand)]
enum Query {
    /// Current user's full profile.
    Me,
    /// Current user's connections, newest invitation first.
    Connections,
    /// Seeded recommendations within a degree limit.
    Recommendations {
        /// Largest degree to include.
        #[arg(long = "max-degrees", value_name = "n", default_value_t = 3)]
        max_degrees: u32,
        /// Only include recommendations from this city.
        #[arg(long, value_name = "city")]
        city: Option<String>,
    },
    /// Roster and relationship edges.
    Graph {
        /// Include pending requests.
        #[arg(long = "include-pending")]
        include_pending: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let settings = StoreSettings::load_from_iter([OsString::from("graph-snapshot")])
        .map_err(|err| eyre!("failed to load store settings: {err}"))?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build Tokio runtime")?;
    let output = runtime.block_on(run(&settings, args.query))?;
    println!("{output}");
    Ok(())
}

async fn run(settings: &StoreSettings, query: Query) -> Result<String> {
    let store = settings
        .build_store()
        .wrap_err("failed to build social graph store")?;
    let api = SocialGraphApi::in_memory(store);

    match query {
        Query::Me => to_json(&api.profile.me().await?),
        Query::Connections => to_json(&api.graph.connections().await?),
        Query::Recommendations { max_degrees, city } => {
            let filter = RecommendationFilter { max_degrees, city };
            to_json(&api.graph.recommendations(&filter).await?)
        }
        Query::Graph { include_pending } => to_json(&api.graph.graph(include_pending).await?),
    }
}

fn to_json(value: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).wrap_err("failed to serialise query result")
}
