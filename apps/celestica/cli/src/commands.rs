use std::fmt::Write;

use celestica::{CelesticaClient, Neighbours};
use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr, ensure};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "celestica",
    author,
    version,
    about = "Insert and search vectors on a Celestica vector service"
)]
pub struct Cli {
    /// Service address (`host:port` or `http://host:port`), overrides CELESTICA_URL
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Per-request deadline in seconds, overrides CELESTICA_TIMEOUT_SECS
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Store vectors under the given ids
    ///
    /// Each `--id` is paired with the `--vector` at the same position.
    Insert {
        /// Id of a vector (repeat once per vector)
        #[arg(long = "id", required = true)]
        ids: Vec<u32>,

        /// Comma-separated components, e.g. `1.0,2.5,-3`
        #[arg(short, long = "vector", required = true, value_parser = parse_vector)]
        vectors: Vec<Vector>,
    },

    /// Find the nearest neighbours of one or more query vectors
    Search {
        /// Comma-separated components of a query (repeat for a batch)
        #[arg(short, long = "vector", required = true, value_parser = parse_vector)]
        vectors: Vec<Vector>,

        /// Number of neighbours per query
        #[arg(short, long)]
        knbn: u32,

        /// Candidate list size explored per query
        #[arg(short, long)]
        ef: u32,
    },
}

/// One vector given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Vector(pub Vec<f32>);

/// Parse `1.0, 2,3.5` into a vector
pub fn parse_vector(s: &str) -> Result<Vector, String> {
    if s.trim().is_empty() {
        return Err("vector must have at least one component".to_string());
    }

    s.split(',')
        .map(|component| {
            let component = component.trim();
            component
                .parse::<f32>()
                .map_err(|e| format!("invalid component '{component}': {e}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Vector)
}

/// Run `command` against `client` and return what should be printed
pub async fn execute(client: &CelesticaClient, command: Command) -> Result<String> {
    match command {
        Command::Insert { ids, vectors } => {
            ensure!(
                ids.len() == vectors.len(),
                "got {} ids for {} vectors, each --vector needs one --id",
                ids.len(),
                vectors.len()
            );

            info!(count = ids.len(), "Inserting vectors");
            client
                .insert(vectors.into_iter().map(|v| v.0), ids)
                .await
                .wrap_err("Insert failed")?;

            Ok("Vector(s) inserted successfully.\n".to_string())
        }
        Command::Search { vectors, knbn, ef } => {
            info!(queries = vectors.len(), knbn, ef, "Searching");
            let results = client
                .search(vectors.into_iter().map(|v| v.0), knbn, ef)
                .await
                .wrap_err("Search failed")?;

            Ok(format_neighbours(&results))
        }
    }
}

/// Render search results, one block per query
pub fn format_neighbours(results: &[Neighbours]) -> String {
    let mut out = String::new();

    for (query, neighbours) in results.iter().enumerate() {
        if neighbours.neighbour.is_empty() {
            let _ = writeln!(out, "No neighbours found for query {}.", query + 1);
            continue;
        }

        let _ = writeln!(out, "Neighbours found for query {}:", query + 1);
        for neighbour in &neighbours.neighbour {
            let _ = writeln!(
                out,
                "ID: {}, Distance: {:.2}",
                neighbour.d_id, neighbour.distance
            );
        }
    }

    out
}
