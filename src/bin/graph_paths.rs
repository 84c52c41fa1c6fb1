//! Command-line front end: shortest-path tables, edge queries and random
//! connectivity graphs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graph_paths::graph::generators::{generate_random_connected, generate_random_connected_seeded};
use graph_paths::io::{read_graph, read_queries};
use graph_paths::report::{format_degree_information, format_paths, QueryReport};
use log::{info, warn};
use std::path::PathBuf;

/// Shortest paths over directed, non-negatively weighted graphs.
#[derive(Parser)]
#[command(name = "graph_paths")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shortest path and cost from a start vertex to every vertex
    Paths {
        /// Graph file: vertex count, then `origin target weight ...` lines
        graph: PathBuf,

        /// Identity of the start vertex
        start: usize,
    },

    /// Answer direct-edge queries against a graph
    Query {
        /// Graph file: vertex count, then `origin target weight ...` lines
        graph: PathBuf,

        /// Query file: one `origin target` pair per line
        queries: PathBuf,
    },

    /// Join random vertex pairs until the graph is connected, then print degree statistics
    Connect {
        /// Number of vertices
        vertices: usize,

        /// Seed for a reproducible graph
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Paths { graph, start } => {
            let mut graph = read_graph(&graph)
                .with_context(|| format!("failed to load graph from {}", graph.display()))?;
            info!("loaded graph with {} vertices", graph.vertices().len());

            let entries = graph.dijkstra(start)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{}", format_paths(&entries));
            }
        }

        Commands::Query { graph, queries } => {
            let graph = read_graph(&graph)
                .with_context(|| format!("failed to load graph from {}", graph.display()))?;
            let queries = read_queries(&queries)
                .with_context(|| format!("failed to load queries from {}", queries.display()))?;

            let mut reports = Vec::with_capacity(queries.len());
            for (origin, target) in queries {
                match QueryReport::evaluate(&graph, origin, target) {
                    Ok(report) => reports.push(report),
                    Err(err) => warn!("skipping query {} {}: {}", origin, target, err),
                }
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{}", report);
                }
            }
        }

        Commands::Connect { vertices, seed } => {
            let graph = match seed {
                Some(seed) => generate_random_connected_seeded(vertices, seed)?,
                None => generate_random_connected(vertices, &mut rand::thread_rng())?,
            };

            let degrees = graph.degree_information();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&degrees)?);
            } else {
                println!("{}", format_degree_information(degrees.as_ref()));
            }
        }
    }

    Ok(())
}
