//! `arbor gen` - generate a random graph

use std::path::Path;

use arbor_core::error::Result;
use arbor_core::format::OutputFormat;
use arbor_core::io;
use arbor_core::random::random_graph;

use crate::cli::Cli;

pub fn run(
    cli: &Cli,
    seed: u64,
    vertices: usize,
    density: u8,
    max_weight: u64,
    output: Option<&Path>,
) -> Result<()> {
    let graph = random_graph(seed, vertices, density, max_weight)?;

    match output {
        Some(path) => {
            io::write_graph(path, &graph)?;
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({
                        "vertices": graph.vertex_count(),
                        "edges": graph.edge_count(),
                        "total_weight": graph.total_weight(),
                        "path": path.display().to_string(),
                    })
                ),
                OutputFormat::Human => {
                    if !cli.quiet {
                        println!(
                            "wrote {} vertices, {} edges (total weight {}) to {}",
                            graph.vertex_count(),
                            graph.edge_count(),
                            graph.total_weight(),
                            path.display()
                        );
                    }
                }
            }
        }
        None => match cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({
                    "vertices": graph.vertex_count(),
                    "edges": graph.edge_count(),
                    "total_weight": graph.total_weight(),
                    "matrix": graph.adjacency_snapshot(),
                })
            ),
            // Matrix format on stdout, pipeable into the other commands
            OutputFormat::Human => print!("{}", io::serialize_graph(&graph)),
        },
    }

    Ok(())
}
