//! `arbor mst` - minimum spanning tree of a graph file

use std::path::Path;

use arbor_core::error::{ArborError, Result};
use arbor_core::format::OutputFormat;
use arbor_core::graph::minimum_spanning_tree;
use arbor_core::io;

use crate::cli::Cli;

pub fn run(cli: &Cli, file: &Path, output: Option<&Path>) -> Result<()> {
    let graph = io::read_graph(file)?;
    let tree = minimum_spanning_tree(&graph).ok_or(ArborError::NoSpanningTree)?;

    if let Some(path) = output {
        io::write_graph(path, tree.as_graph())?;
    }

    match cli.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "vertices": tree.vertex_count(),
                "total_weight": tree.total_weight(),
                "edges": tree.as_graph().edges(),
            })
        ),
        OutputFormat::Human => {
            for edge in tree.as_graph().edges() {
                println!("{} -- {}  (weight {})", edge.a, edge.b, edge.weight);
            }
            if !cli.quiet {
                println!("total weight: {}", tree.total_weight());
            }
        }
    }

    Ok(())
}
