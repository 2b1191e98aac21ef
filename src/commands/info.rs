//! `arbor info` - totals and connectivity for a graph file

use std::path::Path;

use arbor_core::error::Result;
use arbor_core::format::OutputFormat;
use arbor_core::io;

use crate::cli::Cli;

pub fn run(cli: &Cli, file: &Path) -> Result<()> {
    let graph = io::read_graph(file)?;
    let connected = graph.is_connected();

    match cli.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
                "total_weight": graph.total_weight(),
                "connected": connected,
            })
        ),
        OutputFormat::Human => {
            println!("vertices:     {}", graph.vertex_count());
            println!("edges:        {}", graph.edge_count());
            println!("total weight: {}", graph.total_weight());
            println!("connected:    {}", if connected { "yes" } else { "no" });
        }
    }

    Ok(())
}
