//! `arbor check` - spanning-tree verdict for a pair of graph files

use std::path::Path;

use arbor_core::error::Result;
use arbor_core::format::OutputFormat;
use arbor_core::io;

use crate::cli::Cli;

pub fn run(cli: &Cli, tree_path: &Path, graph_path: &Path) -> Result<()> {
    let tree = io::read_tree(tree_path)?;
    let graph = io::read_graph(graph_path)?;
    let spanning = tree.is_spanning_tree_of(&graph);

    match cli.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "tree": tree_path.display().to_string(),
                "graph": graph_path.display().to_string(),
                "is_tree": tree.is_tree(),
                "spanning_tree": spanning,
            })
        ),
        OutputFormat::Human => {
            let verdict = if spanning { "a spanning tree" } else { "not a spanning tree" };
            println!(
                "{} is {} of {}",
                tree_path.display(),
                verdict,
                graph_path.display()
            );
        }
    }

    Ok(())
}
