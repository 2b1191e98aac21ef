//! Command dispatch logic for arbor

use arbor_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Gen {
            seed,
            vertices,
            density,
            max_weight,
            output,
        } => commands::gen::run(cli, *seed, *vertices, *density, *max_weight, output.as_deref()),

        Commands::Info { file } => commands::info::run(cli, file),

        Commands::Mst { file, output } => commands::mst::run(cli, file, output.as_deref()),

        Commands::Check { tree, graph } => commands::check::run(cli, tree, graph),
    }
}
