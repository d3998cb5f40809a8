//! mdtut CLI: markdown tutorials as trees, navs and scripts.
//!
//! Loads a directory of markdown lessons and either dumps the tree, renders
//! its left nav, or extracts its labeled code blocks as a shell script.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
