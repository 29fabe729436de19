mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::expand::ExpandArgs;

#[derive(Parser)]
#[command(name = "recal")]
#[command(about = "Expand repeating calendar events and inspect their series")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a repeat rule into concrete dated event instances
    Expand(ExpandArgs),

    /// List all instances in the series an event belongs to
    Series {
        /// Instance or base event id
        id: String,

        /// Events JSON file ({"events": [...]}, the store's export shape)
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Expand(args) => commands::expand::run(args),
        Commands::Series { id, file } => commands::series::run(&id, &file),
    }
}
