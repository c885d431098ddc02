//! CLI frontend for the XYMO text adventure.

mod commands;
mod console;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "xymo",
    about = "XYMO: a remote rover console text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session reading commands from stdin
    Play {
        /// World file to load (default: the bundled world)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Skip the opening banner
        #[arg(long)]
        no_intro: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Validate a world file
    Check {
        /// World file to validate
        file: PathBuf,
    },

    /// List locations, connections and items of a world
    List {
        /// World file to load (default: the bundled world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Write the bundled world as JSON, as a starting point for new worlds
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            world,
            no_intro,
            no_color,
        } => commands::play::run(world.as_deref(), !no_intro, !no_color),
        Commands::Check { file } => commands::check::run(&file),
        Commands::List { world } => commands::list::run(world.as_deref()),
        Commands::Export { output } => commands::export::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
