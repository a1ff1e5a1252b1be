//! Terminal front end for Shrink Ray.

mod repl;

use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "shrinkray",
    about = "Shrink Ray: a tiny text adventure in a very big house",
    version
)]
struct Cli {
    /// Directory containing the room .json files
    #[arg(short, long, default_value = "rooms")]
    rooms: PathBuf,

    /// Directory saved games are written to and loaded from
    #[arg(short, long, default_value = ".")]
    saves: PathBuf,
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = repl::run(&cli.rooms, &cli.saves) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
