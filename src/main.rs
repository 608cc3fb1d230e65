use clap::Parser;
use organizer::cli::{Args, run_cli};

fn main() {
    let args = Args::parse();

    if let Err(e) = run_cli(args) {
        eprintln!("Error: {}", e);
    }
}
