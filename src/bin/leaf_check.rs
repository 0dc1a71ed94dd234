//! Echoes malformed `MOVE(` lines of a move dump, once per failed check.

use mailbox_perft::logging;
use mailbox_perft::tools::{validator, ToolError};

use tracing::{error, info};

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    logging::init();
    let mut args = env::args();
    let name = args.next().unwrap_or_else(|| "leaf_check".to_string());
    let path = match args.next() {
        Some(path) => path,
        None => {
            println!("Usage: {} <output file>", name);
            return;
        }
    };
    if let Err(err) = run(&path) {
        error!(error = %err, path = %path, "validation failed");
        eprintln!("{}: {}", name, err);
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), ToolError> {
    let input = BufReader::new(File::open(path)?);
    let stdout = io::stdout();
    let flagged = validator::check_lines(input, stdout.lock())?;
    info!(flagged, "validation finished");
    Ok(())
}
