//! Draws the changed leaf lines of a diff between two leaf dumps.

use mailbox_perft::logging;
use mailbox_perft::tools::{diff, ToolError};

use tracing::{error, info};

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    logging::init();
    let mut args = env::args();
    let name = args.next().unwrap_or_else(|| "show_diff".to_string());
    let path = match args.next() {
        Some(path) => path,
        None => {
            println!("Usage: {} <diff file>", name);
            return;
        }
    };
    if let Err(err) = run(&path) {
        error!(error = %err, path = %path, "unable to render diff");
        eprintln!("{}: {}", name, err);
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), ToolError> {
    let input = BufReader::new(File::open(path)?);
    let stdout = io::stdout();
    let boards = diff::render(input, stdout.lock())?;
    info!(boards, "diff rendered");
    Ok(())
}
