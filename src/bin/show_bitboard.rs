//! Draws a bitboard integer as an 8x8 grid.

use mailbox_perft::logging;
use mailbox_perft::tools::bitboard;

use tracing::error;

use std::env;
use std::process;

fn main() {
    logging::init();
    let mut args = env::args();
    let name = args.next().unwrap_or_else(|| "show_bitboard".to_string());
    let arg = match args.next() {
        Some(arg) => arg,
        None => {
            println!("Usage: {} <bitboard>", name);
            return;
        }
    };
    match bitboard::describe_arg(&arg) {
        Ok(text) => print!("{}", text),
        Err(err) => {
            error!(error = %err, "unable to read bitboard");
            eprintln!("{}: {}", name, err);
            process::exit(1);
        }
    }
}
