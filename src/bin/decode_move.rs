//! Decodes a packed move integer.

use mailbox_perft::logging;
use mailbox_perft::tools::packed;

use tracing::error;

use std::env;
use std::process;

fn main() {
    logging::init();
    let mut args = env::args();
    let name = args.next().unwrap_or_else(|| "decode_move".to_string());
    let arg = match args.next() {
        Some(arg) => arg,
        None => {
            println!("Usage: {} <move>", name);
            return;
        }
    };
    match packed::describe_arg(&arg) {
        Ok(text) => print!("{}", text),
        Err(err) => {
            error!(error = %err, "unable to decode move");
            eprintln!("{}: {}", name, err);
            process::exit(1);
        }
    }
}
