//! Perft driver: counts the leaves of the starting position for every depth up to the
//! configured maximum, printing `perft(depth) = nodes` per depth.
//!
//! Configured through the environment, see `mailbox_perft::config`.

use mailbox_perft::board::leaf::LeafWriter;
use mailbox_perft::board::ledger::Ledger;
use mailbox_perft::board::perft::{perft_parallel, perft_with_sink, PerftError, PerftNodes};
use mailbox_perft::config::{ConfigError, PerftConfig};
use mailbox_perft::{logging, Board, Player};

use thiserror::Error;
use tracing::{error, info};

use std::io::{self, BufWriter};
use std::process;
use std::time::Instant;

#[derive(Error, Debug)]
enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Perft(#[from] PerftError),
    #[error("unable to write leaves: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        error!(error = %err, "perft driver failed");
        eprintln!("mailbox_perft: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), DriverError> {
    let config = PerftConfig::from_env()?;
    info!(
        max_depth = config.max_depth,
        dump_leaves = config.dump_leaves,
        threads = config.threads,
        "starting perft"
    );

    let board = Board::start_pos();
    for depth in 0..=config.max_depth {
        let start = Instant::now();
        let nodes = if config.dump_leaves {
            dump_leaves(&board, depth)?
        } else {
            perft_parallel(&board, Player::White, depth, config.threads)?
        };
        println!("perft({}) = {}", depth, nodes.nodes);
        info!(
            depth,
            nodes = nodes.nodes,
            captures = nodes.captures,
            en_passant = nodes.en_passant,
            checks = nodes.checks,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "depth finished"
        );
    }
    Ok(())
}

fn dump_leaves(board: &Board, depth: u16) -> Result<PerftNodes, DriverError> {
    let stdout = io::stdout();
    let mut writer = LeafWriter::new(BufWriter::new(stdout.lock()));
    let mut b = *board;
    let mut ledger = Ledger::with_depth(depth as usize);
    let nodes = perft_with_sink(&mut b, Player::White, &mut ledger, depth, &mut writer);
    writer.finish()?;
    Ok(nodes)
}
