//! Headless autopilot run.
//!
//! Plays a seeded game with the move search at the controls and prints how
//! far it got. Useful for comparing heuristic changes.

use anyhow::{ensure, Result};
use clap::Parser;
use tracing::info;

use tetris_hint::cli::{self, GameArgs};
use tetris_hint::core::Board;
use tetris_hint::engine::Session;
use tetris_hint::types::{ModeKind, Seat};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,

    /// Stop after this many pieces
    #[arg(short = 'n', long, default_value_t = 500)]
    pieces: u32,

    /// Print the final board
    #[arg(long)]
    show_board: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_stderr_logging()?;

    let mut settings = cli.game.settings();
    ensure!(
        settings.mode != ModeKind::Versus,
        "autoplay drives a single board; use classic or hinted mode"
    );
    settings.autopilot = true;

    let mut session = Session::new(settings);
    while !session.game_over() && session.pieces_spawned() <= cli.pieces {
        session.tick();
    }

    let pieces = session.pieces_spawned().min(cli.pieces);
    info!(pieces, lines = session.total_lines(), "autoplay finished");
    println!(
        "seed {}: {} lines in {} pieces (level {}, {})",
        settings.seed,
        session.total_lines(),
        pieces,
        session.level(),
        if session.game_over() { "game over" } else { "piece limit" },
    );

    if cli.show_board {
        if let Some(player) = session.player(Seat::Main) {
            print!("{}", board_text(player.board()));
        }
    }
    Ok(())
}

fn board_text(board: &Board) -> String {
    let mut out = String::new();
    for y in 0..board.height() as usize {
        out.push('|');
        for cell in board.row(y) {
            out.push_str(cell.map_or(".", |kind| kind.as_str()));
        }
        out.push_str("|\n");
    }
    out
}
