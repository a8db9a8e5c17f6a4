//! Terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the term
//! crate. One engine frame runs every `TICK_MS`.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tetris_hint::cli::{self, GameArgs};
use tetris_hint::engine::Session;
use tetris_hint::input::{map_key, should_quit};
use tetris_hint::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_hint::types::TICK_MS;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = cli::init_file_logging()?;
    info!(log = %cli::log_path().display(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Session::new(cli.game.settings()));

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Repeats and releases are ignored; one press is one move.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(lines = session.total_lines(), "quit");
                        return Ok(());
                    }
                    if let Some((seat, action)) = map_key(key) {
                        session.apply(seat, action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
