//! Terminal Tetris runner (default binary).
//!
//! Owns the only `GameState`, feeds it key presses and a millisecond clock,
//! and draws a snapshot every loop iteration through the framebuffer renderer.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use log::{debug, error, info, trace};

use console_tetris::core::{GameSnapshot, GameState, PieceBag};
use console_tetris::input::{handle_key_event, should_quit};
use console_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use console_tetris::types::POLL_MS;

/// Falling-block puzzle game for the terminal.
#[derive(Debug, Parser)]
#[command(name = "console-tetris", version, about)]
struct Args {
    /// Seed for the piece generator; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostics to this file. Nothing is logged otherwise.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level spec (e.g. `debug`). `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info", value_name = "SPEC")]
    log_level: String,
}

/// Logging goes to a file only: stderr shares the screen with the game.
fn init_logging(args: &Args) -> Result<Option<LoggerHandle>> {
    let Some(path) = &args.log_file else {
        return Ok(None);
    };

    let handle = Logger::try_with_env_or_str(&args.log_level)?
        .log_to_file(FileSpec::try_from(path)?)
        .format_for_files(flexi_logger::detailed_format)
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;
    Ok(Some(handle))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = init_logging(&args)?;

    let mut game = match args.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::from_bag(PieceBag::from_entropy()),
    };
    info!("session start, seed {}", game.seed());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();

    match &result {
        Ok(()) => info!(
            "session end: score {} lines {} level {} game_over {}",
            game.score(),
            game.lines(),
            game.level(),
            game.game_over()
        ),
        Err(e) => error!("fatal error: {:#}", e),
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let poll = Duration::from_millis(u64::from(POLL_MS));
    let start = Instant::now();

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        // Render.
        let (w, h) = terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input. Terminal auto-repeat arrives as `Repeat` and moves like a press.
        if event::poll(poll)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        debug!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let applied = game.apply_action(action);
                        trace!("{} -> {}", action.as_str(), applied);
                    }
                }
                Event::Resize(w, h) => {
                    debug!("resize {}x{}", w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Gravity.
        let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        game.tick(now_ms);
    }
}
