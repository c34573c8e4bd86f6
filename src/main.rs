//! Terminal runner (default binary).
//!
//! Owns the one `GameState` of the process and serializes everything into it:
//! key presses become intents, and the fixed-step loop feeds elapsed time to
//! gravity. Rendering reads a snapshot after each step.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use pocket_tetris::input::{handle_key_event, should_quit};
use pocket_tetris::session::{GameSnapshot, GameState};
use pocket_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use pocket_tetris::types::TICK_MS;

/// pocket-tetris - falling-block puzzle in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file (stdout is the game screen)
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Loop step in milliseconds
    #[arg(short, long, default_value_t = TICK_MS, value_parser = clap::value_parser!(u32).range(1..=1000))]
    tick_ms: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, tick_ms = args.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, args.tick_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!("exited with error: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, seed: u64, tick_ms: u32) -> Result<()> {
    let mut game_state = GameState::new(seed);

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time so gravity keeps pace under load.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            if let Some(outcome) = game_state.tick(elapsed_ms) {
                if outcome.game_over {
                    tracing::info!(score = game_state.score(), "waiting for restart");
                }
            }
        }
    }
}
