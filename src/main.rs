//! Terminal 2048 runner (default binary).
//!
//! Input is event-driven: the loop blocks on the next terminal event, applies
//! at most one action, and redraws only when the session changed.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::config::{Cli, GameConfig};
use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env().with_cli(Cli::parse());
    config.init_logging()?;

    let seed = config.resolve_seed();
    info!("starting with seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            term.draw(view.render(&game.snapshot(), Viewport::new(w, h)))?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(
                        "quit: episode {}, {} moves, score {}",
                        game.episode_id(),
                        game.moves(),
                        game.score()
                    );
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    dirty = game.apply_action(action);
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
