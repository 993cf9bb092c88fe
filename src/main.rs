mod clock;
mod config;
mod engine;
mod error;
mod game;
mod input;
mod logging;
mod render;
mod snake;
mod state;
mod term;

use std::process::exit;

use engine::GameEngine;
use error::Result;
use game::SnakeGame;
use render::TermRenderer;
use term::{TermEvents, TermManager};

fn main() {
    // The terminal is restored when `run` returns, so errors are readable.
    if let Err(e) = run() {
        eprintln!("snake: {}", e);
        exit(1);
    }
}

fn run() -> Result<()> {
    logging::init()?;

    let term = TermManager::setup()?;
    let engine = GameEngine::new(rand::thread_rng());
    let mut game = SnakeGame::new(engine, TermRenderer::new(term), TermEvents);
    game.run()
}
