use std::time::{Duration, Instant};

use crossterm::event::Event;
use rand::Rng;
use tracing::{debug, info};

use crate::engine::{Flow, GameEngine};
use crate::error::Result;
use crate::input::{EventSource, InputRouter, is_ctrl_c};
use crate::render::Renderer;

/// How long to wait for a key while no game is running.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Runs the game on a single thread: key events and clock ticks are taken in
/// turn, so the engine is never touched from two places at once.
pub struct SnakeGame<R, D, E> {
    engine: GameEngine<R>,
    renderer: D,
    events: E,
    frame: u64,
}

impl<R: Rng, D: Renderer, E: EventSource> SnakeGame<R, D, E> {
    pub fn new(engine: GameEngine<R>, renderer: D, events: E) -> Self {
        SnakeGame { engine, renderer, events, frame: 0 }
    }

    /// Returns once the player picks "Exit" or "NO", or presses Ctrl+C.
    pub fn run(&mut self) -> Result<()> {
        self.redraw()?;

        loop {
            let timeout = self.engine.clock()
                .time_until_tick(Instant::now())
                .unwrap_or(IDLE_POLL);

            if let Some(event) = self.events.next_event(timeout)? {
                match event {
                    Event::Key(ev) if is_ctrl_c(&ev) => {
                        info!("interrupted, closing");
                        return Ok(());
                    }
                    Event::Key(ev) => {
                        let screen = self.engine.state().screen();
                        if let Some(intent) = InputRouter::route(&ev, screen) {
                            debug!(?intent, ?screen, "input");
                            if self.engine.handle(intent)? == Flow::Exit {
                                return Ok(());
                            }
                            self.redraw()?;
                        }
                    }
                    Event::Resize(..) => {
                        self.renderer.invalidate();
                        self.redraw()?;
                    }
                    _ => {}
                }
            }

            if self.engine.tick_if_due(Instant::now())? {
                self.frame += 1;
                self.redraw()?;
            }
        }
    }

    fn redraw(&mut self) -> Result<()> {
        self.renderer.draw(self.engine.state(), self.frame)
    }
}
