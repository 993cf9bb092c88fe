use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::config::{GRID_CELLS, GRID_SIZE, START_POSITION, TICK_INTERVAL_MS};
use crate::error::{GameError, Result};
use crate::input::Intent;
use crate::snake::{Crash, MoveResult, Position, Snake, Velocity};
use crate::state::{GameState, Screen};

/// What the host should do after an intent has been handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The game's state machine. Owns the state, the tick clock and the random
/// source; performs no I/O.
pub struct GameEngine<R> {
    state: GameState,
    clock: Clock,
    rng: R,
}

impl<R: Rng> GameEngine<R> {
    pub fn new(rng: R) -> Self {
        GameEngine {
            state: GameState::new(),
            clock: Clock::new(Duration::from_millis(TICK_INTERVAL_MS)),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Polls the clock and runs one update when a tick is due. Returns
    /// whether an update ran.
    pub fn tick_if_due(&mut self, now: Instant) -> Result<bool> {
        if !self.clock.poll(now) {
            return Ok(false);
        }

        self.update()?;
        Ok(true)
    }

    /// Starts a fresh game, keeping the best score.
    pub fn reset(&mut self) -> Result<()> {
        let state = &mut self.state;
        state.snake = Snake::new(START_POSITION);
        state.score.reset_current();
        state.velocity = Velocity::ZERO;
        state.restart_selection.reset();
        state.screen = Screen::Playing;

        self.place_food()?;
        self.clock.start(Instant::now());

        info!(max_score = self.state.score.max(), "game started");
        Ok(())
    }

    /// One game step. Does nothing unless a game is in progress.
    pub fn update(&mut self) -> Result<()> {
        if self.state.screen != Screen::Playing {
            return Ok(());
        }

        if self.state.snake.head() == self.state.food {
            let food = self.state.food;
            self.state.snake.grow_at(food);
            self.state.score.increment();
            debug!(x = food.x, y = food.y, length = self.state.snake.len(), "food eaten");

            match self.place_food() {
                Ok(()) => {}
                Err(GameError::BoardFull { occupied, cells }) => {
                    warn!(occupied, cells, "board is full, ending the game");
                    self.game_over();
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }

        let velocity = self.state.velocity;
        if let MoveResult::Crashed(crash) = self.state.snake.move_step(velocity, GRID_SIZE) {
            let reason = match crash {
                Crash::Body => "ran into itself",
                Crash::Wall => "hit the wall",
            };
            info!(reason, score = self.state.score.current(), "game over");
            self.game_over();
        }

        Ok(())
    }

    /// Puts the food on a random cell not covered by the snake.
    pub fn place_food(&mut self) -> Result<()> {
        let snake = &self.state.snake;
        let mut occupied = vec![false; GRID_CELLS];
        for pos in std::iter::once(snake.head()).chain(snake.body().iter().copied()) {
            if pos.in_bounds(GRID_SIZE) {
                occupied[pos.index(GRID_SIZE)] = true;
            }
        }

        let taken = occupied.iter().filter(|cell| **cell).count();
        if taken >= GRID_CELLS {
            return Err(GameError::BoardFull { occupied: taken, cells: GRID_CELLS });
        }

        let food = loop {
            let candidate = Position::new(
                self.rng.gen_range(0..GRID_SIZE),
                self.rng.gen_range(0..GRID_SIZE),
            );
            if !self.state.snake.occupies(candidate) {
                break candidate;
            }
        };

        self.state.food = food;
        Ok(())
    }

    pub fn handle(&mut self, intent: Intent) -> Result<Flow> {
        match self.state.screen {
            Screen::Menu => match intent {
                Intent::NavigatePrev => self.state.menu_selection.prev(),
                Intent::NavigateNext => self.state.menu_selection.next(),
                Intent::ConfirmSelect => {
                    if self.state.menu_selection.index() != 0 {
                        info!("exit selected from the menu");
                        return Ok(Flow::Exit);
                    }
                    self.reset()?;
                }
                _ => {}
            },
            Screen::GameOver => match intent {
                Intent::NavigatePrev => self.state.restart_selection.prev(),
                Intent::NavigateNext => self.state.restart_selection.next(),
                Intent::ConfirmSelect => {
                    if self.state.restart_selection.index() != 0 {
                        info!(max_score = self.state.score.max(), "declined restart");
                        return Ok(Flow::Exit);
                    }
                    self.reset()?;
                }
                _ => {}
            },
            Screen::Playing => {
                if let Some(direction) = intent.direction() {
                    let requested = Velocity::from_direction(direction);
                    if !requested.is_reverse_of(self.state.velocity) {
                        self.state.velocity = requested;
                    }
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn game_over(&mut self) {
        self.state.screen = Screen::GameOver;
        self.clock.stop();
    }
}

#[cfg(test)]
impl<R: Rng> GameEngine<R> {
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
