use crate::config::{INITIAL_FOOD, START_POSITION};
use crate::snake::{Position, Snake, Velocity};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    current: u32,
    max: u32,
}

impl Score {
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Best score of this process. Never decreases.
    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn increment(&mut self) {
        self.current += 1;
        self.max = self.max.max(self.current);
    }

    pub fn reset_current(&mut self) {
        self.current = 0;
    }
}

/// A two-entry option list with wraparound selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection(usize);

impl Selection {
    const LEN: usize = 2;

    pub fn index(self) -> usize {
        self.0
    }

    pub fn prev(&mut self) {
        self.0 = (self.0 + Self::LEN - 1) % Self::LEN;
    }

    pub fn next(&mut self) {
        self.0 = (self.0 + 1) % Self::LEN;
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Everything that changes while the program runs. The engine is the only
/// writer; renderers get a shared reference.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) screen: Screen,
    pub(crate) snake: Snake,
    pub(crate) food: Position,
    pub(crate) velocity: Velocity,
    pub(crate) score: Score,
    pub(crate) menu_selection: Selection,
    pub(crate) restart_selection: Selection,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            screen: Screen::Menu,
            snake: Snake::new(START_POSITION),
            food: INITIAL_FOOD,
            velocity: Velocity::ZERO,
            score: Score::default(),
            menu_selection: Selection::default(),
            restart_selection: Selection::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn menu_selection(&self) -> usize {
        self.menu_selection.index()
    }

    pub fn restart_selection(&self) -> usize {
        self.restart_selection.index()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_starts_on_the_menu() {
        let state = GameState::new();

        assert_eq!(state.screen(), Screen::Menu);
        assert_eq!(state.snake().head(), Position::new(5, 5));
        assert!(state.snake().body().is_empty());
        assert_eq!(state.velocity(), Velocity::ZERO);
        assert_eq!(state.score(), Score::default());
        assert_eq!(state.menu_selection(), 0);
        assert_eq!(state.restart_selection(), 0);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut sel = Selection::default();
        sel.prev();
        assert_eq!(sel.index(), 1);
        sel.next();
        assert_eq!(sel.index(), 0);
        sel.next();
        sel.next();
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn max_tracks_the_best_current() {
        let mut score = Score::default();
        score.increment();
        score.increment();
        assert_eq!((score.current(), score.max()), (2, 2));

        score.reset_current();
        score.increment();
        assert_eq!((score.current(), score.max()), (1, 2));
    }
}
