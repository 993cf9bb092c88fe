//! Drawing. Screens are composed into an off-screen [`Canvas`] and only the
//! cells that changed since the last frame are sent to the terminal.

use crossterm::style::Color;

use crate::config::{GRID_SIZE, MENU_OPTIONS, MENU_TITLE, RESTART_OPTIONS};
use crate::error::Result;
use crate::snake::{Direction, Position, Velocity};
use crate::state::{GameState, Screen};
use crate::term::TermManager;

/// Terminal columns per tile. Character cells are about twice as tall as
/// they are wide, so a tile spans two columns and one row.
pub const TILE_COLS: u16 = 2;
pub const TILE_ROWS: u16 = 1;

/// Board size in terminal cells, border included.
pub const BOARD_COLS: u16 = GRID_SIZE as u16 * TILE_COLS + 2;
pub const BOARD_ROWS: u16 = GRID_SIZE as u16 * TILE_ROWS + 2;

const BODY_CHAR: char = '█';
const BORDER_COLOR: Color = Color::DarkGrey;
const TEXT_COLOR: Color = Color::White;
const SELECTED_COLOR: Color = Color::Yellow;
const SNAKE_COLOR: Color = Color::Green;
const HEAD_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;

/// Anything that can present the game. Gets read-only access to the state
/// and a frame counter for animation.
pub trait Renderer {
    fn draw(&mut self, state: &GameState, frame: u64) -> Result<()>;

    /// Called when the output surface changed size; the next draw repaints
    /// everything.
    fn invalidate(&mut self) {}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Cell {
    const BLANK: Cell = Cell { ch: ' ', color: Color::Reset };
}

#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Canvas { width, height, cells: vec![Cell::BLANK; width as usize * height as usize] }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.width as usize * y as usize + x as usize])
        } else {
            None
        }
    }

    /// Writes outside the canvas are clipped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, color: Color) {
        if x < self.width && y < self.height {
            self.cells[self.width as usize * y as usize + x as usize] = Cell { ch, color };
        }
    }

    pub fn text(&mut self, x: u16, y: u16, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x.saturating_add(i as u16), y, ch, color);
        }
    }
}

/// Where the board sits on the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    left: u16,
    top: u16,
}

impl Viewport {
    /// Centers the board, or returns `None` when the canvas cannot hold it.
    pub fn centered(width: u16, height: u16) -> Option<Self> {
        if width < BOARD_COLS || height < BOARD_ROWS {
            return None;
        }

        Some(Viewport { left: (width - BOARD_COLS) / 2, top: (height - BOARD_ROWS) / 2 })
    }

    /// Top-left terminal cell of a tile: grid coordinate times tile size,
    /// offset by the board origin and its border.
    pub fn tile_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.left + 1 + pos.x as u16 * TILE_COLS,
            self.top + 1 + pos.y as u16 * TILE_ROWS,
        )
    }

    fn center_x(&self, text: &str) -> u16 {
        let len = text.chars().count() as u16;
        self.left + BOARD_COLS.saturating_sub(len) / 2
    }
}

/// Composes the whole frame for `state` into `canvas`.
pub fn compose(canvas: &mut Canvas, state: &GameState, frame: u64) {
    let view = match Viewport::centered(canvas.width(), canvas.height()) {
        Some(view) => view,
        None => return compose_too_small(canvas),
    };

    draw_border(canvas, view);

    match state.screen() {
        Screen::Menu => compose_menu(canvas, view, state),
        Screen::Playing => compose_board(canvas, view, state, frame),
        Screen::GameOver => compose_game_over(canvas, view, state),
    }
}

fn compose_too_small(canvas: &mut Canvas) {
    let need = format!("need {}x{}", BOARD_COLS, BOARD_ROWS);
    let lines: [&str; 2] = ["Terminal too small", &need];
    let top = (canvas.height() / 2).saturating_sub(1);

    for (i, line) in lines.iter().enumerate() {
        let x = canvas.width().saturating_sub(line.chars().count() as u16) / 2;
        canvas.text(x, top + i as u16, line, TEXT_COLOR);
    }
}

fn draw_border(canvas: &mut Canvas, view: Viewport) {
    let end_x = view.left + BOARD_COLS - 1;
    let end_y = view.top + BOARD_ROWS - 1;

    for x in view.left..=end_x {
        let ch = if x == view.left || x == end_x {'+'} else {'-'};
        canvas.put(x, view.top, ch, BORDER_COLOR);
        canvas.put(x, end_y, ch, BORDER_COLOR);
    }

    for y in view.top + 1..end_y {
        canvas.put(view.left, y, '|', BORDER_COLOR);
        canvas.put(end_x, y, '|', BORDER_COLOR);
    }
}

fn option_label(opt: &str, selected: bool) -> String {
    if selected { format!("> {} <", opt) } else { format!("  {}  ", opt) }
}

/// Draws `options` centered on row `y`, highlighting the selected one.
fn option_row(canvas: &mut Canvas, view: Viewport, y: u16, options: &[&str], selected: usize) {
    let labels: Vec<String> = options.iter().enumerate()
        .map(|(i, opt)| option_label(opt, i == selected))
        .collect();
    let line = labels.join("  ");

    let mut x = view.center_x(&line);
    for (i, label) in labels.iter().enumerate() {
        let color = if i == selected {SELECTED_COLOR} else {TEXT_COLOR};
        canvas.text(x, y, label, color);
        x += label.chars().count() as u16 + 2;
    }
}

fn compose_menu(canvas: &mut Canvas, view: Viewport, state: &GameState) {
    let title_y = view.top + BOARD_ROWS / 2 - 4;
    canvas.text(view.center_x(MENU_TITLE), title_y, MENU_TITLE, TEXT_COLOR);

    // One option per row, matching the up/down navigation.
    for (i, opt) in MENU_OPTIONS.iter().enumerate() {
        let selected = i == state.menu_selection();
        let label = option_label(opt, selected);
        let y = view.top + BOARD_ROWS / 2 + 2 * i as u16;
        let color = if selected {SELECTED_COLOR} else {TEXT_COLOR};
        canvas.text(view.center_x(&label), y, &label, color);
    }
}

fn compose_board(canvas: &mut Canvas, view: Viewport, state: &GameState, frame: u64) {
    let food_glyph = if frame % 10 < 5 {['(', ')']} else {['{', '}']};
    draw_tile(canvas, view, state.food(), food_glyph, FOOD_COLOR);

    for pos in state.snake().body() {
        draw_tile(canvas, view, *pos, [BODY_CHAR, BODY_CHAR], SNAKE_COLOR);
    }

    let head = head_char(state.velocity());
    draw_tile(canvas, view, state.snake().head(), [head, head], HEAD_COLOR);

    let score = format!(" Score: {} ", state.score().current());
    canvas.text(view.left + 2, view.top, &score, TEXT_COLOR);
}

fn compose_game_over(canvas: &mut Canvas, view: Viewport, state: &GameState) {
    let mid = view.top + BOARD_ROWS / 2;
    let lines = [
        "Game Over".to_string(),
        format!("Score: {}", state.score().current()),
        format!("Max Score: {}", state.score().max()),
    ];

    for (i, line) in lines.iter().enumerate() {
        canvas.text(view.center_x(line), mid - 4 + 2 * i as u16, line, TEXT_COLOR);
    }

    option_row(canvas, view, mid + 3, &RESTART_OPTIONS, state.restart_selection());
}

fn draw_tile(canvas: &mut Canvas, view: Viewport, pos: Position, glyph: [char; 2], color: Color) {
    if !pos.in_bounds(GRID_SIZE) {
        return;
    }

    let (x, y) = view.tile_origin(pos);
    canvas.put(x, y, glyph[0], color);
    canvas.put(x + 1, y, glyph[1], color);
}

fn head_char(velocity: Velocity) -> char {
    match velocity.direction() {
        Some(Direction::Up) => '^',
        Some(Direction::Down) => 'v',
        Some(Direction::Left) => '<',
        Some(Direction::Right) => '>',
        None => '@',
    }
}

/// Renders to the terminal owned by a [`TermManager`].
pub struct TermRenderer {
    term: TermManager,
    shown: Option<Canvas>,
}

impl TermRenderer {
    pub fn new(term: TermManager) -> Self {
        TermRenderer { term, shown: None }
    }
}

impl Renderer for TermRenderer {
    fn draw(&mut self, state: &GameState, frame: u64) -> Result<()> {
        let (width, height) = self.term.size()?;
        let mut canvas = Canvas::new(width, height);
        compose(&mut canvas, state, frame);

        let previous = match self.shown.take() {
            Some(prev) if prev.width() == width && prev.height() == height => Some(prev),
            _ => {
                self.term.clear()?;
                None
            }
        };

        for y in 0..height {
            for x in 0..width {
                let cell = canvas.get(x, y).unwrap_or(Cell::BLANK);
                let old = match &previous {
                    Some(prev) => prev.get(x, y),
                    None => Some(Cell::BLANK),
                };
                if old != Some(cell) {
                    self.term.print_at((x, y), cell.ch, cell.color)?;
                }
            }
        }

        self.term.flush()?;
        self.shown = Some(canvas);
        Ok(())
    }

    fn invalidate(&mut self) {
        self.shown = None;
    }
}

#[cfg(test)]
impl Canvas {
    fn row(&self, y: u16) -> String {
        (0..self.width).filter_map(|x| self.get(x, y)).map(|c| c.ch).collect()
    }
}
