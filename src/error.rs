use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no free cell left for food ({occupied} of {cells} cells occupied)")]
    BoardFull { occupied: usize, cells: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
