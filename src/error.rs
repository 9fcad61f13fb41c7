//! Error types for the Gomoku engine and session

use crate::core::{Cell, Position};
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("position {position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: usize },

    #[error("position {position} is already occupied by {occupant:?}")]
    CellOccupied { position: Position, occupant: Cell },

    #[error("cannot place {0:?}: not a player stone")]
    NotAPlayer(Cell),

    #[error("{player} attempted an illegal move at {position}")]
    IllegalMove { player: &'static str, position: Position },

    #[error("search worker for {player} stopped without a result")]
    SearchFailed { player: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl From<std::io::Error> for GameError {
    fn from(source: std::io::Error) -> Self {
        GameError::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
