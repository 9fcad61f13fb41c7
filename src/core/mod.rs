pub mod board;
pub mod types;

pub use board::Board;
pub use types::{Cell, Position, MAX_BOARD_SIZE, MIN_BOARD_SIZE, WIN_CONDITION};
