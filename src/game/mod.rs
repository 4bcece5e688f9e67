//! Core Connect Four game logic: the board engine, pieces, and the turn-taking
//! session built on top of it.

mod board;
mod piece;
mod session;

pub use board::{Board, Cell, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use piece::Piece;
pub use session::{GameSession, Turn};
