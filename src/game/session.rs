use super::{Board, Piece};
use crate::error::MoveError;
use tracing::{debug, info};

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub piece: Piece,
    /// 0-based row where the piece landed
    pub row: usize,
    /// 0-based column the piece was dropped into
    pub column: usize,
    pub won: bool,
}

/// One game: the board, whose turn it is, and the winner once there is one.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    current_piece: Piece,
    winner: Option<Piece>,
}

impl GameSession {
    /// Start a game on an empty board. Piece 1 moves first.
    pub fn new(rows: usize, columns: usize) -> Self {
        info!(rows, columns, "starting new game");
        GameSession {
            board: Board::new(rows, columns),
            current_piece: Piece::One,
            winner: None,
        }
    }

    /// Piece that moves next
    pub fn current_piece(&self) -> Piece {
        self.current_piece
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn winner(&self) -> Option<Piece> {
        self.winner
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Play the current piece into a 1-based column.
    ///
    /// Rejected moves leave the board untouched and do not pass the turn.
    pub fn play(&mut self, column: i64) -> Result<Turn, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let columns = self.board.columns();
        if column < 1 || column > columns as i64 {
            return Err(MoveError::InvalidColumnIndex {
                column: column.saturating_sub(1),
                columns,
            });
        }
        let col = (column - 1) as usize;

        if !self.board.is_column_valid(col) {
            return Err(MoveError::ColumnFull { column: col });
        }

        let piece = self.current_piece;
        let row = self.board.drop_piece(col, piece)?;
        debug!(piece = piece.value(), row, column = col, "piece dropped");

        let won = self.board.has_winning_move(piece);
        if won {
            info!(piece = piece.value(), "game won");
            self.winner = Some(piece);
        } else {
            self.current_piece = piece.other();
        }

        Ok(Turn {
            piece,
            row,
            column: col,
            won,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        let board = Board::default();
        Self::new(board.rows(), board.columns())
    }
}
