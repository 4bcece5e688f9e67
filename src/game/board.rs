use super::Piece;
use crate::error::MoveError;

/// Default grid height
pub const DEFAULT_ROWS: usize = 6;
/// Default grid width
pub const DEFAULT_COLUMNS: usize = 7;

/// Number of same-piece cells in a line that wins the game
const WIN_LENGTH: isize = 4;

/// Horizontal, vertical, and the two diagonals as (row, column) steps
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    /// Numeric cell value: 0 for empty, otherwise the piece id
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(piece) => piece.value(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A `rows` x `columns` grid. Row 0 is the bottom; pieces fall toward it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row `rows - 1` is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Numeric value (0, 1 or 2) of the cell at a position
    pub fn cell_value(&self, row: usize, col: usize) -> u8 {
        self.get(row, col).value()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    /// Check if a column still has room for a piece.
    /// Only the top row needs looking at since pieces never float.
    pub fn is_column_valid(&self, col: usize) -> bool {
        if col >= self.columns || self.rows == 0 {
            return false;
        }
        self.get(self.rows - 1, col).is_empty()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        if col >= self.columns {
            return Err(MoveError::InvalidColumnIndex {
                column: col as i64,
                columns: self.columns,
            });
        }

        // Lowest empty row wins
        for row in 0..self.rows {
            let idx = self.index(row, col);
            if self.cells[idx].is_empty() {
                self.cells[idx] = Cell::Occupied(piece);
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull { column: col })
    }

    /// Check whether `piece` owns four consecutive cells along any line
    pub fn has_winning_move(&self, piece: Piece) -> bool {
        let target = Cell::Occupied(piece);

        for row in 0..self.rows {
            for col in 0..self.columns {
                if self.get(row, col) != target {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    if self.line_matches(row as isize, col as isize, dr, dc, target) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// True if the run of `WIN_LENGTH` cells starting at (row, col) stepping
    /// by (dr, dc) stays on the board and is entirely `target`.
    fn line_matches(&self, row: isize, col: isize, dr: isize, dc: isize, target: Cell) -> bool {
        (0..WIN_LENGTH).all(|i| {
            let r = row + i * dr;
            let c = col + i * dc;
            r >= 0
                && c >= 0
                && (r as usize) < self.rows
                && (c as usize) < self.columns
                && self.get(r as usize, c as usize) == target
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        for (rows, columns) in [(1, 1), (3, 5), (6, 7), (10, 4)] {
            let board = Board::new(rows, columns);
            assert_eq!(board.rows(), rows);
            assert_eq!(board.columns(), columns);
            for row in 0..rows {
                for col in 0..columns {
                    assert_eq!(board.cell_value(row, col), 0);
                }
            }
        }
    }

    #[test]
    fn test_drop_piece_fills_bottom_up() {
        let mut board = Board::default();

        for k in 0..DEFAULT_ROWS {
            let row = board.drop_piece(3, Piece::One).unwrap();
            assert_eq!(row, k);
            assert_eq!(board.get(k, 3), Cell::Occupied(Piece::One));
        }
    }

    #[test]
    fn test_drop_piece_stacks_on_other_piece() {
        let mut board = Board::default();
        assert_eq!(board.drop_piece(2, Piece::One).unwrap(), 0);
        assert_eq!(board.drop_piece(2, Piece::Two).unwrap(), 1);
        assert_eq!(board.cell_value(0, 2), 1);
        assert_eq!(board.cell_value(1, 2), 2);
        assert_eq!(board.cell_value(2, 2), 0);
    }

    #[test]
    fn test_column_validity_tracks_fill() {
        let mut board = Board::new(3, 4);
        for _ in 0..3 {
            assert!(board.is_column_valid(1));
            board.drop_piece(1, Piece::Two).unwrap();
        }
        assert!(!board.is_column_valid(1));
        assert!(board.is_column_valid(0));
    }

    #[test]
    fn test_out_of_range_column_is_not_valid() {
        let board = Board::default();
        assert!(!board.is_column_valid(DEFAULT_COLUMNS));
    }

    #[test]
    fn test_column_full_leaves_board_unmodified() {
        let mut board = Board::new(3, 7);
        for _ in 0..3 {
            board.drop_piece(0, Piece::One).unwrap();
        }
        let before = board.clone();

        assert_eq!(
            board.drop_piece(0, Piece::Two),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_piece(7, Piece::One),
            Err(MoveError::InvalidColumnIndex {
                column: 7,
                columns: 7
            })
        );
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::default();
        assert!(!board.has_winning_move(Piece::One));
        assert!(!board.has_winning_move(Piece::Two));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            assert_eq!(board.drop_piece(col, Piece::One).unwrap(), 0);
        }
        assert!(board.has_winning_move(Piece::One));
        assert!(!board.has_winning_move(Piece::Two));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for expected in 0..4 {
            assert_eq!(board.drop_piece(4, Piece::Two).unwrap(), expected);
        }
        assert!(board.has_winning_move(Piece::Two));
    }

    #[test]
    fn test_fourth_drop_on_three_row_board_is_column_full() {
        let mut board = Board::new(3, 7);
        for expected in 0..3 {
            assert_eq!(board.drop_piece(4, Piece::Two).unwrap(), expected);
        }
        assert_eq!(
            board.drop_piece(4, Piece::Two),
            Err(MoveError::ColumnFull { column: 4 })
        );
        assert!(!board.has_winning_move(Piece::Two));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Create diagonal / pattern
        board.drop_piece(0, Piece::One).unwrap();

        board.drop_piece(1, Piece::Two).unwrap();
        board.drop_piece(1, Piece::One).unwrap();

        board.drop_piece(2, Piece::Two).unwrap();
        board.drop_piece(2, Piece::Two).unwrap();
        board.drop_piece(2, Piece::One).unwrap();

        board.drop_piece(3, Piece::Two).unwrap();
        board.drop_piece(3, Piece::Two).unwrap();
        board.drop_piece(3, Piece::Two).unwrap();
        assert!(!board.has_winning_move(Piece::One));
        board.drop_piece(3, Piece::One).unwrap();

        assert!(board.has_winning_move(Piece::One));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // Create diagonal \ pattern
        board.drop_piece(6, Piece::One).unwrap();

        board.drop_piece(5, Piece::Two).unwrap();
        board.drop_piece(5, Piece::One).unwrap();

        board.drop_piece(4, Piece::Two).unwrap();
        board.drop_piece(4, Piece::Two).unwrap();
        board.drop_piece(4, Piece::One).unwrap();

        board.drop_piece(3, Piece::Two).unwrap();
        board.drop_piece(3, Piece::Two).unwrap();
        board.drop_piece(3, Piece::Two).unwrap();
        assert!(!board.has_winning_move(Piece::One));
        board.drop_piece(3, Piece::One).unwrap();

        assert!(board.has_winning_move(Piece::One));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, Piece::One).unwrap();
            board.drop_piece(col + 4, Piece::One).unwrap();
        }
        for _ in 0..3 {
            board.drop_piece(3, Piece::Two).unwrap();
        }
        assert!(!board.has_winning_move(Piece::One));
        assert!(!board.has_winning_move(Piece::Two));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let mut board = Board::default();
        for col in [0, 1, 3, 4] {
            board.drop_piece(col, Piece::One).unwrap();
        }
        board.drop_piece(2, Piece::Two).unwrap();
        assert!(!board.has_winning_move(Piece::One));
    }

    #[test]
    fn test_board_too_small_for_a_line() {
        let mut board = Board::new(3, 3);
        for col in 0..3 {
            for _ in 0..3 {
                board.drop_piece(col, Piece::One).unwrap();
            }
        }
        assert!(!board.has_winning_move(Piece::One));
    }
}
