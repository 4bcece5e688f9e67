//! Plain-text board rendering for the console.

use std::fmt;

use crate::game::Board;

/// Render the board top row first, framed by borders, with 1-based column
/// numbers underneath.
pub fn render_board(board: &Board) -> String {
    let border = "-".repeat(2 * board.columns() + 1);
    let mut out = String::new();

    out.push_str(&border);
    out.push('\n');
    for row in (0..board.rows()).rev() {
        let cells: Vec<String> = (0..board.columns())
            .map(|col| match board.cell_value(row, col) {
                0 => " ".to_string(),
                value => value.to_string(),
            })
            .collect();
        out.push('|');
        out.push_str(&cells.join("|"));
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push('\n');

    let numbers: Vec<String> = (1..=board.columns()).map(|n| n.to_string()).collect();
    out.push(' ');
    out.push_str(&numbers.join(" "));
    out.push('\n');

    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
