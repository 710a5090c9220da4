//! Enumeration of the eight winning lines.

use crate::types::CELL_COUNT;

/// Three row-major indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// Every line on the board.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

const MAIN_DIAGONAL: Line = [0, 4, 8];
const ANTI_DIAGONAL: Line = [2, 4, 6];

/// Returns the lines passing through `index`.
///
/// Always yields the row and the column; the main diagonal when
/// `row == column` and the anti-diagonal when `row + column == 2`.
///
/// # Panics
///
/// Panics if `index` is not a cell index.
pub fn lines_through(index: usize) -> impl Iterator<Item = Line> {
    assert!(index < CELL_COUNT, "cell index {index} out of bounds");
    let (row, column) = (index / 3, index % 3);
    let row_start = 3 * row;
    [
        Some([row_start, row_start + 1, row_start + 2]),
        Some([column, column + 3, column + 6]),
        (row == column).then_some(MAIN_DIAGONAL),
        (row + column == 2).then_some(ANTI_DIAGONAL),
    ]
    .into_iter()
    .flatten()
}
