use serde::{Deserialize, Serialize};

use crate::charset::{BLANK, Code};

/// Nombre de rangées du tableau.
pub const BOARD_ROWS: usize = 6;
/// Nombre de volets par rangée.
pub const BOARD_COLS: usize = 22;

/// Rangée justifiée : `None` laisse voir le fond.
pub type JustifiedRow = [Option<Code>; BOARD_COLS];

/// Fully transparent row, used for vertical padding.
pub const TRANSPARENT_ROW: JustifiedRow = [None; BOARD_COLS];

/// Grille de codes, taille fixe `BOARD_ROWS` × `BOARD_COLS`.
///
/// Serializes as a plain JSON array of rows, which is the body the local API
/// expects.
///
/// # Example
/// ```
/// use vb_core::frame::{MessageGrid, BOARD_ROWS, BOARD_COLS};
/// let mut grid = MessageGrid::filled(63);
/// grid.set(0, 0, 1);
/// assert_eq!(grid.get(0, 0), 1);
/// assert_eq!(grid.get(BOARD_ROWS - 1, BOARD_COLS - 1), 63);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageGrid {
    rows: [[Code; BOARD_COLS]; BOARD_ROWS],
}

impl Default for MessageGrid {
    fn default() -> Self {
        Self::filled(BLANK)
    }
}

impl MessageGrid {
    /// Grid with every cell set to `code`.
    #[must_use]
    pub fn filled(code: Code) -> Self {
        Self {
            rows: [[code; BOARD_COLS]; BOARD_ROWS],
        }
    }

    /// Cell at (row, col).
    ///
    /// # Panics
    /// Panics if `row >= BOARD_ROWS` or `col >= BOARD_COLS`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Code {
        self.rows[row][col]
    }

    /// Set the cell at (row, col).
    ///
    /// # Panics
    /// Panics if `row >= BOARD_ROWS` or `col >= BOARD_COLS`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, code: Code) {
        self.rows[row][col] = code;
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[[Code; BOARD_COLS]; BOARD_ROWS] {
        &self.rows
    }

    /// Cells in reading order (row-major).
    pub fn cells(&self) -> impl Iterator<Item = Code> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Compact JSON body, e.g. `[[0,0,...],...]`.
    ///
    /// # Errors
    /// Propagates serializer errors (none occur for plain integer arrays).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON, for debug output.
    ///
    /// # Errors
    /// Propagates serializer errors.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
