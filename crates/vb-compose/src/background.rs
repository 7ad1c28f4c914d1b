use vb_core::charset::{BLANK, Code};
use vb_core::frame::{BOARD_COLS, BOARD_ROWS, MessageGrid};

use crate::mapper::CodeMapper;

/// Fond de la grille : uni ou dégradé.
///
/// # Example
/// ```
/// use vb_compose::background::Background;
/// let bg = Background::select(Some("red"), Some(("blue", "green")));
/// assert_eq!(bg, Background::Gradient { start: "blue", end: "green" });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background<'s> {
    /// Every cell holds the fill code of the color, or blank without one.
    Solid(Option<&'s str>),
    /// Linear ramp between two colors in reading order.
    Gradient {
        /// Color of the top-left cell.
        start: &'s str,
        /// Color of the bottom-right cell.
        end: &'s str,
    },
}

impl<'s> Background<'s> {
    /// Pick the background mode. A gradient wins over a solid color.
    #[must_use]
    pub fn select(color: Option<&'s str>, gradient: Option<(&'s str, &'s str)>) -> Self {
        match gradient {
            Some((start, end)) => Self::Gradient { start, end },
            None => Self::Solid(color),
        }
    }

    /// Build the background grid.
    #[must_use]
    pub fn render(&self, mapper: &CodeMapper<'_>) -> MessageGrid {
        match *self {
            Self::Solid(color) => solid(mapper, color),
            Self::Gradient { start, end } => gradient(mapper, start, end),
        }
    }
}

/// Fond uni. No color (or an empty name) gives a blank board; an unknown
/// name gives black.
#[must_use]
pub fn solid(mapper: &CodeMapper<'_>, color: Option<&str>) -> MessageGrid {
    let code = match color.filter(|c| !c.is_empty()) {
        Some(name) => mapper.code_for_color(Some(name)),
        None => BLANK,
    };
    MessageGrid::filled(code)
}

/// Dégradé linéaire sur toute la grille, en ordre de lecture.
///
/// Cell `(r, c)` gets `trunc(start + ratio * (end - start))` with
/// `ratio = (r * COLS + c) / (ROWS * COLS - 1)`. The ramp runs through the
/// grid as one line, so rows band diagonally instead of forming a 2-D blend.
///
/// # Example
/// ```
/// use vb_compose::background::gradient;
/// use vb_compose::mapper::CodeMapper;
/// use vb_core::{CodeTable, ColorTable};
///
/// let (codes, colors) = (CodeTable::default(), ColorTable::default());
/// let grid = gradient(&CodeMapper::new(&codes, &colors), "red", "black");
/// assert_eq!(grid.get(0, 0), 63);
/// assert_eq!(grid.get(5, 21), 70);
/// ```
#[must_use]
pub fn gradient(mapper: &CodeMapper<'_>, start: &str, end: &str) -> MessageGrid {
    let start_code = f64::from(mapper.code_for_color(Some(start)));
    let end_code = f64::from(mapper.code_for_color(Some(end)));
    let span = (BOARD_ROWS * BOARD_COLS - 1) as f64;

    let mut grid = MessageGrid::default();
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            let ratio = (row * BOARD_COLS + col) as f64 / span;
            // `as` tronque vers zéro.
            let code = (start_code + ratio * (end_code - start_code)) as Code;
            grid.set(row, col, code);
        }
    }
    grid
}
