use vb_core::charset::{Code, CodeTable};
use vb_core::color::ColorTable;
use vb_core::config::Justify;
use vb_core::frame::{BOARD_COLS, BOARD_ROWS, JustifiedRow, MessageGrid};

use crate::background::Background;
use crate::justify::justify_block;
use crate::mapper::CodeMapper;
use crate::wrap::wrap_words;

/// Directives de mise en page d'un message.
///
/// # Example
/// ```
/// use vb_compose::compositor::Layout;
/// use vb_core::config::Justify;
/// let layout = Layout::new(Justify::Center).with_gradient("red", "violet");
/// assert!(layout.gradient.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    /// Couleur de fond unie.
    pub color: Option<String>,
    /// Dégradé (début, fin). Prioritaire sur `color`.
    pub gradient: Option<(String, String)>,
    /// Justification du texte.
    pub justify: Justify,
}

impl Layout {
    /// Layout with the given justification and a blank background.
    #[must_use]
    pub fn new(justify: Justify) -> Self {
        Self {
            justify,
            ..Self::default()
        }
    }

    /// Set the solid background color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the gradient background.
    #[must_use]
    pub fn with_gradient(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.gradient = Some((start.into(), end.into()));
        self
    }

    /// Background selected by this layout.
    #[must_use]
    pub fn background(&self) -> Background<'_> {
        Background::select(
            self.color.as_deref(),
            self.gradient.as_ref().map(|(s, e)| (s.as_str(), e.as_str())),
        )
    }
}

/// Superpose les rangées justifiées sur une copie du fond.
///
/// `Some(code)` overwrites the cell, `None` lets the background show through.
/// The input grid is left untouched.
///
/// # Example
/// ```
/// use vb_compose::compositor::overlay;
/// use vb_core::frame::{MessageGrid, TRANSPARENT_ROW};
///
/// let background = MessageGrid::filled(63);
/// let mut row = TRANSPARENT_ROW;
/// row[0] = Some(1);
/// let grid = overlay(&background, &[row]);
/// assert_eq!(grid.get(0, 0), 1);
/// assert_eq!(grid.get(0, 1), 63);
/// assert_eq!(background.get(0, 0), 63);
/// ```
#[must_use]
pub fn overlay(background: &MessageGrid, rows: &[JustifiedRow]) -> MessageGrid {
    let mut grid = *background;
    for (r, row) in rows.iter().take(BOARD_ROWS).enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Some(code) = *cell {
                grid.set(r, c, code);
            }
        }
    }
    grid
}

/// Compositor : texte + mise en page → grille de codes.
///
/// Holds only borrowed, immutable tables, so one instance can serve any number
/// of calls and threads.
///
/// # Example
/// ```
/// use vb_compose::compositor::{Composer, Layout};
/// use vb_core::{CodeTable, ColorTable, Justify};
///
/// let (codes, colors) = (CodeTable::default(), ColorTable::default());
/// let composer = Composer::new(&codes, &colors);
/// let grid = composer.compose("A B", &Layout::new(Justify::Left).with_color("red"));
/// assert_eq!(grid.get(0, 0), 1);
/// assert_eq!(grid.get(0, 1), 63);
/// assert_eq!(grid.get(0, 2), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Composer<'a> {
    mapper: CodeMapper<'a>,
}

impl<'a> Composer<'a> {
    /// Create a composer over tables loaded at startup.
    #[must_use]
    pub fn new(codes: &'a CodeTable, colors: &'a ColorTable) -> Self {
        Self {
            mapper: CodeMapper::new(codes, colors),
        }
    }

    /// Compose `message` into a full board grid.
    ///
    /// Never fails: unsupported characters are blanked, unknown colors are
    /// black, lines past the last row and characters past the last column
    /// are dropped.
    #[must_use]
    pub fn compose(&self, message: &str, layout: &Layout) -> MessageGrid {
        let background = layout.background().render(&self.mapper);

        let lines = wrap_words(message, BOARD_COLS, BOARD_ROWS);
        let encoded: Vec<Vec<Option<Code>>> =
            lines.iter().map(|l| self.mapper.encode_line(l)).collect();
        let rows = justify_block(&encoded, layout.justify);

        log::debug!(
            "Composed {} line(s), justify={}, background={:?}",
            lines.len(),
            layout.justify,
            layout.background()
        );
        overlay(&background, &rows)
    }
}
