use vb_core::charset::Code;
use vb_core::config::Justify;
use vb_core::frame::{BOARD_COLS, BOARD_ROWS, JustifiedRow, TRANSPARENT_ROW};

/// Place an encoded line in a row, padding with transparent cells.
///
/// Cells beyond `BOARD_COLS` are cut. With `Center`, the odd leftover cell
/// goes to the right.
///
/// # Example
/// ```
/// use vb_compose::justify::justify_line;
/// use vb_core::config::Justify;
///
/// let row = justify_line(&[Some(1)], Justify::Center);
/// assert_eq!(row[10], Some(1));
/// assert!(row[..10].iter().all(Option::is_none));
/// assert!(row[11..].iter().all(Option::is_none));
/// ```
#[must_use]
pub fn justify_line(cells: &[Option<Code>], justify: Justify) -> JustifiedRow {
    let cells = &cells[..cells.len().min(BOARD_COLS)];
    let pad = BOARD_COLS - cells.len();
    let offset = match justify {
        Justify::Left => 0,
        Justify::Right => pad,
        Justify::Center => pad / 2,
    };

    let mut row = TRANSPARENT_ROW;
    row[offset..offset + cells.len()].copy_from_slice(cells);
    row
}

/// Justify every line and, for `Center`, pad the block vertically.
///
/// `Left` and `Right` return one row per line (top-aligned). `Center` always
/// returns `BOARD_ROWS` rows, extra padding row at the bottom. At most
/// `BOARD_ROWS` lines are used.
#[must_use]
pub fn justify_block(lines: &[Vec<Option<Code>>], justify: Justify) -> Vec<JustifiedRow> {
    let lines = &lines[..lines.len().min(BOARD_ROWS)];
    let text_rows = lines.iter().map(|cells| justify_line(cells, justify));

    if justify != Justify::Center {
        return text_rows.collect();
    }

    let top = (BOARD_ROWS - lines.len()) / 2;
    let bottom = BOARD_ROWS - lines.len() - top;
    let mut rows = Vec::with_capacity(BOARD_ROWS);
    rows.extend(std::iter::repeat_n(TRANSPARENT_ROW, top));
    rows.extend(text_rows);
    rows.extend(std::iter::repeat_n(TRANSPARENT_ROW, bottom));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(row: &JustifiedRow) -> Vec<usize> {
        row.iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|_| i))
            .collect()
    }

    #[test]
    fn left_and_right_mirror() {
        let word = [Some(8), Some(9), Some(3)];
        let left = justify_line(&word, Justify::Left);
        let right = justify_line(&word, Justify::Right);
        assert_eq!(filled(&left), vec![0, 1, 2]);
        assert_eq!(filled(&right), vec![19, 20, 21]);
        assert_eq!(&left[..3], &[Some(8), Some(9), Some(3)]);
        assert_eq!(&right[19..], &[Some(8), Some(9), Some(3)]);
    }

    #[test]
    fn center_odd_remainder_goes_right() {
        let row = justify_line(&[Some(5)], Justify::Center);
        assert_eq!(filled(&row), vec![10]);
        let row = justify_line(&[Some(5), Some(5)], Justify::Center);
        assert_eq!(filled(&row), vec![10, 11]);
    }

    #[test]
    fn interior_cells_are_kept_as_is() {
        // "A B~" : espace transparent, caractère inconnu = 0.
        let row = justify_line(&[Some(1), None, Some(2), Some(0)], Justify::Right);
        assert_eq!(&row[18..], &[Some(1), None, Some(2), Some(0)]);
        assert!(row[..18].iter().all(Option::is_none));
    }

    #[test]
    fn overlong_line_is_cut() {
        let cells: Vec<Option<Code>> = (1..=30).map(Some).collect();
        for j in [Justify::Left, Justify::Center, Justify::Right] {
            let row = justify_line(&cells, j);
            assert_eq!(row[0], Some(1));
            assert_eq!(row[21], Some(22));
        }
    }

    #[test]
    fn left_block_is_top_aligned() {
        let rows = justify_block(&[vec![Some(1)], vec![Some(2)]], Justify::Left);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Some(1));
        assert_eq!(rows[1][0], Some(2));
    }

    #[test]
    fn center_block_is_vertically_centered() {
        let rows = justify_block(&[vec![Some(1)], vec![Some(2)]], Justify::Center);
        assert_eq!(rows.len(), BOARD_ROWS);
        assert_eq!(rows[0], TRANSPARENT_ROW);
        assert_eq!(rows[1], TRANSPARENT_ROW);
        assert_eq!(rows[2][10], Some(1));
        assert_eq!(rows[3][10], Some(2));
        assert_eq!(rows[4], TRANSPARENT_ROW);
        assert_eq!(rows[5], TRANSPARENT_ROW);
    }

    #[test]
    fn center_odd_line_count_pushes_remainder_down() {
        let rows = justify_block(&[vec![Some(1)], vec![Some(2)], vec![Some(3)]], Justify::Center);
        // top = (6 - 3) / 2 = 1, bottom = 2
        assert_eq!(rows[0], TRANSPARENT_ROW);
        assert_eq!(rows[1][10], Some(1));
        assert_eq!(rows[3][10], Some(3));
        assert_eq!(rows[4], TRANSPARENT_ROW);
        assert_eq!(rows[5], TRANSPARENT_ROW);
    }

    #[test]
    fn center_with_no_lines_is_all_transparent() {
        let rows = justify_block(&[], Justify::Center);
        assert_eq!(rows, vec![TRANSPARENT_ROW; BOARD_ROWS]);
    }
}
