use vb_core::charset::{BLANK, Code, CodeTable};
use vb_core::color::ColorTable;

/// Résolution caractère/couleur → code, sur des tables empruntées.
///
/// Lenient by contract: anything the tables do not know maps to a fallback
/// code instead of an error.
///
/// # Example
/// ```
/// use vb_compose::mapper::CodeMapper;
/// use vb_core::{CodeTable, ColorTable};
///
/// let codes = CodeTable::default();
/// let colors = ColorTable::default();
/// let mapper = CodeMapper::new(&codes, &colors);
/// assert_eq!(mapper.code_for_char('a'), 1);
/// assert_eq!(mapper.code_for_char('~'), 0);
/// assert_eq!(mapper.code_for_color(Some("blue")), 67);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CodeMapper<'a> {
    codes: &'a CodeTable,
    colors: &'a ColorTable,
}

impl<'a> CodeMapper<'a> {
    /// Build a mapper over tables loaded at startup.
    #[must_use]
    pub fn new(codes: &'a CodeTable, colors: &'a ColorTable) -> Self {
        Self { codes, colors }
    }

    /// Code of the uppercased character.
    ///
    /// A literal space is always [`BLANK`], whatever the table says. Characters
    /// missing from the table, or whose uppercase form is more than one
    /// character (`ß` → `SS`), are blanked too.
    #[inline]
    #[must_use]
    pub fn code_for_char(&self, ch: char) -> Code {
        if ch == ' ' {
            return BLANK;
        }
        let mut upper = ch.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => self.codes.lookup(u).unwrap_or(BLANK),
            _ => BLANK,
        }
    }

    /// Fill code for a color name; black when unknown or unset.
    #[inline]
    #[must_use]
    pub fn code_for_color(&self, name: Option<&str>) -> Code {
        self.colors.code_or_black(name)
    }

    /// Encode a wrapped line for overlay.
    ///
    /// Spaces become transparent cells so the background shows between
    /// words; every other character gets its code, blank included.
    #[must_use]
    pub fn encode_line(&self, line: &str) -> Vec<Option<Code>> {
        line.chars()
            .map(|c| (c != ' ').then(|| self.code_for_char(c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_mapper(f: impl FnOnce(CodeMapper<'_>)) {
        let codes = CodeTable::default();
        let colors = ColorTable::default();
        f(CodeMapper::new(&codes, &colors));
    }

    #[test]
    fn lowercase_maps_like_uppercase() {
        with_mapper(|m| {
            assert_eq!(m.code_for_char('h'), m.code_for_char('H'));
            assert_eq!(m.code_for_char('z'), 26);
        });
    }

    #[test]
    fn space_is_blank_even_if_table_says_otherwise() {
        let codes = CodeTable::from_json(r#"{" ": 12, "A": 1}"#).unwrap();
        let colors = ColorTable::default();
        let m = CodeMapper::new(&codes, &colors);
        assert_eq!(m.code_for_char(' '), BLANK);
    }

    #[test]
    fn unsupported_chars_are_blanked() {
        with_mapper(|m| {
            assert_eq!(m.code_for_char('~'), BLANK);
            assert_eq!(m.code_for_char('é'), BLANK);
            assert_eq!(m.code_for_char('ß'), BLANK);
            assert_eq!(m.code_for_char('\t'), BLANK);
        });
    }

    #[test]
    fn color_fallback_is_black() {
        with_mapper(|m| {
            assert_eq!(m.code_for_color(Some("chartreuse")), 70);
            assert_eq!(m.code_for_color(None), 70);
            assert_eq!(m.code_for_color(Some("RED")), 63);
        });
    }

    #[test]
    fn encode_line_makes_spaces_transparent() {
        with_mapper(|m| {
            assert_eq!(
                m.encode_line("Hi 5~"),
                vec![Some(8), Some(9), None, Some(31), Some(0)]
            );
        });
    }
}
