use std::collections::HashMap;

use crate::charset::Code;

/// Code de remplissage noir. Also the fallback for unknown color names.
pub const BLACK: Code = 70;

/// Couleurs pleines du tableau, en ordre de code.
pub const STANDARD_COLORS: [(&str, Code); 8] = [
    ("red", 63),
    ("orange", 64),
    ("yellow", 65),
    ("green", 66),
    ("blue", 67),
    ("violet", 68),
    ("white", 69),
    ("black", BLACK),
];

/// Table nom de couleur → code de remplissage.
///
/// Names are matched case-insensitively. A missing or unknown name is not an
/// error: it resolves to [`BLACK`].
///
/// # Example
/// ```
/// use vb_core::color::{ColorTable, BLACK};
/// let colors = ColorTable::default();
/// assert_eq!(colors.code_or_black(Some("Red")), 63);
/// assert_eq!(colors.code_or_black(Some("chartreuse")), BLACK);
/// assert_eq!(colors.code_or_black(None), BLACK);
/// ```
#[derive(Clone, Debug)]
pub struct ColorTable {
    colors: HashMap<String, Code>,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            colors: STANDARD_COLORS
                .iter()
                .map(|&(name, code)| (name.to_string(), code))
                .collect(),
        }
    }
}

impl ColorTable {
    /// Case-insensitive lookup. `None` if the name is unknown.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Code> {
        self.colors.get(&name.to_lowercase()).copied()
    }

    /// Lookup with the black fallback.
    #[must_use]
    pub fn code_or_black(&self, name: Option<&str>) -> Code {
        name.and_then(|n| self.lookup(n)).unwrap_or(BLACK)
    }

    /// Known color names, sorted by code.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut entries: Vec<(&str, Code)> =
            self.colors.iter().map(|(n, &c)| (n.as_str(), c)).collect();
        entries.sort_by_key(|&(_, c)| c);
        entries.into_iter().map(|(n, _)| n).collect()
    }
}
