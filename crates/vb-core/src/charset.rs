use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::CoreError;

/// Code d'affichage d'un volet. 0 = volet vide (fond).
pub type Code = u8;

/// Blank flap. Also the code every unsupported character collapses to.
pub const BLANK: Code = 0;

/// Published character set of the board, in code order.
///
/// Mirrors `assets/character_codes.json`; used when no asset path is given.
pub const VESTABOARD_CODES: &[(char, Code)] = &[
    (' ', 0),
    ('A', 1),
    ('B', 2),
    ('C', 3),
    ('D', 4),
    ('E', 5),
    ('F', 6),
    ('G', 7),
    ('H', 8),
    ('I', 9),
    ('J', 10),
    ('K', 11),
    ('L', 12),
    ('M', 13),
    ('N', 14),
    ('O', 15),
    ('P', 16),
    ('Q', 17),
    ('R', 18),
    ('S', 19),
    ('T', 20),
    ('U', 21),
    ('V', 22),
    ('W', 23),
    ('X', 24),
    ('Y', 25),
    ('Z', 26),
    ('1', 27),
    ('2', 28),
    ('3', 29),
    ('4', 30),
    ('5', 31),
    ('6', 32),
    ('7', 33),
    ('8', 34),
    ('9', 35),
    ('0', 36),
    ('!', 37),
    ('@', 38),
    ('#', 39),
    ('$', 40),
    ('(', 41),
    (')', 42),
    ('-', 44),
    ('+', 46),
    ('&', 47),
    ('=', 48),
    (';', 49),
    (':', 50),
    ('\'', 52),
    ('"', 53),
    ('%', 54),
    (',', 55),
    ('.', 56),
    ('/', 59),
    ('?', 60),
    ('°', 62),
];

/// Table caractère → code, immuable après construction.
///
/// Keys are stored exactly as they appear in the asset (uppercase letters
/// for the stock board); case folding happens at lookup time in the mapper.
///
/// # Example
/// ```
/// use vb_core::charset::CodeTable;
/// let table = CodeTable::default();
/// assert_eq!(table.lookup('A'), Some(1));
/// assert_eq!(table.lookup('~'), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, Code>,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self {
            codes: VESTABOARD_CODES.iter().copied().collect(),
        }
    }
}

impl CodeTable {
    /// Parse a JSON object of single-character keys to integer codes.
    ///
    /// # Errors
    /// Returns [`CoreError::MalformedCodeTable`] if the document is not an
    /// object of non-negative integers, and [`CoreError::InvalidCodeEntry`]
    /// if a key is not exactly one character or a code exceeds 255.
    ///
    /// # Example
    /// ```
    /// use vb_core::charset::CodeTable;
    /// let table = CodeTable::from_json(r#"{"A": 1, "!": 37}"#).unwrap();
    /// assert_eq!(table.lookup('!'), Some(37));
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let raw: HashMap<String, u64> = serde_json::from_str(json)
            .map_err(|e| CoreError::MalformedCodeTable(e.to_string()))?;

        let mut codes = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(CoreError::InvalidCodeEntry {
                        key,
                        reason: "la clé doit être un seul caractère".into(),
                    });
                }
            };
            let code = Code::try_from(value).map_err(|_| CoreError::InvalidCodeEntry {
                key,
                reason: format!("le code {value} dépasse 0..=255"),
            })?;
            codes.insert(ch, code);
        }
        Ok(Self { codes })
    }

    /// Charge la table depuis un fichier JSON.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or malformed.
    /// Callers treat this as fatal: no message can be composed without codes.
    ///
    /// # Example
    /// ```no_run
    /// use vb_core::charset::CodeTable;
    /// use std::path::Path;
    /// let table = CodeTable::load(Path::new("assets/character_codes.json")).unwrap();
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire {}", path.display()))?;
        let table = Self::from_json(&content)
            .with_context(|| format!("Table de codes invalide dans {}", path.display()))?;
        log::debug!("{} codes chargés depuis {}", table.len(), path.display());
        Ok(table)
    }

    /// Raw lookup, no case folding.
    #[inline]
    #[must_use]
    pub fn lookup(&self, ch: char) -> Option<Code> {
        self.codes.get(&ch).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_asset_matches_builtin_table() {
        let asset = CodeTable::from_json(include_str!("../assets/character_codes.json")).unwrap();
        assert_eq!(asset, CodeTable::default());
    }

    #[test]
    fn letters_and_digits_are_contiguous() {
        let table = CodeTable::default();
        for (i, ch) in ('A'..='Z').enumerate() {
            assert_eq!(table.lookup(ch), Some(i as Code + 1), "lettre {ch}");
        }
        assert_eq!(table.lookup('1'), Some(27));
        assert_eq!(table.lookup('9'), Some(35));
        assert_eq!(table.lookup('0'), Some(36));
    }

    #[test]
    fn lowercase_is_not_in_table() {
        assert_eq!(CodeTable::default().lookup('a'), None);
    }

    #[test]
    fn rejects_multi_char_key() {
        let err = CodeTable::from_json(r#"{"AB": 1}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCodeEntry { ref key, .. } if key == "AB"));
    }

    #[test]
    fn rejects_out_of_range_code() {
        let err = CodeTable::from_json(r#"{"A": 300}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCodeEntry { .. }));
    }

    #[test]
    fn rejects_negative_code_and_non_object() {
        assert!(matches!(
            CodeTable::from_json(r#"{"A": -1}"#),
            Err(CoreError::MalformedCodeTable(_))
        ));
        assert!(matches!(
            CodeTable::from_json("[1, 2, 3]"),
            Err(CoreError::MalformedCodeTable(_))
        ));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CodeTable::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");
        std::fs::write(&path, r#"{"Z": 26, "?": 60}"#).unwrap();
        let table = CodeTable::load(&path).unwrap();
        assert_eq!(table.lookup('Z'), Some(26));
        assert_eq!(table.lookup('?'), Some(60));
        assert_eq!(table.len(), 2);
    }
}
