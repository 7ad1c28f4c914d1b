use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Character-code table could not be parsed as a JSON object.
    #[error("Table de codes mal formée : {0}")]
    MalformedCodeTable(String),

    /// A table entry is not a single character mapped to a code in 0..=255.
    #[error("Entrée de code invalide {key:?} : {reason}")]
    InvalidCodeEntry {
        /// Offending key as found in the asset.
        key: String,
        /// Why the entry was rejected.
        reason: String,
    },

    /// Unknown justification keyword.
    #[error("Justification inconnue : {0} (attendu : left, center ou right)")]
    UnknownJustify(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_en_francais() {
        assert_eq!(
            CoreError::Config("port nul".into()).to_string(),
            "Configuration invalide : port nul"
        );
        assert_eq!(
            CoreError::FileNotFound { path: "a.json".into() }.to_string(),
            "Fichier introuvable : a.json"
        );
    }
}
