use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Adresse par défaut du tableau sur le réseau local.
pub const DEFAULT_HOST: &str = "192.168.86.22";
/// Port de l'API locale.
pub const DEFAULT_PORT: u16 = 7000;
/// Variable d'environnement qui porte la clé d'API locale.
pub const DEFAULT_API_KEY_ENV: &str = "VBOARD";

/// Horizontal text alignment. `Center` also centers the block vertically.
///
/// # Example
/// ```
/// use vb_core::config::Justify;
/// let j: Justify = "center".parse().unwrap();
/// assert_eq!(j, Justify::Center);
/// assert_eq!(Justify::default(), Justify::Left);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    /// Texte collé à gauche, bloc en haut.
    #[default]
    Left,
    /// Centré horizontalement et verticalement.
    Center,
    /// Texte collé à droite, bloc en haut.
    Right,
}

impl FromStr for Justify {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(CoreError::UnknownJustify(s.to_string())),
        }
    }
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

/// Configuration complète : connexion au tableau et défauts de message.
///
/// # Example
/// ```
/// use vb_core::config::BoardConfig;
/// let config = BoardConfig::default();
/// assert_eq!(config.port, 7000);
/// assert_eq!(config.base_url(), "http://192.168.86.22:7000/local-api/message");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct BoardConfig {
    // === Connexion ===
    /// Adresse IP ou nom d'hôte du tableau.
    pub host: String,
    /// Port de l'API locale.
    pub port: u16,
    /// Nom de la variable d'environnement contenant la clé.
    pub api_key_env: String,
    /// Table de codes externe. `None` = table intégrée.
    pub codes: Option<PathBuf>,

    // === Message ===
    /// Justification par défaut.
    pub justify: Justify,
    /// Couleur de fond par défaut.
    pub color: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            codes: None,
            justify: Justify::Left,
            color: None,
        }
    }
}

impl BoardConfig {
    /// Endpoint of the local message API.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/local-api/message", self.host, self.port)
    }

    /// Read the API key from the configured environment variable.
    ///
    /// Returns `None` if the variable is unset, empty or not valid unicode.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }

    /// Reject values that cannot address a board.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] on an empty host, port 0 or an empty
    /// environment variable name.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.host.trim().is_empty() {
            return Err(CoreError::Config("board.host est vide".into()));
        }
        if self.port == 0 {
            return Err(CoreError::Config("board.port doit être non nul".into()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(CoreError::Config("board.api_key_env est vide".into()));
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire, toutes sections optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    board: Option<BoardSection>,
    message: Option<MessageSection>,
}

/// Board section, all fields optional for partial override.
#[derive(Deserialize)]
struct BoardSection {
    host: Option<String>,
    port: Option<u16>,
    api_key_env: Option<String>,
    codes: Option<PathBuf>,
}

/// Message defaults section.
#[derive(Deserialize)]
struct MessageSection {
    justify: Option<Justify>,
    color: Option<String>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
/// ```no_run
/// use vb_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<BoardConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = BoardConfig::default();

    if let Some(b) = file.board {
        if let Some(v) = b.host {
            config.host = v;
        }
        if let Some(v) = b.port {
            config.port = v;
        }
        if let Some(v) = b.api_key_env {
            config.api_key_env = v;
        }
        if let Some(v) = b.codes {
            config.codes = Some(v);
        }
    }

    if let Some(m) = file.message {
        if let Some(v) = m.justify {
            config.justify = v;
        }
        if let Some(v) = m.color {
            config.color = Some(v);
        }
    }

    config
        .validate()
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    Ok(config)
}
