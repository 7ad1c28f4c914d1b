use std::io::Write;
use std::time::Duration;

use thiserror::Error;
use ureq::Agent;
use vb_core::config::BoardConfig;
use vb_core::frame::MessageGrid;

/// En-tête portant la clé d'API locale.
pub const API_KEY_HEADER: &str = "X-Vestaboard-Local-Api-Key";

/// Délai global d'une requête vers le tableau.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from delivering a grid to the board.
#[derive(Error, Debug)]
pub enum SendError {
    /// The configured environment variable holds no key.
    #[error("Clé d'API locale absente : export {0}=<clé>")]
    MissingApiKey(String),

    /// Connection, DNS or I/O failure.
    #[error("Échec de la requête vers {url} : {source}")]
    Request {
        /// Target URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: ureq::Error,
    },

    /// The board answered with a status other than 200/201.
    #[error("Échec de l'envoi. Statut : {status}\nRéponse : {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The grid could not be serialized or written out.
    #[error("Impossible d'écrire le corps du message : {0}")]
    Body(#[from] std::io::Error),
}

/// Result of a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The board accepted the message.
    Delivered {
        /// HTTP status code (200 or 201).
        status: u16,
        /// Response body.
        body: String,
    },
    /// The grid was printed instead of sent.
    Printed,
}

/// Destination d'une grille composée.
pub trait Transport {
    /// Deliver one grid.
    ///
    /// # Errors
    /// Returns a [`SendError`] when the grid could not be delivered.
    fn send(&self, grid: &MessageGrid) -> Result<SendOutcome, SendError>;
}

/// 200 et 201 sont les seuls statuts de succès de l'API locale.
#[must_use]
pub fn is_success(status: u16) -> bool {
    matches!(status, 200 | 201)
}

/// Client HTTP de l'API locale du tableau.
pub struct LocalApiClient {
    agent: Agent,
    base_url: String,
    api_key: String,
}

impl LocalApiClient {
    /// Create a client for `base_url` authenticated with `api_key`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from the config, reading the key from the environment.
    ///
    /// # Errors
    /// Returns [`SendError::MissingApiKey`] if the variable is unset or empty.
    pub fn from_config(config: &BoardConfig) -> Result<Self, SendError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| SendError::MissingApiKey(config.api_key_env.clone()))?;
        Ok(Self::new(config.base_url(), api_key))
    }
}

impl Transport for LocalApiClient {
    fn send(&self, grid: &MessageGrid) -> Result<SendOutcome, SendError> {
        let body = grid.to_json().map_err(std::io::Error::from)?;

        log::debug!("URL: {}", self.base_url);
        log::debug!(
            "Headers: {API_KEY_HEADER}: {}, Content-Type: application/json",
            redact(&self.api_key)
        );

        let request_error = |source| SendError::Request {
            url: self.base_url.clone(),
            source,
        };
        let mut response = self
            .agent
            .post(&self.base_url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header("Content-Type", "application/json")
            .send(body)
            .map_err(request_error)?;

        let status = response.status().as_u16();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(request_error)?;

        if is_success(status) {
            log::debug!("Response status: {status}");
            log::debug!("Response body: {text}");
            Ok(SendOutcome::Delivered { status, body: text })
        } else {
            Err(SendError::Rejected { status, body: text })
        }
    }
}

/// Envoi à blanc : écrit la grille JSON dans un flux au lieu du réseau.
pub struct DryRun<W> {
    out: std::cell::RefCell<W>,
}

impl<W: Write> DryRun<W> {
    /// Print grids to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: std::cell::RefCell::new(out),
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Transport for DryRun<W> {
    fn send(&self, grid: &MessageGrid) -> Result<SendOutcome, SendError> {
        let json = grid.to_json_pretty().map_err(std::io::Error::from)?;
        let mut out = self.out.borrow_mut();
        writeln!(out, "{json}")?;
        out.flush()?;
        Ok(SendOutcome::Printed)
    }
}

/// Caractères de clé laissés visibles dans les logs.
const REDACT_VISIBLE: usize = 4;

/// Masque la clé dans les logs. Une clé trop courte est masquée en entier.
fn redact(key: &str) -> String {
    if key.chars().count() <= REDACT_VISIBLE * 2 {
        return "****".to_string();
    }
    let visible: String = key.chars().take(REDACT_VISIBLE).collect();
    format!("{visible}…")
}
