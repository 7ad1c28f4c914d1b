use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use vb_compose::Layout;
use vb_core::config::{BoardConfig, Justify};

/// vestars — Compose et envoie un message au tableau à volets.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Message à afficher. Demandé sur l'entrée standard si absent.
    #[arg(long)]
    pub message: Option<String>,

    /// Couleur de fond unie : red, orange, yellow, green, blue, violet, white, black.
    #[arg(long)]
    pub color: Option<String>,

    /// Justification du texte. Défaut : valeur de la config (left).
    #[arg(long, value_parser = ["left", "center", "right"])]
    pub justify: Option<String>,

    /// Dégradé de fond entre deux couleurs. Prioritaire sur --color.
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    pub gradient: Option<Vec<String>>,

    /// Afficher la matrice, les en-têtes et l'URL avant l'envoi.
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Imprimer la matrice JSON au lieu de l'envoyer.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Table de codes JSON. Défaut : table intégrée.
    #[arg(long)]
    pub codes: Option<PathBuf>,

    /// Adresse du tableau (remplace board.host).
    #[arg(long)]
    pub host: Option<String>,

    /// Port de l'API locale (remplace board.port).
    #[arg(long)]
    pub port: Option<u16>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Log filter; `--debug` forces at least `debug`.
    #[must_use]
    pub fn log_filter(&self) -> log::LevelFilter {
        let level = self.log_level.parse().unwrap_or(log::LevelFilter::Warn);
        if self.debug {
            level.max(log::LevelFilter::Debug)
        } else {
            level
        }
    }

    /// Apply connection flags on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut BoardConfig) {
        if let Some(ref host) = self.host {
            config.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(ref codes) = self.codes {
            config.codes = Some(codes.clone());
        }
    }

    /// Build the layout from flags, falling back to config defaults.
    ///
    /// # Errors
    /// Returns an error if the justification keyword is unknown.
    pub fn layout(&self, config: &BoardConfig) -> Result<Layout> {
        let justify = match self.justify {
            Some(ref j) => j.parse::<Justify>()?,
            None => config.justify,
        };

        let mut layout = Layout::new(justify);
        layout.color = self.color.clone().or_else(|| config.color.clone());
        if let Some([start, end]) = self.gradient.as_deref() {
            layout.gradient = Some((start.clone(), end.clone()));
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vestars").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert!(cli.message.is_none());
        assert!(!cli.debug);
        assert!(!cli.dry_run);
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert_eq!(cli.log_filter(), log::LevelFilter::Warn);

        let layout = cli.layout(&BoardConfig::default()).unwrap();
        assert_eq!(layout, Layout::new(Justify::Left));
    }

    #[test]
    fn gradient_takes_two_values() {
        let cli = parse(&["--message", "hi", "--color", "red", "--gradient", "blue", "green"]);
        let layout = cli.layout(&BoardConfig::default()).unwrap();
        assert_eq!(layout.color.as_deref(), Some("red"));
        assert_eq!(
            layout.gradient,
            Some(("blue".to_string(), "green".to_string()))
        );
    }

    #[test]
    fn gradient_with_one_value_is_rejected() {
        assert!(Cli::try_parse_from(["vestars", "--gradient", "red"]).is_err());
    }

    #[test]
    fn unknown_justify_is_rejected() {
        assert!(Cli::try_parse_from(["vestars", "--justify", "middle"]).is_err());
    }

    #[test]
    fn flags_override_config_defaults() {
        let config = BoardConfig {
            justify: Justify::Right,
            color: Some("violet".into()),
            ..BoardConfig::default()
        };

        let layout = parse(&[]).layout(&config).unwrap();
        assert_eq!(layout.justify, Justify::Right);
        assert_eq!(layout.color.as_deref(), Some("violet"));

        let layout = parse(&["--justify", "center", "--color", "white"])
            .layout(&config)
            .unwrap();
        assert_eq!(layout.justify, Justify::Center);
        assert_eq!(layout.color.as_deref(), Some("white"));
    }

    #[test]
    fn connection_overrides() {
        let mut config = BoardConfig::default();
        parse(&["--host", "10.1.2.3", "--port", "7100", "--codes", "my.json"])
            .apply_overrides(&mut config);
        assert_eq!(config.base_url(), "http://10.1.2.3:7100/local-api/message");
        assert_eq!(config.codes, Some(PathBuf::from("my.json")));
    }

    #[test]
    fn debug_raises_log_level() {
        assert_eq!(parse(&["--debug"]).log_filter(), log::LevelFilter::Debug);
        assert_eq!(
            parse(&["--debug", "--log-level", "trace"]).log_filter(),
            log::LevelFilter::Trace
        );
        assert_eq!(
            parse(&["--log-level", "bogus"]).log_filter(),
            log::LevelFilter::Warn
        );
    }
}
