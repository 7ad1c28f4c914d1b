use std::path::Path;

use anyhow::Result;
use clap::Parser;
use vb_compose::Composer;
use vb_compose::background::Background;
use vb_core::charset::CodeTable;
use vb_core::color::ColorTable;
use vb_core::config::BoardConfig;

use crate::transport::{DryRun, LocalApiClient, SendError, SendOutcome, Transport};

pub mod cli;
pub mod prompt;
pub mod transport;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .init();

    // 3. Charger la config, puis appliquer les overrides CLI
    let mut config = resolve_config(&cli.config)?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    // 4. Tables de codes (fatal si l'asset est absent ou invalide)
    let codes = load_codes(config.codes.as_deref())?;
    let colors = ColorTable::default();

    // 5. Mise en page
    let layout = cli.layout(&config)?;
    warn_unknown_colors(&colors, &layout);

    // 6. Message : argument ou saisie interactive
    let message = match cli.message {
        Some(ref m) => m.clone(),
        None => prompt::read_message(std::io::stdin().lock(), std::io::stdout())?,
    };

    // 7. Composition
    let composer = Composer::new(&codes, &colors);
    let grid = composer.compose(&message, &layout);
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Message matrix:\n{}", grid.to_json_pretty()?);
    }

    // 8. Envoi
    let transport: Box<dyn Transport> = if cli.dry_run {
        Box::new(DryRun::new(std::io::stdout()))
    } else {
        Box::new(LocalApiClient::from_config(&config)?)
    };
    match transport.send(&grid) {
        Ok(SendOutcome::Delivered { status, .. }) => {
            println!("Message sent successfully!");
            log::info!("Le tableau a répondu {status}");
        }
        Ok(SendOutcome::Printed) => log::info!("Envoi à blanc : message non envoyé"),
        // Refus du tableau : signalé, pas fatal. La composition a réussi.
        Err(rejected @ SendError::Rejected { .. }) => eprintln!("{rejected}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Load the config file, or defaults if it does not exist.
fn resolve_config(path: &Path) -> Result<BoardConfig> {
    if path.exists() {
        vb_core::config::load_config(path)
    } else {
        log::warn!("Config not found: {}. Using defaults.", path.display());
        Ok(BoardConfig::default())
    }
}

/// External code table if configured, built-in table otherwise.
fn load_codes(path: Option<&Path>) -> Result<CodeTable> {
    match path {
        Some(p) => CodeTable::load(p),
        None => {
            log::debug!("Using built-in character codes");
            Ok(CodeTable::default())
        }
    }
}

/// Unknown names fall back to black; tell the operator.
fn warn_unknown_colors(colors: &ColorTable, layout: &vb_compose::Layout) {
    let named: Vec<&str> = match layout.background() {
        Background::Solid(Some(name)) if !name.is_empty() => vec![name],
        Background::Solid(_) => Vec::new(),
        Background::Gradient { start, end } => vec![start, end],
    };
    for name in named {
        if colors.lookup(name).is_none() {
            log::warn!(
                "Unknown color '{name}', using black. Known: {}",
                colors.names().join(", ")
            );
        }
    }
}
