pub mod classes;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod report;
pub mod rules;
pub mod signals;

pub use engine::{assess, predict, Assessment, Prediction, QuitLabel};
pub use signals::PlayerSignals;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::io::{BufReader, Write};

pub fn run() -> Result<()> {
    let args = Cli::parse();

    // -----------------------------------------------------------------------
    // Config first: it decides where logs go. stdout carries only JSON.
    // -----------------------------------------------------------------------
    let cfg = match &args.config {
        Some(path) => config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => config::load_or_default(&std::env::current_dir()?)?,
    };
    let _guard = logging::init(&cfg.logging);
    let pretty = args.pretty || cfg.output.pretty;

    tracing::debug!("churn-risk {} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Commands::Examples) {
        Commands::Examples => report::write_examples(&mut out)?,

        Commands::Score { logins, playtime, levels, class, explain } => {
            let signals = PlayerSignals::new(logins, playtime, levels, class);
            if explain {
                report::write_json(&mut out, &assess(&signals), true)?;
            } else {
                report::write_json(&mut out, &predict(&signals), pretty)?;
            }
            out.flush()?;
        }

        Commands::Batch { input } => {
            let scored = match input {
                Some(path) => {
                    let file = std::fs::File::open(&path)
                        .with_context(|| format!("opening {}", path.display()))?;
                    report::score_lines(BufReader::new(file), &mut out, pretty)?
                }
                None => report::score_lines(std::io::stdin().lock(), &mut out, pretty)?,
            };
            tracing::debug!("Batch complete: {} record(s)", scored);
        }

        Commands::InitConfig { dir } => {
            let dir = match dir {
                Some(d) => d,
                None => std::env::current_dir()?,
            };
            config::save(&cfg, &dir)?;
            tracing::info!("Config written to {}", dir.join(config::CONFIG_FILE).display());
        }

        Commands::Classes => {
            report::write_json(&mut out, classes::list_groups(), true)?;
            out.flush()?;
        }
    }

    Ok(())
}
