//! Arena binary.
//!
//! Builds two characters from archetype kits, prints their sheets, and
//! narrates a turn-based duel between them on stdout. Logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Default demo: dwarf warrior against elf mage
//! cargo run -p arena-client
//!
//! # Data-driven kits, no pacing
//! cargo run -p arena-client -- --data-dir data --first barbarian --delay-ms 0
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use arena_client::{Arena, ClientConfig, Contender, logging};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(about = "Assemble two characters and watch them duel", long_about = None)]
#[command(version)]
struct Cli {
    /// Kit of the contender that attacks first
    #[arg(long, default_value = "warrior")]
    first: String,

    #[arg(long, default_value = "Ivar the Boneless")]
    first_name: String,

    /// Strategy override for the first contender (physical, arcane)
    #[arg(long)]
    first_strategy: Option<String>,

    /// Kit of the contender that attacks second
    #[arg(long, default_value = "mage")]
    second: String,

    #[arg(long, default_value = "Gandalf the Grey")]
    second_name: String,

    /// Strategy override for the second contender (physical, arcane)
    #[arg(long)]
    second_strategy: Option<String>,

    /// Data directory with `config.toml` and `kits/*.ron`
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Game configuration TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pause after each turn, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Stop the duel after this many turns
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_turns: Option<u32>,

    /// Print the available kits and exit
    #[arg(long)]
    list_kits: bool,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(ms) = self.delay_ms {
            config.turn_delay = Duration::from_millis(ms);
        }
        if self.max_turns.is_some() {
            config.max_turns = self.max_turns;
        }
        if self.data_dir.is_some() {
            config.data_dir = self.data_dir.clone();
        }
        if self.config.is_some() {
            config.config_file = self.config.clone();
        }
        config
    }

    fn contender(kit: &str, name: &str, strategy: Option<&String>) -> Contender {
        let contender = Contender::new(kit, name);
        match strategy {
            Some(strategy) => contender.with_strategy(strategy.as_str()),
            None => contender,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logging::setup_logging()?;

    let config = cli.client_config();
    tracing::debug!(?config, "client configuration");

    let arena = Arena::builder()
        .first(Cli::contender(&cli.first, &cli.first_name, cli.first_strategy.as_ref()))
        .second(Cli::contender(&cli.second, &cli.second_name, cli.second_strategy.as_ref()))
        .config(config)
        .build()?;

    if cli.list_kits {
        for name in arena.kit_names()? {
            println!("{name}");
        }
        return Ok(());
    }

    let summary = arena.run(std::io::stdout().lock())?;
    match summary.winner {
        Some(winner) => tracing::info!(%winner, turns = summary.outcome.turns(), "arena closed"),
        None => tracing::info!(turns = summary.outcome.turns(), "arena closed without a champion"),
    }
    Ok(())
}
