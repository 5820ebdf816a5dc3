use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use snake::game::SnakeGame;
use snake::logger;
use snake::settings::Settings;

#[derive(Parser)]
#[command(name = "snake", about = "Snake on a wrap-around grid")]
struct Args {
    /// YAML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement and starting directions
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    ticks_per_second: Option<u32>,

    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    /// Write the resolved settings as YAML to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Log every turn request
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(&args.log_file, args.verbose)?;

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(tps) = args.ticks_per_second {
        settings.ticks_per_second = tps;
    }
    settings
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid settings: {}", e))?;

    if let Some(path) = &args.write_config {
        settings.save(path)?;
        info!("Settings written to {}", path.display());
        return Ok(());
    }

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut game = SnakeGame::new(&settings, seed).context("Failed to open the display")?;

    // Dropping the game restores the terminal before main returns.
    game.play().context("Display error")?;
    info!("Bye");
    Ok(())
}
