use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use gridsnake::config::{Difficulty, GameConfig};
use gridsnake::game::SnakeGame;
use gridsnake::Result;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "gridsnake", about = "Snake on a 40x30 grid in your terminal")]
struct Args {
    /// 1 (Easy), 2 (Medium) or 3 (Hard); asked for interactively when omitted
    #[arg(short, long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Seed for food placement, for a repeatable game
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "gridsnake.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = init_logging(&args.log_file, level) {
        eprintln!("Warning: logging disabled, {}: {}", args.log_file.display(), e);
    }

    // The prompt has to happen before the terminal goes raw
    let difficulty = match args.difficulty {
        Some(difficulty) => difficulty,
        None => prompt_difficulty()?,
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("starting with difficulty {}", difficulty);
    let mut game = SnakeGame::new(GameConfig::new(difficulty), rng)?;
    game.run()
}

/// A log file that cannot be created only costs us the log, not the game.
fn init_logging(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

fn prompt_difficulty() -> Result<Difficulty> {
    print!("Choose difficulty (1 - Easy, 2 - Medium, 3 - Hard): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    line.parse()
}

fn parse_difficulty(s: &str) -> std::result::Result<Difficulty, String> {
    s.parse().map_err(|e: gridsnake::Error| e.to_string())
}
