mod config;
mod game;
mod input;
mod ui;

use clap::{Parser, ValueEnum};
use tictactoe_engine::{Difficulty, SessionRng, log, logger};

use config::FirstPlayer;

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// AI difficulty; overrides the config file
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Who makes the first move; overrides the config file
    #[arg(long, value_enum)]
    first: Option<FirstPlayer>,

    /// RNG seed, for reproducible easy and medium games
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,
}

fn main() {
    let args = Args::parse();
    logger::init_logger(None);

    let config = match config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log!("{}", e);
            std::process::exit(1);
        }
    };

    let difficulty = args
        .difficulty
        .map(Difficulty::from)
        .unwrap_or(config.difficulty);
    let first_player = args.first.unwrap_or(config.first_player);
    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!("Starting {:?} game, session seed {}", difficulty, rng.seed());

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    if let Err(e) = game::run(difficulty, first_player, &mut rng, &mut input) {
        log!("Game aborted: {}", e);
        std::process::exit(1);
    }
}
