//! Arena CLI
//!
//! Run matches between engines, query the tiered AI and count perft nodes.

use std::path::PathBuf;

use anyhow::{bail, Context};
use arena::{MatchConfig, MatchRunner};
use chess_ai::{Difficulty, TieredEngine};
use chess_core::{perft_divide, Board, Color, Engine};
use clap::{Parser, Subcommand};
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arena", about = "Chess rules engine, tiered AI and match runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match between two engines
    Match {
        /// First engine: classical, random, easy, medium or hard
        engine1: String,
        /// Second engine
        engine2: String,
        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,
        /// Search depth for the classical engine
        #[arg(short, long)]
        depth: Option<u8>,
        /// Plies before a game is drawn
        #[arg(long)]
        max_plies: Option<u32>,
        /// Seed for random and tiered engines
        #[arg(long)]
        seed: Option<u64>,
        /// TOML file with match settings, flags take precedence
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the JSON report here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Pick a move for one side at a difficulty level
    Bestmove {
        /// Piece placement field of a FEN string
        #[arg(long, default_value = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")]
        placement: String,
        #[arg(long, default_value = "white")]
        color: Color,
        #[arg(long)]
        difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Count leaf nodes from the initial position
    Perft {
        #[arg(short, long, default_value_t = 3)]
        depth: u8,
    },
}

fn create_engine(spec: &str, seed: Option<u64>) -> anyhow::Result<Box<dyn Engine>> {
    let engine: Box<dyn Engine> = match spec.to_lowercase().as_str() {
        "classical" | "classic" => Box::new(ClassicalEngine::new()),
        "random" => Box::new(match seed {
            Some(seed) => RandomEngine::seeded(seed),
            None => RandomEngine::new(),
        }),
        tier => {
            let difficulty: Difficulty = tier
                .parse()
                .with_context(|| format!("unknown engine '{spec}'"))?;
            Box::new(match seed {
                Some(seed) => TieredEngine::seeded(difficulty, seed),
                None => TieredEngine::new(difficulty),
            })
        }
    };
    Ok(engine)
}

fn run_match(
    engine1_spec: &str,
    engine2_spec: &str,
    config: MatchConfig,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    info!(
        "Match: {} vs {}, {} games, depth {}, max {} plies",
        engine1_spec, engine2_spec, config.num_games, config.depth, config.max_plies
    );

    if config.num_games == 0 {
        bail!("a match needs at least one game");
    }

    let seed = config.seed;
    let mut engine1 = create_engine(engine1_spec, seed)?;
    let mut engine2 = create_engine(engine2_spec, seed.map(|s| s.wrapping_add(1)))?;

    let runner = MatchRunner::new(config);
    let report = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, report.result.wins, report.result.losses, report.result.draws
    );
    println!("Score: {:.1}%", report.score * 100.0);

    if let Some(path) = output {
        report
            .save(&path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!("Report written to {}", path.display());
    }
    Ok(())
}

fn run_bestmove(
    placement: &str,
    color: Color,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let board = Board::from_placement(placement).context("invalid placement")?;
    board.validate().context("invalid board")?;
    println!("{board}");

    let mut engine = match seed {
        Some(seed) => TieredEngine::seeded(difficulty, seed),
        None => TieredEngine::new(difficulty),
    };
    let result = engine.search(&board, color, Default::default());
    match result.best_move {
        Some(mv) => println!(
            "bestmove {} (depth {}, score {}, nodes {})",
            mv, result.depth, result.score, result.nodes
        ),
        None => println!("bestmove none ({} has no legal move)", color),
    }
    Ok(())
}

fn run_perft(depth: u8) {
    let board = Board::initial();
    let start = std::time::Instant::now();
    let divide = perft_divide(&board, Color::White, depth);
    for (mv, nodes) in &divide {
        println!("{mv}: {nodes}");
    }
    let total: u64 = divide.iter().map(|(_, n)| n).sum();
    println!("perft({depth}) = {total} in {:.3?}", start.elapsed());
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Match {
            engine1,
            engine2,
            games,
            depth,
            max_plies,
            seed,
            config,
            output,
        } => {
            let mut match_config = match config {
                Some(path) => MatchConfig::load(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => MatchConfig::default(),
            };
            if let Some(games) = games {
                match_config.num_games = games;
            }
            if let Some(depth) = depth {
                match_config.depth = depth;
            }
            if let Some(max_plies) = max_plies {
                match_config.max_plies = max_plies;
            }
            if seed.is_some() {
                match_config.seed = seed;
            }
            run_match(&engine1, &engine2, match_config, output)
        }
        Command::Bestmove {
            placement,
            color,
            difficulty,
            seed,
        } => run_bestmove(&placement, color, difficulty, seed),
        Command::Perft { depth } => {
            run_perft(depth);
            Ok(())
        }
    }
}
