//! ortho_draughts self-play driver
//!
//! Plays engine moves from a position and prints the board after each one.

use clap::{Parser, ValueEnum};
use ortho_draughts::{Color, Engine, GameConfig, START_POSITION};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Yellow,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Yellow => Color::Yellow,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board encoding, top row first
    #[arg(short, long, default_value_t = String::from(START_POSITION))]
    position: String,

    /// Side to move
    #[arg(short, long, value_enum, default_value_t = Side::Black)]
    side: Side,

    #[arg(long, default_value_t = 8)]
    width: u8,

    #[arg(long, default_value_t = 8)]
    height: u8,

    /// Search depth in plies
    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Number of engine moves to play
    #[arg(long, default_value_t = 20)]
    plies: u32,

    /// Transposition cache capacity in entries
    #[arg(long, default_value_t = 1_000_000)]
    cache_capacity: usize,
}

fn main() -> ExitCode {
    ortho_draughts::logging::init();

    let args = Args::parse();
    let config = GameConfig::new()
        .width(args.width)
        .height(args.height)
        .initial_position(args.position)
        .starting_side(args.side.into())
        .search_depth(args.depth)
        .cache_capacity(args.cache_capacity);

    let mut engine = match Engine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}\n", engine.position());

    for ply in 1..=args.plies {
        let side = engine.position().side_to_move();
        let played = match engine.play_best_move() {
            Ok(played) => played,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        };
        let Some((mv, counts)) = played else {
            println!("{side} has no legal move and loses");
            break;
        };

        let stats = engine.search_engine().stats();
        println!(
            "{ply}. {side}: {mv}  (nodes {}, {} nps, cache {})",
            stats.nodes,
            stats.nps(),
            engine.cache_len()
        );
        println!("{}", engine.position());
        println!(
            "yellow {} ({} kings), black {} ({} kings)\n",
            counts.yellow, counts.yellow_kings, counts.black, counts.black_kings
        );

        if let Some(winner) = counts.winner() {
            println!("{winner} wins");
            break;
        }
    }

    println!("final position: {}", engine.position().to_encoding());
    ExitCode::SUCCESS
}
