use clap::{Parser, ValueEnum};
use ortho_draughts::{generate_moves, Color, Position, RayTable, START_POSITION};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Yellow,
    Black,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Count legal move tree leaves", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_POSITION))]
    position: String,

    #[arg(short, long, value_enum, default_value_t = Side::Black)]
    side: Side,

    #[arg(long, default_value_t = 8)]
    width: u8,

    #[arg(long, default_value_t = 8)]
    height: u8,

    #[arg(short, long, default_value_t = 4)]
    depth: u8,
}

fn main() {
    ortho_draughts::logging::init();
    let args = Args::parse();

    let side = match args.side {
        Side::Yellow => Color::Yellow,
        Side::Black => Color::Black,
    };
    let pos = Position::from_encoding(&args.position, args.width, args.height, side);
    let rays = RayTable::new(args.width, args.height);

    println!("Running perft on '{}' ({} to move) at depth {}", args.position, side, args.depth);

    let start = std::time::Instant::now();
    for depth in 1..=args.depth {
        let nodes = perft(&pos, &rays, depth);
        println!("perft({}) = {} nodes ({} ms)", depth, nodes, start.elapsed().as_millis());
    }
}

fn perft(pos: &Position, rays: &RayTable, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mv in generate_moves(pos, rays) {
        let mut next = pos.clone();
        next.make_move(&mv);
        nodes += perft(&next, rays, depth - 1);
    }
    nodes
}
