use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle_bench::benchmark::run_strategy;
use eight_puzzle_bench::engine::State;
use eight_puzzle_bench::heuristics::manhattan;
use eight_puzzle_bench::metrics::SystemProbe;
use eight_puzzle_bench::solver::{Outcome, SearchConfig, Strategy, DEFAULT_DEPTH_LIMIT};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve a single 8-puzzle board", long_about = None)]
struct Args {
    /// The board as 9 values in row-major order, 0 for the blank (e.g. "1,2,3,4,5,6,7,0,8")
    board: String,

    /// Strategies to run (bfs, dfs, greedy, astar); defaults to all four
    #[clap(short, long = "strategy")]
    strategies: Vec<Strategy>,

    /// Depth limit for DFS
    #[clap(short, long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth: usize,

    /// Print every board on the path to the goal
    #[clap(long)]
    show_path: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let initial: State = args
        .board
        .parse()
        .with_context(|| format!("invalid board '{}'", args.board))?;
    println!("Initial board (heuristic {}):\n{}\n", manhattan(&initial), initial);
    if !initial.is_solvable() {
        println!("This board cannot reach the goal; complete searches will exhaust the state space.\n");
    }

    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies.clone()
    };
    let config = SearchConfig {
        depth_limit: args.depth,
        record_path: args.show_path,
        ..SearchConfig::default()
    };
    let probe = SystemProbe::new();

    for strategy in strategies {
        let report = run_strategy(1, initial, strategy, &config, &probe);
        match &report.outcome {
            Outcome::Found { moves, visited, path } => {
                println!(
                    "{}: {} moves, {} states visited, {:.4}s",
                    strategy,
                    moves,
                    visited,
                    report.elapsed.as_secs_f64()
                );
                if let Some(path) = path {
                    for (i, board) in path.iter().enumerate().skip(1) {
                        println!("  Move {}:\n{}\n", i, board);
                    }
                }
            }
            Outcome::NotFound => println!("{}: not found", strategy),
            Outcome::TimedOut { visited } => {
                println!("{}: timed out after {} states", strategy, visited)
            }
        }
    }
    Ok(())
}
