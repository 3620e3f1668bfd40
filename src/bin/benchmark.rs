use anyhow::{bail, Context, Result};
use clap::Parser;
use eight_puzzle_bench::benchmark::{run_all, summarize};
use eight_puzzle_bench::engine::State;
use eight_puzzle_bench::heuristics::{manhattan, misplaced_tiles, Heuristic};
use eight_puzzle_bench::metrics::SystemProbe;
use eight_puzzle_bench::report::{render_summary, render_table, to_json_lines};
use eight_puzzle_bench::solver::{SearchConfig, Strategy, DEFAULT_DEPTH_LIMIT};
use eight_puzzle_bench::utils::parse_instances;
use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Benchmark BFS, DFS, greedy and A* on 8-puzzle instances", long_about = None)]
struct Args {
    /// File with one instance per line (9 comma- or space-separated values, optional header)
    instances: Option<PathBuf>,

    /// Generate this many random instances instead of reading a file
    #[clap(long, conflicts_with = "instances")]
    random: Option<usize>,

    /// Seed of the first random instance; later ones use consecutive seeds
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Length of the random walk used to scramble each generated instance
    #[clap(long, default_value_t = 20)]
    scramble: usize,

    /// Strategies to run (bfs, dfs, greedy, astar); defaults to all four
    #[clap(short, long = "strategy")]
    strategies: Vec<Strategy>,

    /// Depth limit for DFS
    #[clap(short, long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth: usize,

    /// Give up on a single search after this many milliseconds
    #[clap(long)]
    time_budget_ms: Option<u64>,

    /// Use the misplaced-tiles heuristic instead of Manhattan distance
    #[clap(long)]
    misplaced: bool,

    /// Emit JSON lines instead of a table
    #[clap(long)]
    json: bool,
}

fn load_instances(args: &Args) -> Result<Vec<State>> {
    if let Some(count) = args.random {
        return Ok((0..count as u64)
            .map(|i| State::scrambled(args.seed + i, args.scramble))
            .collect());
    }
    let Some(path) = &args.instances else {
        bail!("either an instance file or --random must be given");
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let states = parse_instances(&content)
        .with_context(|| format!("invalid instance file {}", path.display()))?;
    info!("loaded {} instances from {}", states.len(), path.display());
    Ok(states)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let instances = load_instances(&args)?;
    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies.clone()
    };
    let heuristic: Heuristic = if args.misplaced { misplaced_tiles } else { manhattan };
    let config = SearchConfig {
        depth_limit: args.depth,
        time_budget: args.time_budget_ms.map(Duration::from_millis),
        record_path: false,
        heuristic,
    };

    let probe = SystemProbe::new();
    let reports = run_all(instances, &strategies, &config, &probe);

    if args.json {
        print!("{}", to_json_lines(&reports)?);
    } else {
        println!("{}", render_table(&reports));
        print!("{}", render_summary(&summarize(&reports)));
    }
    Ok(())
}
