use crate::engine::State;
use crate::frontier::{path_length, path_to, MinFrontier, PriorityEntry, SearchRecord};
use crate::heuristics::{manhattan, Heuristic};
use log::{debug, trace};
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Default depth bound for `dfs`.
pub const DEFAULT_DEPTH_LIMIT: usize = 50;

/// Tunables shared by every strategy.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// Popped DFS entries deeper than this are discarded without expansion.
    pub depth_limit: usize,
    /// Stop with `Outcome::TimedOut` once a search has run this long.
    /// `None` searches until the goal is found or the frontier is exhausted.
    pub time_budget: Option<Duration>,
    /// Keep the full list of states from the initial state to the goal in `Outcome::Found`.
    pub record_path: bool,
    /// Estimate used by `Strategy::Greedy` and `Strategy::AStar`.
    pub heuristic: Heuristic,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            time_budget: None,
            record_path: false,
            heuristic: manhattan,
        }
    }
}

/// How a single search ended.
///
/// Exhausting the frontier is an ordinary result, so callers have to match on
/// the variant before reading any counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found {
        /// Moves from the initial state to the goal, as given by the predecessor links.
        moves: usize,
        /// Size of the visited set when the goal was popped.
        visited: usize,
        /// States from initial to goal; only filled in when `SearchConfig::record_path` is set.
        path: Option<Vec<State>>,
    },
    NotFound,
    TimedOut {
        visited: usize,
    },
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }

    /// Number of moves, if the goal was reached.
    pub fn moves(&self) -> Option<usize> {
        match self {
            Outcome::Found { moves, .. } => Some(*moves),
            _ => None,
        }
    }

    /// Number of visited states, if the search did not simply run dry.
    pub fn visited(&self) -> Option<usize> {
        match self {
            Outcome::Found { visited, .. } | Outcome::TimedOut { visited } => Some(*visited),
            Outcome::NotFound => None,
        }
    }
}

/// The four traversal policies over the puzzle graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Bfs,
    Dfs,
    Greedy,
    AStar,
}

impl Strategy {
    /// All strategies, in the order reports list them.
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// Short label used in report headers.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Greedy => "Greedy",
            Strategy::AStar => "A*",
        }
    }

    /// Runs this strategy from `initial`.
    pub fn run(self, initial: State, config: &SearchConfig) -> Outcome {
        match self {
            Strategy::Bfs => bfs(initial, config),
            Strategy::Dfs => dfs(initial, config),
            Strategy::Greedy => greedy(initial, config, config.heuristic),
            Strategy::AStar => astar(initial, config, config.heuristic),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "greedy" => Ok(Strategy::Greedy),
            "astar" | "a*" => Ok(Strategy::AStar),
            other => Err(format!(
                "unknown strategy '{}' (expected bfs, dfs, greedy or astar)",
                other
            )),
        }
    }
}

/// Wall-clock limit checked once per pop.
struct Deadline {
    started: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    fn start(budget: Option<Duration>) -> Self {
        Deadline {
            started: Instant::now(),
            budget,
        }
    }

    fn expired(&self) -> bool {
        self.budget
            .map_or(false, |budget| self.started.elapsed() >= budget)
    }
}

fn found(record: &SearchRecord, goal: State, config: &SearchConfig) -> Outcome {
    let moves = path_length(record.predecessors(), &goal);
    let visited = record.visited_count();
    debug!("goal reached: {} moves, {} states visited", moves, visited);
    Outcome::Found {
        moves,
        visited,
        path: config
            .record_path
            .then(|| path_to(record.predecessors(), &goal)),
    }
}

fn timed_out(record: &SearchRecord) -> Outcome {
    debug!(
        "time budget exhausted after visiting {} states",
        record.visited_count()
    );
    Outcome::TimedOut {
        visited: record.visited_count(),
    }
}

fn exhausted(record: &SearchRecord) -> Outcome {
    debug!(
        "frontier exhausted after visiting {} states",
        record.visited_count()
    );
    Outcome::NotFound
}

/// Breadth-first search.
///
/// States are marked visited when enqueued (the initial state up front), so each
/// one enters the queue at most once. Expansion is level by level, so the first
/// time the goal is dequeued its move count is the shortest possible.
pub fn bfs(initial: State, config: &SearchConfig) -> Outcome {
    debug!("bfs from {:?}", initial.tiles());
    let deadline = Deadline::start(config.time_budget);
    let mut record = SearchRecord::new();
    let mut queue = VecDeque::from([initial]);
    record.mark_visited(initial);

    while let Some(current) = queue.pop_front() {
        if deadline.expired() {
            return timed_out(&record);
        }
        if current.is_goal() {
            return found(&record, current, config);
        }
        for next in current.neighbors() {
            if record.mark_visited(next) {
                record.set_predecessor(next, current);
                queue.push_back(next);
            }
        }
    }
    exhausted(&record)
}

/// Depth-limited depth-first search.
///
/// Works on an explicit stack of `(state, depth)` pairs. A state is marked
/// visited when popped, not when pushed, so the stack may hold several entries
/// for the same state; the later ones are skipped. Entries deeper than
/// `config.depth_limit` are dropped without expansion.
///
/// Neither optimality nor completeness is guaranteed: a state first reached on
/// a deep branch stays visited even if a shallower route to it turns up later.
pub fn dfs(initial: State, config: &SearchConfig) -> Outcome {
    debug!(
        "dfs from {:?} (depth limit {})",
        initial.tiles(),
        config.depth_limit
    );
    let deadline = Deadline::start(config.time_budget);
    let mut record = SearchRecord::new();
    let mut stack = vec![(initial, 0usize)];

    while let Some((current, depth)) = stack.pop() {
        if deadline.expired() {
            return timed_out(&record);
        }
        if depth > config.depth_limit {
            trace!("pruned {:?} at depth {}", current.tiles(), depth);
            continue;
        }
        if !record.mark_visited(current) {
            continue;
        }
        if current.is_goal() {
            return found(&record, current, config);
        }
        for next in current.neighbors() {
            if !record.is_visited(&next) {
                record.set_predecessor(next, current);
                stack.push((next, depth + 1));
            }
        }
    }
    exhausted(&record)
}

/// Greedy best-first search.
///
/// Always expands the frontier state with the lowest `heuristic` value, ties
/// going to the lexicographically smallest state. Visited marking happens on
/// dequeue; entries for states that were closed after being pushed are skipped.
pub fn greedy(initial: State, config: &SearchConfig, heuristic: Heuristic) -> Outcome {
    debug!("greedy from {:?}", initial.tiles());
    let deadline = Deadline::start(config.time_budget);
    let mut record = SearchRecord::new();
    let mut frontier = MinFrontier::new();
    frontier.push(heuristic(&initial), initial);

    while let Some(PriorityEntry { state: current, .. }) = frontier.pop() {
        if deadline.expired() {
            return timed_out(&record);
        }
        if !record.mark_visited(current) {
            continue;
        }
        if current.is_goal() {
            return found(&record, current, config);
        }
        for next in current.neighbors() {
            if !record.is_visited(&next) {
                frontier.push(heuristic(&next), next);
                record.set_predecessor(next, current);
            }
        }
    }
    exhausted(&record)
}

/// A* search with unit move cost.
///
/// Keeps the best known cost `g` of every discovered state. Whenever a neighbour
/// is reached more cheaply its cost and predecessor are updated and it is pushed
/// again with priority `g + heuristic`; the older, worse entry stays in the heap
/// and is skipped once its state has been closed. With a consistent heuristic
/// the first time the goal is popped its move count is optimal.
pub fn astar(initial: State, config: &SearchConfig, heuristic: Heuristic) -> Outcome {
    debug!("astar from {:?}", initial.tiles());
    let deadline = Deadline::start(config.time_budget);
    let mut record = SearchRecord::new();
    let mut frontier = MinFrontier::new();
    let mut g_cost: HashMap<State, u32> = HashMap::from([(initial, 0)]);
    frontier.push(heuristic(&initial), initial);

    while let Some(PriorityEntry { state: current, .. }) = frontier.pop() {
        if deadline.expired() {
            return timed_out(&record);
        }
        if !record.mark_visited(current) {
            continue;
        }
        if current.is_goal() {
            return found(&record, current, config);
        }
        let Some(&g) = g_cost.get(&current) else {
            continue;
        };
        for next in current.neighbors() {
            let tentative = g + 1;
            if g_cost.get(&next).map_or(true, |&known| tentative < known) {
                g_cost.insert(next, tentative);
                record.set_predecessor(next, current);
                frontier.push(tentative + heuristic(&next), next);
            }
        }
    }
    exhausted(&record)
}
