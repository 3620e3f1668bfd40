//! Traversal bookkeeping shared by the search strategies.
//!
//! - `PriorityEntry` / `MinFrontier`: a min-priority queue whose ties are broken
//!   by the lexicographic order of `State`, so informed searches expand states in
//!   a reproducible order.
//! - `SearchRecord`: the visited set and predecessor map of one search run.
//! - `path_length` / `path_to`: walk predecessor links back from the goal.
use crate::engine::State;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// A frontier entry: a state and the priority it was pushed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriorityEntry {
    pub priority: u32,
    pub state: State,
}

/// Orders by `priority`, then by `State::cmp` (lexicographic over the tiles).
impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.state.cmp(&other.state))
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of states.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop the
/// lowest priority first. The same state may be pushed several times with
/// different priorities; callers are expected to skip stale entries when they
/// pop them.
#[derive(Debug, Default)]
pub struct MinFrontier {
    heap: BinaryHeap<Reverse<PriorityEntry>>,
    high_water: usize,
}

impl MinFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, priority: u32, state: State) {
        self.heap.push(Reverse(PriorityEntry { priority, state }));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Removes and returns the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<PriorityEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of entries held at once.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Visited set and predecessor links for a single search run.
///
/// Created fresh by each strategy and dropped when it returns. The run's initial
/// state is never given a predecessor, which is what terminates path walks.
#[derive(Debug, Default)]
pub struct SearchRecord {
    visited: HashSet<State>,
    predecessors: HashMap<State, State>,
}

impl SearchRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `state` as visited. Returns `false` if it already was.
    pub fn mark_visited(&mut self, state: State) -> bool {
        self.visited.insert(state)
    }

    pub fn is_visited(&self, state: &State) -> bool {
        self.visited.contains(state)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Records that `state` was reached from `parent`, replacing any earlier link.
    pub fn set_predecessor(&mut self, state: State, parent: State) {
        self.predecessors.insert(state, parent);
    }

    pub fn predecessors(&self) -> &HashMap<State, State> {
        &self.predecessors
    }
}

/// Counts the moves from the run's initial state to `goal`.
///
/// Follows predecessor links starting at `goal` until reaching a state with no
/// entry, which is the initial state. Returns `0` when `goal` itself has no entry
/// (the search started on the goal).
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use eight_puzzle_bench::engine::{Direction, GOAL};
/// use eight_puzzle_bench::frontier::path_length;
///
/// let start = GOAL.apply_move(Direction::Up).unwrap();
/// let predecessors = HashMap::from([(GOAL, start)]);
/// assert_eq!(path_length(&predecessors, &GOAL), 1);
/// assert_eq!(path_length(&HashMap::new(), &GOAL), 0);
/// ```
pub fn path_length(predecessors: &HashMap<State, State>, goal: &State) -> usize {
    let mut steps = 0;
    let mut current = goal;
    while let Some(parent) = predecessors.get(current) {
        current = parent;
        steps += 1;
    }
    steps
}

/// Materialises the path from the run's initial state to `goal`, both included.
pub fn path_to(predecessors: &HashMap<State, State>, goal: &State) -> Vec<State> {
    let mut path = vec![*goal];
    let mut current = goal;
    while let Some(parent) = predecessors.get(current) {
        path.push(*parent);
        current = parent;
    }
    path.reverse();
    path
}
