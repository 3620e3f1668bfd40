use crate::engine::{State, BOARD_SIZE, CELL_COUNT, GOAL};

/// Estimate of the number of moves left between a state and `GOAL`.
///
/// Greedy best-first and A* take the heuristic as a plain function pointer so
/// callers can swap estimates without touching the strategies.
pub type Heuristic = fn(&State) -> u32;

/// Goal index of every tile value, derived from `GOAL` at compile time.
const GOAL_INDEX: [usize; CELL_COUNT] = goal_index();

const fn goal_index() -> [usize; CELL_COUNT] {
    let tiles = GOAL.to_array();
    let mut index = [0; CELL_COUNT];
    let mut i = 0;
    while i < CELL_COUNT {
        index[tiles[i] as usize] = i;
        i += 1;
    }
    index
}

/// Computes the Manhattan distance of `state` from `GOAL`.
///
/// For every tile except the blank, adds the number of rows plus the number of
/// columns separating its current cell from its goal cell. A single move shifts
/// exactly one tile by one cell, so the estimate never overestimates the true
/// distance (admissible) and changes by exactly one per move (consistent).
///
/// # Arguments
/// * `state`: The board to evaluate.
///
/// # Returns
/// The summed distance as `u32`; `0` if and only if `state` is the goal.
///
/// # Examples
/// ```
/// use eight_puzzle_bench::engine::{State, GOAL};
/// use eight_puzzle_bench::heuristics::manhattan;
/// assert_eq!(manhattan(&GOAL), 0);
/// let one_away = State::new([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
/// assert_eq!(manhattan(&one_away), 1);
/// ```
pub fn manhattan(state: &State) -> u32 {
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(i, &tile)| {
            let target = GOAL_INDEX[usize::from(tile)];
            let rows = (i / BOARD_SIZE).abs_diff(target / BOARD_SIZE);
            let cols = (i % BOARD_SIZE).abs_diff(target % BOARD_SIZE);
            (rows + cols) as u32
        })
        .sum()
}

/// Counts the non-blank tiles that are not on their goal cell.
///
/// Weaker than `manhattan` (it never exceeds it) but still admissible. Useful as a
/// point of comparison when benchmarking the informed strategies.
pub fn misplaced_tiles(state: &State) -> u32 {
    state
        .tiles()
        .iter()
        .zip(GOAL.tiles())
        .filter(|&(&tile, &goal)| tile != 0 && tile != goal)
        .count() as u32
}
