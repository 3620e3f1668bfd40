//! Board model for the 3x3 sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `State`: an immutable 3x3 board stored row-major, `0` being the blank.
//! - `Direction`: the four ways the blank can slide, with their index offsets.
//! - `GOAL`: the single target configuration shared by every search.
//!
//! Move generation is pure: `State::apply_move` and `State::neighbors` build new
//! states and never touch the receiver.
use crate::error::{InvalidStateError, ParseError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Width (and height) of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, blank included.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The configuration every search is trying to reach.
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 .
/// ```
pub const GOAL: State = State {
    tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
};

/// A direction in which the blank slides.
///
/// The declaration order is significant: neighbours are always generated
/// `Up`, `Down`, `Left`, `Right`, and that order decides which of several
/// equal-cost paths a search reports first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in generation order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Linear index offset applied to the blank's position.
    pub const fn offset(self) -> isize {
        match self {
            Direction::Up => -3,
            Direction::Down => 3,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// Blank positions from which this direction would leave the board.
    pub const fn forbidden(self) -> [usize; 3] {
        match self {
            Direction::Up => [0, 1, 2],
            Direction::Down => [6, 7, 8],
            Direction::Left => [0, 3, 6],
            Direction::Right => [2, 5, 8],
        }
    }

    /// The direction that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_bench::engine::Direction;
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A board configuration.
///
/// Holds a permutation of `0..=8` in row-major order. Values are validated once,
/// at construction; every state produced by `apply_move` is a permutation by
/// construction, so the search code never re-checks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    tiles: [u8; CELL_COUNT],
}

impl State {
    /// Creates a state from nine tile values, checking that they form a permutation of `0..=8`.
    ///
    /// # Returns
    /// * `Ok(State)` for a valid board.
    /// * `Err(InvalidStateError::OutOfRange)` if a value is greater than 8.
    /// * `Err(InvalidStateError::DuplicateTile)` if a value repeats (which also
    ///   covers a missing blank).
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_bench::engine::{State, GOAL};
    /// let state = State::new([1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    /// assert_eq!(state, GOAL);
    /// assert!(State::new([1, 1, 3, 4, 5, 6, 7, 8, 0]).is_err());
    /// ```
    pub fn new(tiles: [u8; CELL_COUNT]) -> Result<Self, InvalidStateError> {
        let mut seen = [false; CELL_COUNT];
        for &value in &tiles {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(InvalidStateError::OutOfRange(value))?;
            if *slot {
                return Err(InvalidStateError::DuplicateTile(value));
            }
            *slot = true;
        }
        Ok(State { tiles })
    }

    /// Returns the tiles in row-major order.
    pub fn tiles(&self) -> &[u8; CELL_COUNT] {
        &self.tiles
    }

    /// Copies the tiles out, usable in `const` contexts.
    pub const fn to_array(self) -> [u8; CELL_COUNT] {
        self.tiles
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `BOARD_SIZE`.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.tiles[r * BOARD_SIZE + c]
    }

    /// Index of the blank in row-major order.
    pub fn blank_index(&self) -> usize {
        // A validated state always contains exactly one blank.
        self.tiles.iter().position(|&t| t == 0).unwrap_or(0)
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Slides the blank one cell in `direction`.
    ///
    /// # Returns
    /// * `Some(State)` holding the new board, with the blank swapped with the tile
    ///   at `blank + direction.offset()`.
    /// * `None` if the blank sits in the direction's forbidden set (the move would
    ///   leave the board).
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_bench::engine::{Direction, GOAL};
    /// // The goal's blank is in the bottom-right corner.
    /// assert!(GOAL.apply_move(Direction::Down).is_none());
    /// assert!(GOAL.apply_move(Direction::Right).is_none());
    /// let moved = GOAL.apply_move(Direction::Left).unwrap();
    /// assert_eq!(moved.tiles(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
    /// ```
    pub fn apply_move(&self, direction: Direction) -> Option<State> {
        let blank = self.blank_index();
        if direction.forbidden().contains(&blank) {
            return None;
        }
        let target = blank.checked_add_signed(direction.offset())?;
        let mut tiles = self.tiles;
        tiles.swap(blank, target);
        Some(State { tiles })
    }

    /// Returns every state reachable with one move, in `Direction::ALL` order.
    ///
    /// The result never contains `self` and holds between two and four states.
    pub fn neighbors(&self) -> Vec<State> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.apply_move(d))
            .collect()
    }

    /// Whether the goal can be reached from this state at all.
    ///
    /// On a 3-wide board a configuration is solvable exactly when the number of
    /// inversions among the non-blank tiles is even.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        let mut inversions = 0;
        for (i, &a) in tiles.iter().enumerate() {
            inversions += tiles[i + 1..].iter().filter(|&&b| b < a).count();
        }
        inversions % 2 == 0
    }

    /// Generates a solvable instance by walking `moves` random steps away from `GOAL`.
    ///
    /// The walk uses a `SmallRng` seeded with `seed`, so the same arguments always
    /// yield the same board. A step never immediately undoes the previous one,
    /// although longer cycles can still bring the walk back closer to the goal.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_bench::engine::State;
    /// let a = State::scrambled(7, 20);
    /// assert_eq!(a, State::scrambled(7, 20));
    /// assert!(a.is_solvable());
    /// ```
    pub fn scrambled(seed: u64, moves: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = GOAL;
        let mut previous: Option<Direction> = None;

        for _ in 0..moves {
            let candidates: Vec<(Direction, State)> = Direction::ALL
                .iter()
                .filter(|&&d| previous.map_or(true, |p| d != p.opposite()))
                .filter_map(|&d| state.apply_move(d).map(|next| (d, next)))
                .collect();
            // Every blank position has at least two legal moves, so one survives the filter.
            let (direction, next) = candidates[rng.gen_range(0..candidates.len())];
            state = next;
            previous = Some(direction);
        }
        state
    }
}

impl TryFrom<&[u8]> for State {
    type Error = InvalidStateError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let tiles: [u8; CELL_COUNT] = values
            .try_into()
            .map_err(|_| InvalidStateError::WrongLength(values.len()))?;
        State::new(tiles)
    }
}

impl FromStr for State {
    type Err = ParseError;

    /// Parses nine comma- or whitespace-separated integers, e.g. `"1,2,3,4,5,6,7,0,8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::parse_row(s, 1)
    }
}

/// Lexicographic order over the tile sequence.
///
/// Priority frontiers fall back to this order when two entries carry the same
/// priority, which makes the expansion order (and therefore the reported
/// visited counts) reproducible from run to run.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tiles.cmp(&other.tiles)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            let row: Vec<String> = (0..BOARD_SIZE)
                .map(|c| match self.get_tile(r, c) {
                    0 => ".".to_string(),
                    t => t.to_string(),
                })
                .collect();
            write!(f, "{}", row.join(" "))?;
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
