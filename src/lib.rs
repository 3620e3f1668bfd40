//! # 8-Puzzle Search Benchmark Library
//!
//! This library models the 3x3 sliding-tile puzzle and compares four classical
//! state-space searches on it: breadth-first, depth-limited depth-first, greedy
//! best-first and A*. Each run reports the solution length, the number of states
//! visited, wall-clock time and the change in resident memory.
//!
//! It is used by two binaries:
//! - `benchmark`: Loads instances from a file (or generates seeded scrambles),
//!   runs the selected strategies on each and prints a results table.
//! - `solve`: Solves a single board given on the command line, optionally
//!   printing every intermediate board.
//!
//! ## Modules
//! - `engine`: Board representation (`State`), moves (`Direction`) and the `GOAL` constant.
//! - `heuristics`: Distance estimates used by the informed strategies.
//! - `frontier`: Priority frontier, visited set and predecessor-based path reconstruction.
//! - `solver`: The four search strategies and their configuration and outcome types.
//! - `metrics`: Clock and memory sampling behind the `Probe` trait.
//! - `benchmark`: Runs strategies over instances and collects `RunReport`s.
//! - `report`: Text table and JSON rendering of reports.
//! - `utils`: Parsing of instance files.
//! - `error`: Error types for board construction and parsing.

pub mod benchmark;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod metrics;
pub mod report;
pub mod solver;
pub mod utils;
