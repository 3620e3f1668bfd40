//! Drives the strategies over puzzle instances and collects their metrics.
//!
//! Nothing here searches: each run is `Strategy::run` wrapped in
//! `metrics::measure`, packaged into a `RunReport`.
use crate::engine::State;
use crate::metrics::{measure, Probe};
use crate::solver::{Outcome, SearchConfig, Strategy};
use log::info;
use std::time::Duration;

/// Result of one strategy on one instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// 1-based position of the instance in the input.
    pub instance: usize,
    pub strategy: Strategy,
    pub outcome: Outcome,
    pub elapsed: Duration,
    pub memory_delta: Option<i64>,
}

/// Runs `strategy` on `initial` under `probe`.
pub fn run_strategy(
    instance: usize,
    initial: State,
    strategy: Strategy,
    config: &SearchConfig,
    probe: &impl Probe,
) -> RunReport {
    let measured = measure(probe, || strategy.run(initial, config));
    RunReport {
        instance,
        strategy,
        outcome: measured.value,
        elapsed: measured.elapsed,
        memory_delta: measured.memory_delta,
    }
}

/// Runs each of `strategies`, in order, on one instance.
pub fn run_instance(
    instance: usize,
    initial: State,
    strategies: &[Strategy],
    config: &SearchConfig,
    probe: &impl Probe,
) -> Vec<RunReport> {
    strategies
        .iter()
        .map(|&strategy| run_strategy(instance, initial, strategy, config, probe))
        .collect()
}

/// Runs every strategy on every instance, one after the other.
///
/// Instances are numbered from 1 in iteration order. The returned reports are
/// grouped by instance, strategies in the order given.
pub fn run_all<I>(
    instances: I,
    strategies: &[Strategy],
    config: &SearchConfig,
    probe: &impl Probe,
) -> Vec<RunReport>
where
    I: IntoIterator<Item = State>,
{
    let mut reports = Vec::new();
    for (i, initial) in instances.into_iter().enumerate() {
        let instance = i + 1;
        info!("running instance {}...", instance);
        reports.extend(run_instance(instance, initial, strategies, config, probe));
    }
    reports
}

/// Aggregate figures for one strategy across a benchmark.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategySummary {
    pub strategy: Strategy,
    pub runs: usize,
    pub solved: usize,
    /// Means over solved runs only; `None` if nothing was solved.
    pub mean_moves: Option<f64>,
    pub mean_visited: Option<f64>,
    pub total_elapsed: Duration,
}

/// Summarises `reports` per strategy, in `Strategy::ALL` order, skipping
/// strategies that did not run.
pub fn summarize(reports: &[RunReport]) -> Vec<StrategySummary> {
    Strategy::ALL
        .iter()
        .filter_map(|&strategy| {
            let runs: Vec<&RunReport> = reports.iter().filter(|r| r.strategy == strategy).collect();
            if runs.is_empty() {
                return None;
            }
            let solved: Vec<(usize, usize)> = runs
                .iter()
                .filter_map(|r| match r.outcome {
                    Outcome::Found { moves, visited, .. } => Some((moves, visited)),
                    _ => None,
                })
                .collect();
            let mean = |values: Vec<usize>| -> Option<f64> {
                if values.is_empty() {
                    None
                } else {
                    Some(values.iter().sum::<usize>() as f64 / values.len() as f64)
                }
            };
            Some(StrategySummary {
                strategy,
                runs: runs.len(),
                solved: solved.len(),
                mean_moves: mean(solved.iter().map(|&(m, _)| m).collect()),
                mean_visited: mean(solved.iter().map(|&(_, v)| v).collect()),
                total_elapsed: runs.iter().map(|r| r.elapsed).sum(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GOAL;
    use crate::metrics::tests::ScriptedProbe;

    fn state(tiles: [u8; 9]) -> State {
        State::new(tiles).unwrap()
    }

    #[test]
    fn test_run_strategy_packages_probe_readings() {
        let probe = ScriptedProbe::new(Duration::from_millis(3), vec![Some(1000), Some(1500)]);
        let report = run_strategy(
            1,
            state([1, 2, 3, 4, 5, 6, 7, 0, 8]),
            Strategy::AStar,
            &SearchConfig::default(),
            &probe,
        );
        assert_eq!(report.instance, 1);
        assert_eq!(report.strategy, Strategy::AStar);
        assert_eq!(report.outcome.moves(), Some(1));
        assert_eq!(report.elapsed, Duration::from_millis(3));
        assert_eq!(report.memory_delta, Some(500));
    }

    #[test]
    fn test_run_all_numbers_instances_and_keeps_order() {
        let probe = ScriptedProbe::new(Duration::from_millis(1), Vec::new());
        let instances = vec![GOAL, state([1, 2, 3, 4, 5, 6, 7, 0, 8])];
        let reports = run_all(instances, &Strategy::ALL, &SearchConfig::default(), &probe);

        assert_eq!(reports.len(), 8);
        let keys: Vec<(usize, Strategy)> = reports.iter().map(|r| (r.instance, r.strategy)).collect();
        assert_eq!(
            keys,
            vec![
                (1, Strategy::Bfs),
                (1, Strategy::Dfs),
                (1, Strategy::Greedy),
                (1, Strategy::AStar),
                (2, Strategy::Bfs),
                (2, Strategy::Dfs),
                (2, Strategy::Greedy),
                (2, Strategy::AStar),
            ]
        );
        assert!(reports.iter().all(|r| r.memory_delta.is_none()));
        assert!(reports[..4].iter().all(|r| r.outcome.moves() == Some(0)));
    }

    #[test]
    fn test_not_found_is_reported_not_raised() {
        let probe = ScriptedProbe::new(Duration::from_millis(1), Vec::new());
        let config = SearchConfig {
            depth_limit: 2,
            ..SearchConfig::default()
        };
        let three_away = state([1, 2, 3, 0, 5, 6, 4, 7, 8]);
        let reports = run_instance(1, three_away, &[Strategy::Dfs, Strategy::Bfs], &config, &probe);
        assert_eq!(reports[0].outcome, Outcome::NotFound);
        assert_eq!(reports[1].outcome.moves(), Some(3));
    }

    #[test]
    fn test_summarize() {
        let probe = ScriptedProbe::new(Duration::from_millis(2), Vec::new());
        let config = SearchConfig {
            depth_limit: 2,
            ..SearchConfig::default()
        };
        let instances = vec![
            state([1, 2, 3, 4, 5, 6, 7, 0, 8]),
            state([1, 2, 3, 0, 5, 6, 4, 7, 8]),
        ];
        let reports = run_all(instances, &[Strategy::Bfs, Strategy::Dfs], &config, &probe);
        let summary = summarize(&reports);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].strategy, Strategy::Bfs);
        assert_eq!(summary[0].solved, 2);
        assert_eq!(summary[0].mean_moves, Some(2.0));
        assert_eq!(summary[0].mean_visited, Some(17.0));
        assert_eq!(summary[0].total_elapsed, Duration::from_millis(4));

        assert_eq!(summary[1].strategy, Strategy::Dfs);
        assert_eq!(summary[1].runs, 2);
        assert_eq!(summary[1].solved, 1);
        assert_eq!(summary[1].mean_moves, Some(1.0));
    }

    #[test]
    fn test_summarize_nothing_solved() {
        let report = RunReport {
            instance: 1,
            strategy: Strategy::Greedy,
            outcome: Outcome::NotFound,
            elapsed: Duration::from_millis(1),
            memory_delta: None,
        };
        let summary = summarize(&[report]);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].mean_moves, None);
        assert_eq!(summary[0].mean_visited, None);
    }
}
