//! Timing and memory sampling around a search.
//!
//! The strategies know nothing about measurement. The harness wraps each call in
//! [`measure`], which reads a [`Probe`] before and after. Tests plug in a
//! scripted probe; the binaries use [`SystemProbe`].
use log::warn;
use std::cell::Cell;
use std::fs;
use std::time::{Duration, Instant};

/// Source of clock readings and memory samples.
pub trait Probe {
    /// Monotonic time since an arbitrary, fixed origin.
    fn now(&self) -> Duration;

    /// Resident memory of the process in bytes, or `None` if the platform offers
    /// no way to read it.
    fn sample_memory(&self) -> Option<u64>;
}

/// Probe backed by `Instant` and, on Linux, `/proc/self/status`.
#[derive(Debug)]
pub struct SystemProbe {
    origin: Instant,
    warned: Cell<bool>,
}

impl SystemProbe {
    pub fn new() -> Self {
        SystemProbe {
            origin: Instant::now(),
            warned: Cell::new(false),
        }
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe for SystemProbe {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sample_memory(&self) -> Option<u64> {
        let sample = fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|status| parse_vm_rss(&status));
        if sample.is_none() && !self.warned.replace(true) {
            warn!("resident memory is not available on this platform; memory deltas will be empty");
        }
        sample
    }
}

/// Extracts the `VmRSS` line of a `/proc/<pid>/status` dump, in bytes.
fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let mut fields = line["VmRSS:".len()..].split_whitespace();
    let value: u64 = fields.next()?.parse().ok()?;
    match fields.next() {
        Some("kB") | None => Some(value * 1024),
        Some(_) => None,
    }
}

/// A value together with the time and memory it cost to produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measured<T> {
    pub value: T,
    pub elapsed: Duration,
    /// Change in resident memory (after minus before); `None` when either
    /// sample was unavailable.
    pub memory_delta: Option<i64>,
}

/// Runs `f`, sampling `probe` immediately before and after.
pub fn measure<T>(probe: &impl Probe, f: impl FnOnce() -> T) -> Measured<T> {
    let memory_before = probe.sample_memory();
    let start = probe.now();
    let value = f();
    let end = probe.now();
    let memory_after = probe.sample_memory();

    let memory_delta = match (memory_before, memory_after) {
        (Some(before), Some(after)) => Some(after as i64 - before as i64),
        _ => None,
    };
    Measured {
        value,
        elapsed: end.saturating_sub(start),
        memory_delta,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Probe that replays fixed readings: the clock advances by `tick` per call,
    /// memory samples are taken from a queue.
    pub(crate) struct ScriptedProbe {
        clock: Cell<Duration>,
        tick: Duration,
        memory: RefCell<VecDeque<Option<u64>>>,
    }

    impl ScriptedProbe {
        pub(crate) fn new(tick: Duration, memory: Vec<Option<u64>>) -> Self {
            ScriptedProbe {
                clock: Cell::new(Duration::ZERO),
                tick,
                memory: RefCell::new(memory.into()),
            }
        }
    }

    impl Probe for ScriptedProbe {
        fn now(&self) -> Duration {
            let t = self.clock.get();
            self.clock.set(t + self.tick);
            t
        }

        fn sample_memory(&self) -> Option<u64> {
            self.memory.borrow_mut().pop_front().flatten()
        }
    }

    #[test]
    fn test_measure_uses_probe_readings() {
        let probe = ScriptedProbe::new(Duration::from_millis(5), vec![Some(4096), Some(1024)]);
        let measured = measure(&probe, || 7);
        assert_eq!(measured.value, 7);
        assert_eq!(measured.elapsed, Duration::from_millis(5));
        assert_eq!(measured.memory_delta, Some(-3072));
    }

    #[test]
    fn test_measure_without_memory() {
        let probe = ScriptedProbe::new(Duration::from_millis(1), vec![Some(10), None]);
        let measured = measure(&probe, || ());
        assert_eq!(measured.memory_delta, None);
    }

    #[test]
    fn test_parse_vm_rss() {
        let status = "Name:\tbench\nVmPeak:\t  9000 kB\nVmRSS:\t    2048 kB\nThreads:\t1\n";
        assert_eq!(parse_vm_rss(status), Some(2048 * 1024));
        assert_eq!(parse_vm_rss("Name:\tbench\n"), None);
        assert_eq!(parse_vm_rss("VmRSS:\t12 MB\n"), None);
    }

    #[test]
    fn test_system_probe_clock_is_monotonic() {
        let probe = SystemProbe::new();
        let a = probe.now();
        let b = probe.now();
        assert!(b >= a);
    }
}
