use std::time::{Duration, Instant};

use super::traits::Stopwatch;

/// Wall-clock stopwatch backed by [`Instant`].
///
/// Measures elapsed real time, not process CPU time, so results drift upward
/// on a loaded machine.
#[derive(Debug, Default)]
pub struct MonotonicStopwatch {
    started: Option<Instant>,
}

impl Stopwatch for MonotonicStopwatch {
    fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    fn stop(&mut self) -> Duration {
        self.started
            .take()
            .map(|start| start.elapsed())
            .unwrap_or_default()
    }
}
