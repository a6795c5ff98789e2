use std::time::Duration;

/// Clock used to time the probe's repetition loop.
///
/// Abstracted so tests can substitute a deterministic clock; the executor
/// uses [`MonotonicStopwatch`](crate::MonotonicStopwatch).
pub trait Stopwatch {
    /// Begins a measurement, discarding any measurement in progress.
    fn start(&mut self);

    /// Ends the measurement begun by the last `start` and returns its length.
    ///
    /// Returns `Duration::ZERO` if `start` was never called.
    fn stop(&mut self) -> Duration;
}
