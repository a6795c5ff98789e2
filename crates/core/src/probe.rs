use std::hint::black_box;

use common::error::Error;
use common::types::{ARRAY_SIZE, ITERATIONS, ProbeReport};

use super::buffer::ProbeBuffers;
use super::stopwatch::MonotonicStopwatch;
use super::traits::Stopwatch;

/// Sizing of a probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Length of each buffer, in elements.
    pub array_size: usize,
    /// Number of full passes inside the timed region.
    pub iterations: usize,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            array_size: ARRAY_SIZE,
            iterations: ITERATIONS,
        }
    }
}

/// Memory-bandwidth probe: times repeated `destination = source1 + source2`
/// passes over three equal-length `f64` buffers.
///
/// The lifecycle is strictly sequential: allocate, initialize, time the
/// repetition loop, report, release. Buffers live only for the duration of
/// [`run`](Self::run) unless the caller drives [`allocate`](Self::allocate)
/// and [`measure`](Self::measure) directly.
#[derive(Debug)]
pub struct BandwidthProbe<S: Stopwatch = MonotonicStopwatch> {
    settings: ProbeSettings,
    stopwatch: S,
}

impl BandwidthProbe {
    pub fn new(settings: ProbeSettings) -> Self {
        Self::with_stopwatch(settings, MonotonicStopwatch::default())
    }
}

impl Default for BandwidthProbe {
    fn default() -> Self {
        Self::new(ProbeSettings::default())
    }
}

impl<S: Stopwatch> BandwidthProbe<S> {
    pub fn with_stopwatch(settings: ProbeSettings, stopwatch: S) -> Self {
        Self {
            settings,
            stopwatch,
        }
    }

    pub fn settings(&self) -> ProbeSettings {
        self.settings
    }

    /// Acquires and initializes the three buffers.
    ///
    /// # Errors
    /// Returns `Error::Allocation` for the first buffer that cannot be reserved.
    pub fn allocate(&self) -> Result<ProbeBuffers, Error> {
        let len = self.settings.array_size;
        tracing::debug!(elements = len, "Allocating probe buffers");

        let buffers = ProbeBuffers::try_new(len).inspect_err(|e| {
            tracing::debug!(error = %e, "Probe buffer allocation failed");
        })?;

        Ok(buffers)
    }

    /// Times `iterations` full passes over `buffers`.
    ///
    /// Only the repetition loop is inside the timed region.
    pub fn measure(&mut self, buffers: &mut ProbeBuffers) -> ProbeReport {
        let iterations = self.settings.iterations;

        self.stopwatch.start();
        for _ in 0..iterations {
            buffers.repeat_once();
            // Keep every pass observable so none is folded away.
            black_box(buffers.destination.as_slice());
        }
        let elapsed = self.stopwatch.stop();

        let report = ProbeReport {
            array_size: buffers.len(),
            iterations,
            elapsed,
        };

        tracing::debug!(
            elements = report.array_size,
            iterations,
            elapsed_secs = report.elapsed_secs(),
            gib_per_sec = ?report.throughput_gib_per_sec(),
            "Probe measurement complete"
        );

        report
    }

    /// Full lifecycle: allocate, measure, release.
    ///
    /// # Errors
    /// Returns `Error::Allocation` without timing anything if any buffer
    /// cannot be reserved.
    pub fn run(&mut self) -> Result<ProbeReport, Error> {
        let mut buffers = self.allocate()?;
        let report = self.measure(&mut buffers);
        drop(buffers);
        Ok(report)
    }
}
