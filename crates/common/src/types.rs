use std::fmt;
use std::time::Duration;

/// Default buffer length in elements.
pub const ARRAY_SIZE: usize = 1_000_000;

/// Default number of full passes inside the timed region.
pub const ITERATIONS: usize = 100;

/// Bytes touched per element per repetition: two loads and one store of an `f64`.
pub const BYTES_PER_ELEMENT_PASS: usize = 3 * std::mem::size_of::<f64>();

/// Identifies which of the three probe buffers an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferRole {
    Source1,
    Source2,
    Destination,
}

impl fmt::Display for BufferRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            BufferRole::Source1 => "source1",
            BufferRole::Source2 => "source2",
            BufferRole::Destination => "destination",
        };
        f.write_str(name)
    }
}

/// Outcome of one timed probe run.
///
/// The `Display` impl renders the single report line printed by the executor:
/// ```text
/// Stream ready - Execution time: 0.042 seconds
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeReport {
    pub array_size: usize,
    pub iterations: usize,
    pub elapsed: Duration,
}

impl ProbeReport {
    /// Elapsed time across all repetitions, in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Total bytes read and written by the timed loop.
    pub fn bytes_moved(&self) -> u128 {
        self.array_size as u128 * self.iterations as u128 * BYTES_PER_ELEMENT_PASS as u128
    }

    /// Sustained throughput in GiB/s, or `None` when the timer did not advance.
    pub fn throughput_gib_per_sec(&self) -> Option<f64> {
        let secs = self.elapsed_secs();
        if secs <= 0.0 {
            return None;
        }
        Some(self.bytes_moved() as f64 / (1u64 << 30) as f64 / secs)
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Stream ready - Execution time: {:.3} seconds",
            self.elapsed_secs()
        )
    }
}
