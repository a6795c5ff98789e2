pub mod buffer;
pub mod probe;
pub mod stopwatch;
pub mod traits;

pub use buffer::{DestinationBuffer, ProbeBuffers, SourceBuffer};
pub use probe::{BandwidthProbe, ProbeSettings};
pub use stopwatch::MonotonicStopwatch;
pub use traits::Stopwatch;
