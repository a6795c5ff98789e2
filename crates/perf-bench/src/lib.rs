use bandwidth_core::{BandwidthProbe, ProbeSettings};
use common::error::Error;
use common::types::ProbeReport;

// ----------------------------
// Repetition scaling
// ----------------------------

/// Two timings taken over the same buffers: one pass, then `iterations` passes.
#[derive(Debug, Clone, Copy)]
pub struct ScalingSample {
    pub single: ProbeReport,
    pub repeated: ProbeReport,
}

impl ScalingSample {
    /// Ratio the timings should approach if each pass costs the same.
    pub fn expected_ratio(&self) -> f64 {
        self.repeated.iterations as f64 / self.single.iterations as f64
    }

    /// Observed `repeated / single` timing ratio, or `None` if the single
    /// pass was too fast for the clock to register.
    pub fn observed_ratio(&self) -> Option<f64> {
        let single = self.single.elapsed_secs();
        if single <= 0.0 {
            return None;
        }
        Some(self.repeated.elapsed_secs() / single)
    }
}

/// Times one pass and then `settings.iterations` passes over a single set of buffers.
///
/// An untimed warm-up pass runs first so the destination's first-touch page
/// faults land outside both measurements.
pub fn measure_scaling(settings: ProbeSettings) -> Result<ScalingSample, Error> {
    let mut single_probe = BandwidthProbe::new(ProbeSettings {
        iterations: 1,
        ..settings
    });
    let mut repeated_probe = BandwidthProbe::new(settings);

    let mut buffers = single_probe.allocate()?;
    buffers.repeat_once();

    let single = single_probe.measure(&mut buffers);
    let repeated = repeated_probe.measure(&mut buffers);

    Ok(ScalingSample { single, repeated })
}
