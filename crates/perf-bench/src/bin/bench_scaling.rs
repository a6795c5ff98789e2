use std::hint::black_box;

use bandwidth_core::ProbeSettings;
use perf_bench::*;

fn main() {
    let settings = ProbeSettings::default();

    let sample = match measure_scaling(settings) {
        Ok(sample) => sample,
        Err(e) => {
            eprintln!("Scaling run failed: {}", e);
            std::process::exit(1);
        }
    };

    let sample = black_box(sample);

    println!(
        "--- Repetition Scaling ({} Elements) ---",
        settings.array_size
    );
    println!("1 pass:       {:?}", sample.single.elapsed);
    println!("{} passes:   {:?}", settings.iterations, sample.repeated.elapsed);
    match sample.observed_ratio() {
        Some(ratio) => println!(
            "Ratio:        {:.1}x (expected ~{:.0}x)",
            ratio,
            sample.expected_ratio()
        ),
        None => println!("Ratio:        n/a (single pass below clock resolution)"),
    }
    if let Some(gib) = sample.repeated.throughput_gib_per_sec() {
        println!("Throughput:   {:.2} GiB/s", gib);
    }
}
