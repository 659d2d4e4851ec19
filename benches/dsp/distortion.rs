//! Benchmarks for waveshaping distortion.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fx_lab::dsp::distortion::{fuzz, overdrive, FuzzParams, OverdriveParams};

use crate::{test_signal, SIGNAL_LENGTHS};

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &len in SIGNAL_LENGTHS {
        let input = test_signal(len);

        // Overdrive - piecewise soft clip, branchy
        let params = OverdriveParams::default();
        group.bench_with_input(BenchmarkId::new("overdrive", len), &len, |b, _| {
            b.iter(|| overdrive(black_box(&input), black_box(&params)))
        });

        // Fuzz - two peak scans plus one exp per sample
        let params = FuzzParams::default();
        group.bench_with_input(BenchmarkId::new("fuzz", len), &len, |b, _| {
            b.iter(|| fuzz(black_box(&input), black_box(&params)))
        });
    }

    group.finish();
}
