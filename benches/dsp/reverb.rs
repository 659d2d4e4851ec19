//! Benchmarks for convolution reverb.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fx_lab::dsp::reverb::{reverb, ReverbParams};
use fx_lab::MonoSignal;

use crate::test_signal;

/// Synthetic room: exponentially decaying pseudo-noise.
fn room_impulse_response(seconds: f32) -> MonoSignal {
    let len = (seconds * 48_000.0) as usize;
    (0..len)
        .map(|i| {
            let decay = (-(i as f32) / (len as f32 / 6.0)).exp();
            let noise = ((i as f32 * 12.9898).sin() * 43_758.547).fract() - 0.5;
            decay * noise
        })
        .collect()
}

pub fn bench_reverb(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/reverb");
    group.sample_size(10);

    let input = test_signal(48_000);
    let params = ReverbParams::default();

    // Small room, medium hall, large hall
    for &seconds in &[0.3f32, 1.0, 3.0] {
        let ir = room_impulse_response(seconds);
        let id = format!("{}s_ir", seconds);
        group.bench_with_input(BenchmarkId::new(id, input.len()), &seconds, |b, _| {
            b.iter(|| reverb(black_box(&ir), black_box(&input), black_box(&params)))
        });
    }

    group.finish();
}
