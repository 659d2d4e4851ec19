//! Benchmarks comparing direct and FFT convolution.
//!
//! Direct convolution is O(N × M), FFT convolution O(L log L). With dense
//! kernels the crossover is at a few dozen taps.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fx_lab::dsp::convolve::{convolve, fft_convolve};

use crate::test_signal;

/// Dense kernel lengths (no zero taps to skip).
const KERNEL_LENGTHS: &[usize] = &[16, 256, 4_096];

pub fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/convolve");
    let input = test_signal(48_000);

    for &taps in KERNEL_LENGTHS {
        let kernel: Vec<f32> = (0..taps).map(|i| 1.0 / (i + 1) as f32).collect();

        group.bench_with_input(BenchmarkId::new("direct", taps), &taps, |b, _| {
            b.iter(|| convolve(black_box(&input), black_box(&kernel)))
        });

        group.bench_with_input(BenchmarkId::new("fft", taps), &taps, |b, _| {
            b.iter(|| fft_convolve(black_box(&input), black_box(&kernel)))
        });
    }

    group.finish();
}
