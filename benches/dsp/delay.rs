//! Benchmarks for the delay effects.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fx_lab::dsp::delay::{feedback_delay, fir_delay, FeedbackDelayParams, FirDelayParams};

use crate::{test_signal, SIGNAL_LENGTHS};

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    for &len in SIGNAL_LENGTHS {
        let input = test_signal(len);

        // The kernel is 24 000 taps long but only two are non-zero
        let params = FirDelayParams::new(500.0, 0.5);
        group.bench_with_input(BenchmarkId::new("fir_500ms", len), &len, |b, _| {
            b.iter(|| fir_delay(black_box(&input), black_box(&params)))
        });

        let params = FeedbackDelayParams::default();
        group.bench_with_input(BenchmarkId::new("feedback_250ms", len), &len, |b, _| {
            b.iter(|| feedback_delay(black_box(&input), black_box(&params)))
        });
    }

    group.finish();
}
