//! Benchmarks for tremolo and ring modulation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fx_lab::dsp::modulate::{ring_modulator, tremolo, RingModParams, TremoloParams};
use fx_lab::dsp::Carrier;

use crate::{test_signal, SIGNAL_LENGTHS};

pub fn bench_modulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/modulate");

    for &len in SIGNAL_LENGTHS {
        let input = test_signal(len);

        let params = TremoloParams::default();
        group.bench_with_input(BenchmarkId::new("tremolo", len), &len, |b, _| {
            b.iter(|| tremolo(black_box(&input), black_box(&params)))
        });

        // Triangle carrier costs an extra asin per sample
        for carrier in Carrier::ALL {
            let params = RingModParams {
                carrier,
                ..RingModParams::default()
            };
            let id = format!("ring_mod_{}", carrier.name());
            group.bench_with_input(BenchmarkId::new(id, len), &len, |b, _| {
                b.iter(|| ring_modulator(black_box(&input), black_box(&params)))
            });
        }
    }

    group.finish();
}
