//! Benchmarks for the effect modules.

mod convolve;
mod delay;
mod distortion;
mod modulate;
mod reverb;

pub use convolve::bench_convolve;
pub use delay::bench_delay;
pub use distortion::bench_distortion;
pub use modulate::bench_modulate;
pub use reverb::bench_reverb;
