//! Fixed-kernel FIR low-pass filter.
//!
//! A 37-tap symmetric (linear-phase) windowed design. At a 48 kHz sampling
//! rate the passband reaches roughly 1.5 kHz (-3 dB just above 2 kHz) and
//! the stopband starts around 5 kHz with more than 60 dB of attenuation.
//! At other sampling rates the corner frequencies scale proportionally.
//!
//! The filter is causal: output sample `n` only depends on inputs `0..=n`,
//! and the output is truncated to the input length, so the signal comes out
//! delayed by the filter's group delay of 18 samples.

use super::convolve::convolve;
use super::signal::MonoSignal;
use crate::error::FxError;

/// Number of filter coefficients.
pub const NUM_TAPS: usize = 37;

/// Group delay of [`LOWPASS_TAPS`] in samples.
pub const GROUP_DELAY: usize = (NUM_TAPS - 1) / 2;

/// Low-pass kernel, symmetric around index 18.
pub const LOWPASS_TAPS: [f32; NUM_TAPS] = [
    -0.000_383_205_44,
    -0.001_377_178_7,
    -0.002_536_625_9,
    -0.004_432_549_6,
    -0.006_494_295_7,
    -0.008_515_660_5,
    -0.009_767_438,
    -0.009_526_244,
    -0.006_932_364_8,
    -0.001_278_824_4,
    0.007_887_516,
    0.020_575_397,
    0.036_269_525,
    0.053_907_824,
    0.071_975_264,
    0.088_684_443,
    0.102_228_518,
    0.111_056_476,
    0.114_122_168,
    0.111_056_476,
    0.102_228_518,
    0.088_684_443,
    0.071_975_264,
    0.053_907_824,
    0.036_269_525,
    0.020_575_397,
    0.007_887_516,
    -0.001_278_824_4,
    -0.006_932_364_8,
    -0.009_526_244,
    -0.009_767_438,
    -0.008_515_660_5,
    -0.006_494_295_7,
    -0.004_432_549_6,
    -0.002_536_625_9,
    -0.001_377_178_7,
    -0.000_383_205_44,
];

/// Run `signal` through [`LOWPASS_TAPS`], keeping the input length.
pub fn lowpass(signal: &MonoSignal) -> Result<MonoSignal, FxError> {
    fir_filter(signal, &LOWPASS_TAPS)
}

/// Causal FIR filter with arbitrary taps; output length equals input length.
pub fn fir_filter(signal: &MonoSignal, taps: &[f32]) -> Result<MonoSignal, FxError> {
    let mut filtered = convolve(signal, taps)?.into_inner();
    filtered.truncate(signal.len());
    Ok(MonoSignal::new(filtered))
}
