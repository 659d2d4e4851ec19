//! Offline DSP routines operating on complete mono signals.
//!
//! Every routine takes its whole input up front and returns a freshly
//! allocated output. Nothing here keeps state between calls: phase
//! accumulators and impulse responses live only for the duration of a
//! single effect invocation.

/// Gain and decibel conversions.
pub mod amplify;
/// Composable effect values.
pub mod chain;
/// Direct and FFT-based linear convolution.
pub mod convolve;
/// FIR echo and blended feedback-style delay.
pub mod delay;
/// Overdrive and fuzz waveshapers.
pub mod distortion;
/// Fixed-kernel FIR low-pass filter.
pub mod filter;
/// Modulation carriers and the wrapping phase accumulator.
pub mod lfo;
/// Wet/dry blending, summing and padding.
pub mod mix;
/// Tremolo and ring modulation.
pub mod modulate;
/// Closed-form waveform generators.
pub mod oscillator;
/// Convolution reverb.
pub mod reverb;
/// Mono/stereo signal types, normalization and time bases.
pub mod signal;

pub use lfo::Carrier;
pub use signal::{normalize, time, IntoMono};
