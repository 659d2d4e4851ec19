//! Closed-form waveform generators.

/*
Generators
==========

Two families live here.

Whole-signal generators return a finished `MonoSignal`:

  sine_wave / cos_wave    A × sin(ω t) / A × cos(ω t), sampled on a time grid
  triangle                alternates +A, -A on every sample index
  sawtooth                ramps -A, -A+1, ..., +A and starts over

Single-sample generators map a phase `t` (radians) to one value in [-1, +1].
The caller advances `t` however it likes, which is how the modulation
effects drive their carriers:

  triangle_alt(t)   asin(cos(t)) / (π/2)      ╱╲╱╲
  square_wave(t)    +1 where sin(t) ≥ 0       ┌┐┌┐
                    -1 elsewhere               └┘└┘


Angular Frequency
-----------------

The textbook relation between frequency in Hz and angular frequency is

    ω = 2π × f

`sine_wave` and `cos_wave` instead compute

    ω = f / 2 × π        (= π f / 2, four times slower than 2π f)

so a "1 Hz" sine completes one cycle every 4 seconds. Existing material that
uses these generators depends on the exact output, so the literal relation
is kept. `sine_wave_with` / `cos_wave_with` take an `AngularFrequency` for
callers that want the textbook one.


Time Grid
---------

The sampled generators produce round(Fs × s) samples on a grid that includes
BOTH endpoints 0 and s. The spacing is therefore s / (N - 1), a hair wider
than the 1 / Fs a streaming oscillator would use.
*/

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::signal::{linspace, MonoSignal};

/// Scale used by [`triangle_alt`] to map asin's ±π/2 range onto ±1.
pub const TRIANGLE_SCALE: f64 = 1.570_796_33;

/// How a frequency in Hz is turned into radians per second.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngularFrequency {
    /// `ω = f / 2 × π`, the relation `sine_wave` and `cos_wave` use.
    #[default]
    Literal,
    /// `ω = 2π × f`.
    Conventional,
}

impl AngularFrequency {
    pub fn omega(self, frequency: f64) -> f64 {
        match self {
            AngularFrequency::Literal => frequency / 2.0 * PI,
            AngularFrequency::Conventional => 2.0 * PI * frequency,
        }
    }
}

/// Sine of amplitude `amplitude`, `round(sample_rate × seconds)` samples long.
pub fn sine_wave(amplitude: f32, frequency: f32, sample_rate: u32, seconds: f32) -> MonoSignal {
    sine_wave_with(amplitude, frequency, sample_rate, seconds, AngularFrequency::Literal)
}

/// Cosine of amplitude `amplitude`, `round(sample_rate × seconds)` samples long.
pub fn cos_wave(amplitude: f32, frequency: f32, sample_rate: u32, seconds: f32) -> MonoSignal {
    cos_wave_with(amplitude, frequency, sample_rate, seconds, AngularFrequency::Literal)
}

pub fn sine_wave_with(
    amplitude: f32,
    frequency: f32,
    sample_rate: u32,
    seconds: f32,
    relation: AngularFrequency,
) -> MonoSignal {
    sampled(amplitude, frequency, sample_rate, seconds, relation, f64::sin)
}

pub fn cos_wave_with(
    amplitude: f32,
    frequency: f32,
    sample_rate: u32,
    seconds: f32,
    relation: AngularFrequency,
) -> MonoSignal {
    sampled(amplitude, frequency, sample_rate, seconds, relation, f64::cos)
}

fn sampled(
    amplitude: f32,
    frequency: f32,
    sample_rate: u32,
    seconds: f32,
    relation: AngularFrequency,
    shape: fn(f64) -> f64,
) -> MonoSignal {
    let n = (sample_rate as f64 * seconds as f64).round().max(0.0) as usize;
    let omega = relation.omega(frequency as f64);
    linspace(0.0, seconds as f64, n)
        .into_iter()
        .map(|t| amplitude * shape(omega * t as f64) as f32)
        .collect()
}

/// Triangle without phase shift or offset: `+A, -A, +A, ...`.
///
/// x[i] = 2 × |((i mod 2) × A) - A| - A
pub fn triangle(amplitude: f32, len: usize) -> MonoSignal {
    (0..len)
        .map(|i| 2.0 * (((i % 2) as f32 * amplitude) - amplitude).abs() - amplitude)
        .collect()
}

/// Integer-stepped sawtooth: `x[i] = (i mod (2A + 1)) - A`.
///
/// The amplitude must be a whole number: the period `2A + 1` counts samples,
/// so a fractional amplitude has no meaningful period. Scale the result for
/// other peak levels.
///
/// ```
/// use fx_lab::dsp::oscillator::sawtooth;
/// assert_eq!(sawtooth(1, 4).as_slice(), &[-1.0, 0.0, 1.0, -1.0]);
/// ```
pub fn sawtooth(amplitude: u32, len: usize) -> MonoSignal {
    let period = 2 * amplitude as usize + 1;
    (0..len)
        .map(|i| (i % period) as f32 - amplitude as f32)
        .collect()
}

/// Normalized triangle value at phase `t`.
#[inline]
pub fn triangle_alt(t: f64) -> f64 {
    t.cos().asin() / TRIANGLE_SCALE
}

/// `+1.0` where `sin(t) >= 0`, `-1.0` elsewhere.
#[inline]
pub fn square_wave(t: f64) -> f64 {
    if t.sin() >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sawtooth_example() {
        let saw = sawtooth(3, 8);
        assert_eq!(saw.as_slice(), &[-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, -3.0]);
    }

    #[test]
    fn test_sawtooth_zero_amplitude_is_silent() {
        assert!(sawtooth(0, 5).iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_triangle_alternates() {
        let tri = triangle(2.0, 5);
        assert_eq!(tri.as_slice(), &[2.0, -2.0, 2.0, -2.0, 2.0]);
    }

    #[test]
    fn test_square_wave_examples() {
        assert_eq!(square_wave(0.0), 1.0);
        // sin(π) is a tiny positive number in f64
        assert_eq!(square_wave(PI), 1.0);
        assert_eq!(square_wave(3.0 * PI / 2.0), -1.0);
    }

    #[test]
    fn test_triangle_alt_extremes() {
        assert!((triangle_alt(0.0) - 1.0).abs() < 1e-6);
        assert!((triangle_alt(PI) + 1.0).abs() < 1e-6);
        assert!(triangle_alt(PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_triangle_alt_is_linear_between_peaks() {
        // Quarter of the way down from the peak at 0 to the trough at π
        assert!((triangle_alt(PI / 4.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sine_wave_length_and_endpoints() {
        let sine = sine_wave(1.0, 1.0, 100, 2.0);
        assert_eq!(sine.len(), 200);
        assert_eq!(sine[0], 0.0);
        // t = 2 s at ω = π/2 -> sin(π) ≈ 0
        assert!(sine[199].abs() < 1e-5);
    }

    #[test]
    fn test_literal_angular_frequency() {
        // ω = f / 2 × π: a 1 Hz sine peaks at t = 1 s, not t = 0.25 s
        assert!((AngularFrequency::Literal.omega(1.0) - PI / 2.0).abs() < 1e-12);
        let sine = sine_wave(0.5, 1.0, 1001, 1.0);
        assert!((sine[1000] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_conventional_angular_frequency() {
        assert!((AngularFrequency::Conventional.omega(1.0) - 2.0 * PI).abs() < 1e-12);
        // A true 1 Hz sine peaks a quarter second in
        let sine = sine_wave_with(0.5, 1.0, 1001, 1.0, AngularFrequency::Conventional);
        assert!((sine[250] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cos_wave_starts_at_amplitude() {
        let cos = cos_wave(0.8, 440.0, 48_000, 0.01);
        assert_eq!(cos.len(), 480);
        assert!((cos[0] - 0.8).abs() < 1e-6);
        assert!(cos.peak() <= 0.8 + 1e-6);
    }
}
