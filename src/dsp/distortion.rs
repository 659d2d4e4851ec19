//! Overdrive and Fuzz
//!
//! Both effects reshape each sample independently. Neither keeps state
//! between samples, though fuzz looks at the whole signal once to find its
//! peak level.
//!
//! # Overdrive: Piecewise Soft Clip
//!
//! The transfer curve has three regions, split at `threshold` (default 1/3):
//!
//! ```text
//!   |x| < th          y = 2x                          linear, doubled
//!   th ≤ |x| ≤ 2th    y = sign(x)(3 - (2 - 3|x|)²)/3   soft knee
//!   |x| > 2th         y = sign(x)                     saturated
//!
//!    y
//!   1 ┤          ╭──────
//!     │        ╭╯
//!     │      ╱
//!   0 ┼────╱──────────── x
//!        1/3  2/3
//! ```
//!
//! With the default threshold the three pieces meet without jumps: at
//! |x| = 1/3 both sides give 2/3, at |x| = 2/3 both give 1. Other thresholds
//! leave small steps, because the knee's constants are fixed.
//!
//! The first output sample is never shaped and stays 0.0.
//!
//! # Fuzz: Exponential Saturation
//!
//! ```text
//!   q = x × gain / max|x|
//!   z = sign(-q) × (1 - e^(sign(-q) × q))
//! ```
//!
//! Since `sign(-q) × q = -|q|`, z = -sign(q)(1 - e^(-|q|)): an exponential
//! saturator that also flips polarity. The wet signal is rescaled to the dry
//! peak and blended:
//!
//! ```text
//!   out = mix × z × max|x| / max|z| + (1 - mix) × x
//! ```
//!
//! # Gain Values
//!
//!   1    = Gentle rounding
//!   11   = Default, heavy fuzz
//!   50+  = Nearly square

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::amplify::apply_gain;
use super::mix::apply_dry_wet;
use super::signal::{peak, MonoSignal};
use crate::error::FxError;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverdriveParams {
    /// Edge of the linear region. Values above ~0.4 sound harsh.
    pub threshold: f32,
}

impl Default for OverdriveParams {
    fn default() -> Self {
        Self {
            threshold: 1.0 / 3.0,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzParams {
    /// Drive into the saturator. Higher = steeper waveform.
    pub gain: f32,
    /// Wet share of the output, 1.0 = only the distorted signal.
    pub mix: f32,
}

impl Default for FuzzParams {
    fn default() -> Self {
        Self {
            gain: 11.0,
            mix: 0.2,
        }
    }
}

/// Soft-clip a single sample.
#[inline]
pub fn soft_clip(x: f32, threshold: f32) -> f32 {
    let magnitude = x.abs();
    if magnitude < threshold {
        2.0 * x
    } else if magnitude > 2.0 * threshold {
        sign(x)
    } else {
        sign(x) * (3.0 - (2.0 - 3.0 * magnitude).powi(2)) / 3.0
    }
}

/// Apply [`soft_clip`] to every sample but the first.
pub fn overdrive(signal: &MonoSignal, params: &OverdriveParams) -> MonoSignal {
    let mut out = MonoSignal::zeros(signal.len());
    for (y, &x) in out.as_mut_slice().iter_mut().zip(signal.iter()).skip(1) {
        *y = soft_clip(x, params.threshold);
    }
    out
}

/// Exponential fuzz blended with the dry signal.
///
/// Fails with [`FxError::SilentSignal`] on an all-zero (or empty) input,
/// which has no peak to scale against.
pub fn fuzz(signal: &MonoSignal, params: &FuzzParams) -> Result<MonoSignal, FxError> {
    let dry_peak = peak(signal);
    if dry_peak == 0.0 {
        return Err(FxError::SilentSignal);
    }

    let mut wet: Vec<f32> = signal
        .iter()
        .map(|&x| {
            let q = x * params.gain / dry_peak;
            let s = sign(-q);
            s * (1.0 - (s * q).exp())
        })
        .collect();

    let wet_peak = peak(&wet);
    if wet_peak == 0.0 {
        return Err(FxError::SilentSignal);
    }

    apply_gain(&mut wet, dry_peak / wet_peak);
    apply_dry_wet(signal, &mut wet, params.mix);
    Ok(MonoSignal::new(wet))
}

/// -1, 0 or +1. Unlike `f32::signum`, zero maps to zero.
#[inline]
fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
