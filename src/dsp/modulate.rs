//! Tremolo and ring modulation.

/*
Amplitude Modulation Effects
============================

Both effects multiply the input by a carrier whose phase advances once per
sample (see `lfo.rs`).

Tremolo
-------

    factor = 1 - (depth × 0.5 × sin(t) + 0.5)
    y[n]   = factor × x[n]
    t     += rate × 0.002

With depth = 1 the factor swings between 0.0 and 1.0; with depth = 0 it sits
at a constant 0.5, so even an "inactive" tremolo halves the level.

    factor
    1.0 ┤      depth = 1
    0.5 ┤╲    ╱╲    ╱     (starts at 0.5 and dips first, since sin rises)
    0.0 ┤ ╲__╱  ╲__╱

Ring Modulator
--------------

    y[n] = (1 - blend) × x[n] + blend × carrier(t) × x[n]
    t   += rate × 0.02

The carrier is bipolar, so the modulated part flips the input's polarity on
every negative half-cycle (DSB-SC modulation). Blend = 0 is fully dry.

Both effects require rate, depth and blend within [0, 1].
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::amplify::multiply_in_place;
use super::lfo::{Carrier, PhaseAccumulator};
use super::mix::apply_dry_wet;
use super::signal::MonoSignal;
use crate::error::FxError;

/// Phase increment per sample at tremolo rate 1.0.
pub const TREMOLO_RATE_SCALE: f64 = 0.002;
/// Phase increment per sample at ring modulator rate 1.0.
pub const RING_MOD_RATE_SCALE: f64 = 0.02;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TremoloParams {
    /// Speed of the carrier, 0.0 to 1.0.
    pub rate: f32,
    /// Modulation depth, 0.0 to 1.0.
    pub depth: f32,
}

impl Default for TremoloParams {
    fn default() -> Self {
        Self {
            rate: 0.5,
            depth: 0.5,
        }
    }
}

impl TremoloParams {
    pub fn validate(&self) -> Result<(), FxError> {
        FxError::check_range("rate", self.rate, 0.0, 1.0)?;
        FxError::check_range("depth", self.depth, 0.0, 1.0)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingModParams {
    pub carrier: Carrier,
    /// Speed of the carrier, 0.0 to 1.0.
    pub rate: f32,
    /// Share of the modulated signal, 0.0 to 1.0.
    pub blend: f32,
}

impl Default for RingModParams {
    fn default() -> Self {
        Self {
            carrier: Carrier::Sine,
            rate: 0.5,
            blend: 0.5,
        }
    }
}

impl RingModParams {
    pub fn validate(&self) -> Result<(), FxError> {
        FxError::check_range("rate", self.rate, 0.0, 1.0)?;
        FxError::check_range("blend", self.blend, 0.0, 1.0)
    }
}

/// Tremolo gain for a carrier phase.
#[inline]
pub fn tremolo_factor(t: f64, depth: f32) -> f64 {
    1.0 - (depth as f64 * 0.5 * t.sin() + 0.5)
}

pub fn tremolo(signal: &MonoSignal, params: &TremoloParams) -> Result<MonoSignal, FxError> {
    params.validate()?;

    let gains = carrier_samples(signal.len(), params.rate as f64 * TREMOLO_RATE_SCALE, |t| {
        tremolo_factor(t, params.depth)
    });
    let mut out = signal.to_vec();
    multiply_in_place(&mut out, &gains);
    Ok(MonoSignal::new(out))
}

pub fn ring_modulator(signal: &MonoSignal, params: &RingModParams) -> Result<MonoSignal, FxError> {
    params.validate()?;

    let carrier = carrier_samples(signal.len(), params.rate as f64 * RING_MOD_RATE_SCALE, |t| {
        params.carrier.value(t)
    });
    let mut wet = signal.to_vec();
    multiply_in_place(&mut wet, &carrier);
    apply_dry_wet(signal, &mut wet, params.blend);
    Ok(MonoSignal::new(wet))
}

/// `len` values of `shape` evaluated at a phase starting from zero.
fn carrier_samples(len: usize, increment: f64, shape: impl Fn(f64) -> f64) -> Vec<f32> {
    let mut phase = PhaseAccumulator::new(increment);
    (0..len).map(|_| shape(phase.next_phase()) as f32).collect()
}
