//! Reverb - Room Simulation via Convolution
//!
//! A recorded impulse response (IR) captures how a space answers a single
//! click. Convolving a dry signal with it places the signal in that space.
//! The resulting sound depends entirely on the IR.
//!
//! # Signal Flow
//!
//! ```text
//!                ┌─ drop zero samples ─┐
//! IR ──────────→ │      sparsify       │ ──┐
//!                └─────────────────────┘   │
//!                                          ▼
//! dry ──┬──────────────────────────→ FFT convolve ──→ normalize ──→ × -3 dB ──┐
//!       │                                                                     (+) ──→ normalize ──→ out
//!       └──→ pad with zeros to wet length ──→ normalize ─────────────────────┘
//! ```
//!
//! # Sparsification
//!
//! Exact-zero samples are removed from the IR before convolving. For IRs
//! with digital silence (leading gaps, truncated tails) this shortens the
//! kernel. It also pulls the remaining samples together, shifting later
//! reflections earlier, so the output length is
//! `len(signal) + len(sparsified IR) - 1`.
//!
//! # Normalization
//!
//! Wet, dry and the final sum are each scaled to a 0.99 peak, so the output
//! never clips regardless of how loud the IR was recorded.
//!
//! # Sample Rates
//!
//! IR and signal should share a sampling rate. A mismatch is not corrected
//! (the IR would need resampling), only reported through `log::warn!`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::amplify::{apply_gain, db_to_magnitude};
use super::convolve::fft_convolve;
use super::mix::{pad_to, sum_in_place};
use super::signal::{normalize, MonoSignal};
use crate::error::FxError;
use crate::{DEFAULT_SAMPLE_RATE, NORMALIZE_AMPLITUDE};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverbParams {
    /// Sampling rate the impulse response was recorded at.
    pub ir_sample_rate: u32,
    /// Sampling rate of the dry signal.
    pub sample_rate: u32,
    /// Level of the wet signal relative to the dry one, in dB.
    pub wet_level_db: f32,
}

impl Default for ReverbParams {
    fn default() -> Self {
        Self {
            ir_sample_rate: DEFAULT_SAMPLE_RATE,
            sample_rate: DEFAULT_SAMPLE_RATE,
            wet_level_db: -3.0,
        }
    }
}

/// Drop every sample that is exactly zero.
pub fn sparsify(impulse_response: &[f32]) -> MonoSignal {
    impulse_response
        .iter()
        .copied()
        .filter(|&sample| sample != 0.0)
        .collect()
}

/// Convolve `signal` with `impulse_response` and mix with the dry signal.
///
/// The impulse response needs at least two non-zero samples, otherwise the
/// wet signal would be no longer than the dry one.
pub fn reverb(
    impulse_response: &MonoSignal,
    signal: &MonoSignal,
    params: &ReverbParams,
) -> Result<MonoSignal, FxError> {
    if params.ir_sample_rate != params.sample_rate {
        log::warn!(
            "impulse response sampled at {} Hz applied to a {} Hz signal",
            params.ir_sample_rate,
            params.sample_rate
        );
    }

    let kernel = sparsify(impulse_response);
    log::debug!(
        "sparsified impulse response: {} -> {} samples",
        impulse_response.len(),
        kernel.len()
    );

    let wet = fft_convolve(signal, &kernel)?;
    let mut wet = normalize(&wet, NORMALIZE_AMPLITUDE)?.into_inner();

    if wet.len() <= signal.len() {
        return Err(FxError::ImpulseResponseTooShort(kernel.len()));
    }

    let dry = normalize(&pad_to(signal, wet.len()), NORMALIZE_AMPLITUDE)?;

    apply_gain(&mut wet, db_to_magnitude(params.wet_level_db));
    sum_in_place(&mut wet, &dry);

    normalize(&wet, NORMALIZE_AMPLITUDE)
}
