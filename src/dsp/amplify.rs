//! Gain and decibel conversions.

/*
Gain in Decibels
================

Hearing is logarithmic: we perceive loudness ratios, not differences. Level
changes are therefore usually expressed in decibels.

    dB        = 20 × log₁₀(magnitude)
    magnitude = 10^(dB / 20)

Common reference points:
    ×1.0    =   0 dB  (unity, no change)
    ×0.708  =  -3 dB  (the reverb's wet attenuation, about half the power)
    ×0.5    =  -6 dB  (half amplitude)
    ×0.1    = -20 dB
    ×2.0    =  +6 dB

Every halving of amplitude ≈ -6 dB, every halving of power ≈ -3 dB.

A magnitude of 0.0 is -∞ dB. `magnitude_to_db(0.0)` returns
`f32::NEG_INFINITY` rather than an error, which is what log₁₀ gives.
*/

/// Convert a level in decibels to a linear magnitude.
///
/// ```
/// use fx_lab::dsp::amplify::db_to_magnitude;
/// assert!((db_to_magnitude(-6.0) - 0.501).abs() < 1e-3);
/// ```
#[inline]
pub fn db_to_magnitude(db: f32) -> f32 {
    10.0f32.powf(db / 20.0)
}

/// Convert a linear magnitude to decibels.
#[inline]
pub fn magnitude_to_db(magnitude: f32) -> f32 {
    20.0 * magnitude.log10()
}

/// Scale every sample in place.
#[inline]
pub fn apply_gain(signal: &mut [f32], gain: f32) {
    for sample in signal.iter_mut() {
        *sample *= gain;
    }
}

/// Multiply a signal by a modulator in place.
#[inline]
pub fn multiply_in_place(signal: &mut [f32], modulator: &[f32]) {
    debug_assert_eq!(signal.len(), modulator.len());

    for (s, &m) in signal.iter_mut().zip(modulator.iter()) {
        *s *= m;
    }
}
