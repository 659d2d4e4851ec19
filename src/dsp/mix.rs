//! Wet/dry blending, summing and padding.

/*
Wet and Dry
===========

  dry = original signal (unprocessed)
  wet = effect signal (processed)

A linear blend keeps the two weights summing to 1.0 so the result never gets
louder than the louder of its inputs:

    output = dry × (1 - mix) + wet × mix

    mix = 0.0  →  100% dry
    mix = 0.2  →  the fuzz default, mostly clean with some grit
    mix = 1.0  →  100% wet

Convolution effects produce a wet signal LONGER than the dry one (the echo or
reverb tail rings on after the input ends). Before the two can be summed the
dry signal is padded with silence:

    dry: [x0 x1 x2 x3]
    wet: [w0 w1 w2 w3 w4 w5 w6]
    pad: [x0 x1 x2 x3  0  0  0]

The reverb does not use the complementary weights above: it adds the full dry
signal to an attenuated wet signal and renormalizes afterwards. `sum_in_place`
plus `apply_gain` cover that case.
*/

/// Blend dry and wet samples using a linear crossfade (single sample).
#[inline]
pub fn blend_dry_wet(dry: f32, wet: f32, mix: f32) -> f32 {
    dry * (1.0 - mix) + wet * mix
}

/// Blend `dry` into `wet` in place.
///
/// wet[i] = (dry[i] × (1-mix)) + (wet[i] × mix)
#[inline]
pub fn apply_dry_wet(dry: &[f32], wet: &mut [f32], mix: f32) {
    debug_assert_eq!(dry.len(), wet.len());

    if mix >= 1.0 {
        return; // 100% wet, nothing to do
    }

    let dry_amount = 1.0 - mix;
    for (wet_sample, &dry_sample) in wet.iter_mut().zip(dry.iter()) {
        *wet_sample = dry_sample * dry_amount + *wet_sample * mix;
    }
}

/// Add `b` into `a` sample by sample.
#[inline]
pub fn sum_in_place(a: &mut [f32], b: &[f32]) {
    debug_assert_eq!(a.len(), b.len());

    for (a_sample, &b_sample) in a.iter_mut().zip(b.iter()) {
        *a_sample += b_sample;
    }
}

/// Copy `signal` and append zeros up to `len` samples.
///
/// Signals already at least `len` long are returned unchanged.
pub fn pad_to(signal: &[f32], len: usize) -> Vec<f32> {
    let mut padded = Vec::with_capacity(len.max(signal.len()));
    padded.extend_from_slice(signal);
    if padded.len() < len {
        padded.resize(len, 0.0);
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_dry_wet() {
        // All dry
        assert_eq!(blend_dry_wet(1.0, 0.5, 0.0), 1.0);
        // All wet
        assert_eq!(blend_dry_wet(1.0, 0.5, 1.0), 0.5);
        // 50/50 mix
        assert_eq!(blend_dry_wet(1.0, 0.0, 0.5), 0.5);
    }

    #[test]
    fn test_apply_dry_wet_all_dry() {
        let dry = [1.0, 0.5, -0.5, -1.0];
        let mut wet = [0.0, 0.0, 0.0, 0.0];

        apply_dry_wet(&dry, &mut wet, 0.0);

        assert_eq!(wet, [1.0, 0.5, -0.5, -1.0]);
    }

    #[test]
    fn test_apply_dry_wet_all_wet() {
        let dry = [0.0, 0.0, 0.0, 0.0];
        let mut wet = [1.0, 0.5, -0.5, -1.0];
        let original = wet;

        apply_dry_wet(&dry, &mut wet, 1.0);

        assert_eq!(wet, original);
    }

    #[test]
    fn test_apply_dry_wet_partial_mix() {
        let dry = [1.0, -1.0];
        let mut wet = [0.0, 1.0];

        apply_dry_wet(&dry, &mut wet, 0.25);

        assert_eq!(wet, [0.75, -0.5]);
    }

    #[test]
    fn test_sum_can_exceed_one() {
        let mut a = [1.0, 0.5];
        sum_in_place(&mut a, &[1.0, 0.25]);
        assert_eq!(a, [2.0, 0.75]);
    }

    #[test]
    fn test_pad_to_appends_silence() {
        assert_eq!(pad_to(&[1.0, 2.0], 4), vec![1.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pad_to_never_truncates() {
        assert_eq!(pad_to(&[1.0, 2.0, 3.0], 2), vec![1.0, 2.0, 3.0]);
    }
}
