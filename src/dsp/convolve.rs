//! Convolution - Applying an Impulse Response
//!
//! Convolution replaces every input sample with a scaled copy of a kernel
//! (the impulse response) and sums all the copies:
//!
//! ```text
//! y[n] = Σ x[k] × h[n - k]
//! ```
//!
//! The full ("linear") result is `len(x) + len(h) - 1` samples long: the
//! kernel keeps ringing after the last input sample.
//!
//! # Direct vs FFT
//!
//! ## Direct
//!
//! Two nested loops, O(N × M). This implementation skips kernel taps that are
//! exactly zero, so a delay kernel with two non-zero taps costs O(2N) no
//! matter how long the delay is.
//!
//! ## Frequency Domain
//!
//! Convolution in time is multiplication in frequency:
//!
//! ```text
//! x ──→ FFT ──┐
//!             (×) ──→ IFFT ──→ y
//! h ──→ FFT ──┘
//! ```
//!
//! Both inputs are zero-padded to the output length first so the circular
//! convolution the FFT computes equals the linear one. Cost is
//! O(L log L) with L = N + M - 1, which wins for long, dense kernels such
//! as recorded room impulse responses.
//!
//! The FFT path computes in f64 so the round-off of a long transform stays
//! far below anything audible.

use rustfft::{num_complex::Complex, FftPlanner};

use super::signal::MonoSignal;
use crate::error::FxError;

/// Full linear convolution computed in the time domain.
///
/// Kernel taps that are exactly zero are skipped.
pub fn convolve(signal: &[f32], kernel: &[f32]) -> Result<MonoSignal, FxError> {
    if signal.is_empty() || kernel.is_empty() {
        return Err(FxError::EmptySignal);
    }

    let out_len = signal.len() + kernel.len() - 1;
    let mut out = vec![0.0f64; out_len];
    let mut active_taps = 0usize;

    for (offset, &tap) in kernel.iter().enumerate() {
        if tap == 0.0 {
            continue;
        }
        active_taps += 1;
        let tap = tap as f64;
        for (y, &x) in out[offset..offset + signal.len()].iter_mut().zip(signal) {
            *y += x as f64 * tap;
        }
    }

    log::debug!(
        "direct convolution: {} samples x {} taps ({} non-zero) -> {} samples",
        signal.len(),
        kernel.len(),
        active_taps,
        out_len
    );

    Ok(out.into_iter().map(|y| y as f32).collect())
}

/// Full linear convolution computed with FFTs.
pub fn fft_convolve(signal: &[f32], kernel: &[f32]) -> Result<MonoSignal, FxError> {
    if signal.is_empty() || kernel.is_empty() {
        return Err(FxError::EmptySignal);
    }

    let out_len = signal.len() + kernel.len() - 1;

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(out_len);
    let inverse = planner.plan_fft_inverse(out_len);

    let mut signal_bins = zero_padded(signal, out_len);
    let mut kernel_bins = zero_padded(kernel, out_len);
    forward.process(&mut signal_bins);
    forward.process(&mut kernel_bins);

    for (s, &k) in signal_bins.iter_mut().zip(kernel_bins.iter()) {
        *s *= k;
    }
    inverse.process(&mut signal_bins);

    log::debug!(
        "fft convolution: {} samples x {} taps -> {} samples",
        signal.len(),
        kernel.len(),
        out_len
    );

    // rustfft leaves the inverse transform unscaled
    let scale = 1.0 / out_len as f64;
    Ok(signal_bins.iter().map(|bin| (bin.re * scale) as f32).collect())
}

fn zero_padded(samples: &[f32], len: usize) -> Vec<Complex<f64>> {
    let mut buffer = vec![Complex::new(0.0, 0.0); len];
    for (bin, &sample) in buffer.iter_mut().zip(samples) {
        bin.re = sample as f64;
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convolve_small_example() {
        let out = convolve(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]).unwrap();
        assert_eq!(out.as_slice(), &[0.0, 1.0, 2.5, 4.0, 1.5]);
    }

    #[test]
    fn test_convolve_identity_kernel() {
        let signal = [0.3, -0.2, 0.9];
        let out = convolve(&signal, &[1.0]).unwrap();
        assert_eq!(out.as_slice(), &signal);
    }

    #[test]
    fn test_convolve_is_commutative() {
        let a = [1.0, -2.0, 0.5, 4.0];
        let b = [0.25, 0.0, 3.0];
        assert_eq!(convolve(&a, &b).unwrap(), convolve(&b, &a).unwrap());
    }

    #[test]
    fn test_convolve_empty_fails() {
        assert_eq!(convolve(&[], &[1.0]), Err(FxError::EmptySignal));
        assert_eq!(fft_convolve(&[1.0], &[]), Err(FxError::EmptySignal));
    }

    #[test]
    fn test_fft_matches_direct() {
        let signal: Vec<f32> = (0..500).map(|i| ((i as f32) * 0.07).sin()).collect();
        let kernel: Vec<f32> = (0..123).map(|i| (-(i as f32) / 30.0).exp()).collect();

        let direct = convolve(&signal, &kernel).unwrap();
        let fast = fft_convolve(&signal, &kernel).unwrap();

        assert_eq!(direct.len(), 622);
        assert_eq!(fast.len(), 622);
        for (i, (&d, &f)) in direct.iter().zip(fast.iter()).enumerate() {
            assert!((d - f).abs() < 1e-4, "sample {}: direct {} vs fft {}", i, d, f);
        }
    }

    #[test]
    fn test_fft_single_samples() {
        let out = fft_convolve(&[2.0], &[0.5]).unwrap();
        assert_eq!(out.len(), 1);
        assert!((out[0] - 1.0).abs() < 1e-9);
    }
}
