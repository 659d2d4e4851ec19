//! Echo effects.

/*
FIR Delay
=========

A single echo is a convolution with a two-tap impulse response:

    h = [1, 0, 0, ..., 0, amplitude]
         ↑                 ↑
         dry (n = 0)       echo (n = d - 1)

    d = round(delay_ms / 1000 × Fs)

Rounding is half-to-even, so 2.5 samples become 2. The output keeps the full
convolution tail and is `len + d - 1` samples long. For d = 1 the echo tap
overwrites the dry tap and the "delay" degenerates to a gain of `amplitude`.

Note the echo lands one sample EARLIER than the nominal delay, because the
last index of a d-sample kernel is d - 1.


Blended Delay
=============

`feedback_delay` is the offline rendition of a hardware delay line. Each
input sample is scaled by `feedback` on its way into a ring buffer and comes
back out `d` samples later:

    y[n] = (1 - blend) × x[n] + blend × feedback × x[n - d]

    d = trunc(delay_ms × Fs / 1000),  x[n - d] = 0 before the line fills

Only the input is written into the line, never the output, so there is a
single echo rather than a decaying train. The output has the input's length.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::convolve::convolve;
use super::mix::blend_dry_wet;
use super::signal::MonoSignal;
use crate::error::FxError;
use crate::DEFAULT_SAMPLE_RATE;

/// Longest delay the blended delay accepts, in milliseconds.
pub const MAX_DELAY_MS: f32 = 500.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirDelayParams {
    /// Echo delay in milliseconds.
    pub delay_ms: f32,
    /// Echo amplitude relative to the dry signal.
    pub amplitude: f32,
    pub sample_rate: u32,
}

impl FirDelayParams {
    pub fn new(delay_ms: f32, amplitude: f32) -> Self {
        Self {
            delay_ms,
            amplitude,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Kernel length in samples, rounding half to even.
    pub fn delay_samples(&self) -> i64 {
        (self.delay_ms as f64 / 1000.0 * self.sample_rate as f64).round_ties_even() as i64
    }
}

impl Default for FirDelayParams {
    fn default() -> Self {
        Self::new(250.0, 0.5)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackDelayParams {
    /// Delay in milliseconds, at most [`MAX_DELAY_MS`].
    pub delay_ms: f32,
    /// Level of the delayed copy, 0.0 to 1.0.
    pub feedback: f32,
    /// Share of the delayed signal in the output, 0.0 to 1.0.
    pub blend: f32,
    pub sample_rate: u32,
}

impl Default for FeedbackDelayParams {
    fn default() -> Self {
        Self {
            delay_ms: 250.0,
            feedback: 0.5,
            blend: 0.5,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl FeedbackDelayParams {
    /// Accepts the closed ranges `delay_ms` in [0, 500] and `feedback`,
    /// `blend` in [0, 1], end points included. `blend = 0` is a bypass and
    /// `blend = 1` leaves only the echo.
    pub fn validate(&self) -> Result<(), FxError> {
        FxError::check_range("delay_ms", self.delay_ms, 0.0, MAX_DELAY_MS)?;
        FxError::check_range("feedback", self.feedback, 0.0, 1.0)?;
        FxError::check_range("blend", self.blend, 0.0, 1.0)
    }

    /// Delay in whole samples (truncated).
    pub fn delay_samples(&self) -> usize {
        (self.delay_ms * (self.sample_rate as f32 / 1000.0)) as usize
    }
}

/// The two-tap kernel used by [`fir_delay`].
pub fn delay_impulse_response(params: &FirDelayParams) -> Result<MonoSignal, FxError> {
    let len = params.delay_samples();
    if len < 1 {
        return Err(FxError::DelayTooShort {
            delay_ms: params.delay_ms,
            sample_rate: params.sample_rate,
        });
    }

    let mut response = MonoSignal::zeros(len as usize);
    let taps = response.as_mut_slice();
    taps[0] = 1.0;
    taps[len as usize - 1] = params.amplitude;
    Ok(response)
}

/// Add a single echo by convolving with [`delay_impulse_response`].
pub fn fir_delay(signal: &MonoSignal, params: &FirDelayParams) -> Result<MonoSignal, FxError> {
    let response = delay_impulse_response(params)?;
    convolve(signal, &response)
}

/// Blend the input with a delayed, attenuated copy of itself.
pub fn feedback_delay(
    signal: &MonoSignal,
    params: &FeedbackDelayParams,
) -> Result<MonoSignal, FxError> {
    params.validate()?;

    let mut line = DelayLine::new(params.delay_samples());
    Ok(signal
        .iter()
        .map(|&x| {
            let delayed = line.next_sample(x * params.feedback);
            blend_dry_wet(x, delayed, params.blend)
        })
        .collect())
}

/// Fixed-length ring buffer delay line.
pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl DelayLine {
    pub fn new(delay_samples: usize) -> Self {
        Self {
            buffer: vec![0.0; delay_samples + 1],
            write_pos: 0,
        }
    }

    /// Push `sample` and return the sample written `delay_samples` calls ago.
    pub fn next_sample(&mut self, sample: f32) -> f32 {
        let len = self.buffer.len();
        self.buffer[self.write_pos] = sample;

        let read_pos = (self.write_pos + 1) % len;
        let delayed = self.buffer[read_pos];

        self.write_pos = read_pos;

        delayed
    }
}
