//! Signal containers and the utilities every effect builds on.

/*
Mono and Stereo
===============

All effects in this crate work on a single channel. Audio coming from files
is often stereo, so there are two explicit types:

  MonoSignal      one sample per time step
  StereoSignal    one [left, right] frame per time step

The only way from one to the other is `IntoMono::to_mono`. Down-mixing sums
the two channels and renormalizes the result, because the raw sum of two
full-scale channels can reach 2.0:

    left   ──┐
             (+) ──→ normalize(0.99) ──→ mono
    right  ──┘

Calling `to_mono` on something that is already mono hands back an identical
copy, so the conversion is idempotent.


Normalization
-------------

    normalize(ys, amp) = ys × amp / max(|max(ys)|, |min(ys)|)

The loudest sample (positive or negative) ends up at exactly ±amp and every
other sample keeps its relative level. A silent signal has no loudest sample,
so it is rejected rather than producing NaNs.
*/

use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FxError;
use crate::NORMALIZE_AMPLITUDE;

/// A single-channel signal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonoSignal {
    samples: Vec<f32>,
}

impl MonoSignal {
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// A signal of `len` zero samples.
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.samples
    }

    /// Largest absolute sample value, 0.0 for an empty signal.
    pub fn peak(&self) -> f32 {
        peak(&self.samples)
    }

    /// Scale to the given peak amplitude. See [`normalize`].
    pub fn normalized(&self, amp: f32) -> Result<MonoSignal, FxError> {
        normalize(&self.samples, amp)
    }

    /// Time value in seconds for every sample. See [`time`].
    pub fn time(&self, sample_rate: u32) -> Vec<f32> {
        time(self.samples.len(), sample_rate)
    }

    /// Duration in seconds.
    pub fn duration(&self, sample_rate: u32) -> f32 {
        self.samples.len() as f32 / sample_rate as f32
    }
}

impl Deref for MonoSignal {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.samples
    }
}

impl From<Vec<f32>> for MonoSignal {
    fn from(samples: Vec<f32>) -> Self {
        Self::new(samples)
    }
}

impl From<&[f32]> for MonoSignal {
    fn from(samples: &[f32]) -> Self {
        Self::new(samples.to_vec())
    }
}

impl FromIterator<f32> for MonoSignal {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A two-channel signal stored as `[left, right]` frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StereoSignal {
    frames: Vec<[f32; 2]>,
}

impl StereoSignal {
    pub fn from_frames(frames: Vec<[f32; 2]>) -> Self {
        Self { frames }
    }

    /// Pair up two channels. Both must have the same length.
    pub fn from_channels(left: &[f32], right: &[f32]) -> Result<Self, FxError> {
        if left.len() != right.len() {
            return Err(FxError::ChannelLengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        let frames = left.iter().zip(right).map(|(&l, &r)| [l, r]).collect();
        Ok(Self { frames })
    }

    /// Build from `L R L R ...` samples. A trailing half frame is dropped.
    pub fn from_interleaved(samples: &[f32]) -> Self {
        let frames = samples
            .chunks_exact(2)
            .map(|frame| [frame[0], frame[1]])
            .collect();
        Self { frames }
    }

    pub fn frames(&self) -> &[[f32; 2]] {
        &self.frames
    }

    pub fn left(&self) -> impl Iterator<Item = f32> + '_ {
        self.frames.iter().map(|frame| frame[0])
    }

    pub fn right(&self) -> impl Iterator<Item = f32> + '_ {
        self.frames.iter().map(|frame| frame[1])
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// A signal whose channel layout is only known at runtime (e.g. from a file).
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Mono(MonoSignal),
    Stereo(StereoSignal),
}

impl Signal {
    /// Number of time steps (frames).
    pub fn len(&self) -> usize {
        match self {
            Signal::Mono(signal) => signal.len(),
            Signal::Stereo(signal) => signal.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn channels(&self) -> u16 {
        match self {
            Signal::Mono(_) => 1,
            Signal::Stereo(_) => 2,
        }
    }
}

impl From<MonoSignal> for Signal {
    fn from(signal: MonoSignal) -> Self {
        Signal::Mono(signal)
    }
}

impl From<StereoSignal> for Signal {
    fn from(signal: StereoSignal) -> Self {
        Signal::Stereo(signal)
    }
}

/// Explicit reduction to a single channel.
pub trait IntoMono {
    fn to_mono(&self) -> Result<MonoSignal, FxError>;
}

impl IntoMono for MonoSignal {
    /// Already mono: returned unchanged.
    fn to_mono(&self) -> Result<MonoSignal, FxError> {
        Ok(self.clone())
    }
}

impl IntoMono for StereoSignal {
    /// Sum both channels and renormalize to [`NORMALIZE_AMPLITUDE`].
    fn to_mono(&self) -> Result<MonoSignal, FxError> {
        let summed: Vec<f32> = self.frames.iter().map(|[l, r]| l + r).collect();
        let mono = normalize(&summed, NORMALIZE_AMPLITUDE)?;
        log::debug!("down-mixed {} stereo frames to mono", mono.len());
        Ok(mono)
    }
}

impl IntoMono for Signal {
    fn to_mono(&self) -> Result<MonoSignal, FxError> {
        match self {
            Signal::Mono(signal) => signal.to_mono(),
            Signal::Stereo(signal) => signal.to_mono(),
        }
    }
}

/// Scale `ys` so its loudest sample sits at `±amp`.
///
/// Fails with [`FxError::SilentSignal`] when every sample is zero and with
/// [`FxError::EmptySignal`] when there are no samples at all.
pub fn normalize(ys: &[f32], amp: f32) -> Result<MonoSignal, FxError> {
    if ys.is_empty() {
        return Err(FxError::EmptySignal);
    }

    let high = ys.iter().copied().fold(f32::NEG_INFINITY, f32::max).abs();
    let low = ys.iter().copied().fold(f32::INFINITY, f32::min).abs();
    let loudest = high.max(low);
    if loudest == 0.0 {
        return Err(FxError::SilentSignal);
    }

    let scale = amp / loudest;
    Ok(ys.iter().map(|&y| y * scale).collect())
}

/// Evenly spaced time values, one per sample, spanning
/// `[0, len / sample_rate]` with both ends included.
pub fn time(len: usize, sample_rate: u32) -> Vec<f32> {
    let duration = len as f64 / sample_rate as f64;
    linspace(0.0, duration, len)
}

/// Largest absolute sample value, 0.0 for an empty slice.
#[inline]
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
}

/// Root-mean-square level, 0.0 for an empty slice.
#[inline]
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    (samples.iter().map(|&x| x * x).sum::<f32>() / samples.len() as f32).sqrt()
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start as f32],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f32> = (0..n).map(|i| (start + i as f64 * step) as f32).collect();
            values[n - 1] = stop as f32;
            values
        }
    }
}
