//! File I/O: WAV loading/writing and result directories.
//!
//! Uses `hound` so impulse responses and source material can be loaded from
//! disk and processed signals written back for listening.

use std::fs;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use thiserror::Error;

use crate::dsp::signal::{MonoSignal, Signal, StereoSignal};
use crate::error::FxError;

/// Directory created under the base path by [`results_path`].
pub const RESULTS_DIR: &str = "Results";

#[derive(Error, Debug)]
pub enum WavError {
    #[error("WAV error: {0}")]
    Hound(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported channel count {0} (expected 1 or 2)")]
    UnsupportedChannels(u16),

    #[error(transparent)]
    Fx(#[from] FxError),
}

/// A decoded WAV file.
#[derive(Debug, Clone)]
pub struct AudioFile {
    pub sample_rate: u32,
    pub signal: Signal,
}

/// Read a mono or stereo WAV file.
///
/// Integer PCM is scaled to [-1, 1); float samples are read as-is.
pub fn read_wav(path: impl AsRef<Path>) -> Result<AudioFile, WavError> {
    let mut reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|sample| sample.map(|s| s as f32 * scale))
                .collect::<Result<_, _>>()?
        }
    };

    let signal = match spec.channels {
        1 => Signal::Mono(MonoSignal::new(samples)),
        2 => Signal::Stereo(StereoSignal::from_interleaved(&samples)),
        other => return Err(WavError::UnsupportedChannels(other)),
    };

    log::debug!(
        "read {} ({} Hz, {} channel(s), {} frames)",
        path.as_ref().display(),
        spec.sample_rate,
        spec.channels,
        signal.len()
    );

    Ok(AudioFile {
        sample_rate: spec.sample_rate,
        signal,
    })
}

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    }
}

/// Write a mono signal as a 32-bit float WAV file.
pub fn write_wav(
    path: impl AsRef<Path>,
    signal: &MonoSignal,
    sample_rate: u32,
) -> Result<(), WavError> {
    let mut writer = WavWriter::create(path.as_ref(), wav_spec(sample_rate))?;
    for &sample in signal.iter() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Ensure `base/Results` exists and return its path.
pub fn results_path(base: impl AsRef<Path>) -> Result<PathBuf, WavError> {
    let dir = base.as_ref().join(RESULTS_DIR);
    if !dir.is_dir() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}
