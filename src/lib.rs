pub mod dsp; // Signal utilities, generators and effects
pub mod error;
#[cfg(feature = "wav")]
pub mod io; // WAV loading/writing and result directories

pub use dsp::chain::{Chain, Effect};
pub use dsp::signal::{IntoMono, MonoSignal, Signal, StereoSignal};
pub use error::FxError;

/// Sampling rate assumed by effects when none is configured.
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;
/// Peak amplitude produced by `normalize` and stereo down-mixing.
pub const NORMALIZE_AMPLITUDE: f32 = 0.99;
