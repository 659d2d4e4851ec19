use thiserror::Error;

/// Everything an effect or utility can reject.
///
/// Effects never return partial output: the first violated precondition
/// aborts the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    #[error("{name} must be within [{min}, {max}], got {value}")]
    ParameterOutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("unknown carrier code {0} (expected 0 = sine, 1 = triangle, 2 = square)")]
    UnknownCarrier(u8),

    #[error("cannot normalize a silent signal")]
    SilentSignal,

    #[error("signal is empty")]
    EmptySignal,

    #[error("delay of {delay_ms} ms at {sample_rate} Hz is shorter than one sample")]
    DelayTooShort { delay_ms: f32, sample_rate: u32 },

    #[error("impulse response needs at least two non-zero samples, got {0}")]
    ImpulseResponseTooShort(usize),

    #[error("stereo channels differ in length (left {left}, right {right})")]
    ChannelLengthMismatch { left: usize, right: usize },
}

impl FxError {
    /// Check that `value` lies within `[min, max]`.
    pub(crate) fn check_range(
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    ) -> Result<(), FxError> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(FxError::ParameterOutOfRange {
                name,
                value,
                min,
                max,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_inclusive() {
        assert!(FxError::check_range("rate", 0.0, 0.0, 1.0).is_ok());
        assert!(FxError::check_range("rate", 1.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_check_range_rejects_nan() {
        assert!(FxError::check_range("rate", f32::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = FxError::check_range("depth", 1.5, 0.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "depth must be within [0, 1], got 1.5");
    }
}
