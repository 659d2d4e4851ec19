//! Modulation carriers and the wrapping phase accumulator.

/*
Low Frequency Carriers
======================

Tremolo and ring modulation both multiply the input by a slowly moving
carrier. The carrier's position is a phase `t` in radians:

    t = 0  ──→  advance by `increment` every sample  ──→  wrap past 2π

Vocabulary
----------

  carrier       The modulating waveform. Outputs -1.0 to +1.0.

  phase         Where in its cycle the carrier is, in radians [0, 2π].

  increment     How far the phase moves per sample. Larger = faster
                modulation. The effects derive it from their `rate`
                parameter:
                    tremolo         rate × 0.002
                    ring modulator  rate × 0.02   (ten times faster)

  wrap          Once the phase passes 2π it has completed a cycle, so 2π is
                subtracted. Keeping the phase small keeps sin/cos accurate;
                an unbounded phase would slowly lose precision over long
                signals.


Rate in Hertz
-------------

The increment is per SAMPLE, so the carrier frequency depends on the sample
rate:

    f = increment × Fs / 2π

At 48 kHz a tremolo with rate 0.5 (increment 0.001) runs at about 7.6 Hz,
the ring modulator at rate 0.5 at about 76 Hz.


Wrapping Invariant
------------------

The accumulator checks `t > 2π` AFTER each advance and subtracts 2π once.
Because the increment is far below 2π, a single subtraction always brings the
phase back into range: the phase observed at any sample boundary never
exceeds 2π.
*/

use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::oscillator::{square_wave, triangle_alt};
use crate::error::FxError;

/// Waveform used as the modulation carrier.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Carrier {
    #[default]
    Sine,
    Triangle,
    Square,
}

impl Carrier {
    pub const ALL: [Carrier; 3] = [Carrier::Sine, Carrier::Triangle, Carrier::Square];

    /// Map the legacy integer selector (0 = sine, 1 = triangle, 2 = square).
    pub fn from_code(code: u8) -> Result<Self, FxError> {
        match code {
            0 => Ok(Carrier::Sine),
            1 => Ok(Carrier::Triangle),
            2 => Ok(Carrier::Square),
            other => Err(FxError::UnknownCarrier(other)),
        }
    }

    /// Carrier value at phase `t`, in [-1, +1].
    #[inline]
    pub fn value(self, t: f64) -> f64 {
        match self {
            Carrier::Sine => t.sin(),
            Carrier::Triangle => triangle_alt(t),
            Carrier::Square => square_wave(t),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Carrier::Sine => "sine",
            Carrier::Triangle => "triangle",
            Carrier::Square => "square",
        }
    }
}

/// Phase that advances by a fixed increment per sample and wraps past 2π.
#[derive(Debug, Clone, Copy)]
pub struct PhaseAccumulator {
    phase: f64,
    increment: f64,
}

impl PhaseAccumulator {
    pub fn new(increment: f64) -> Self {
        Self {
            phase: 0.0,
            increment,
        }
    }

    /// Current phase in radians.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Move to the next sample.
    #[inline]
    pub fn advance(&mut self) {
        self.phase += self.increment;
        if self.phase > TAU {
            self.phase -= TAU;
        }
    }

    /// Return the current phase, then advance.
    #[inline]
    pub fn next_phase(&mut self) -> f64 {
        let phase = self.phase;
        self.advance();
        phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Carrier::from_code(0), Ok(Carrier::Sine));
        assert_eq!(Carrier::from_code(1), Ok(Carrier::Triangle));
        assert_eq!(Carrier::from_code(2), Ok(Carrier::Square));
        assert_eq!(Carrier::from_code(3), Err(FxError::UnknownCarrier(3)));
    }

    #[test]
    fn test_carrier_values_at_zero() {
        assert_eq!(Carrier::Sine.value(0.0), 0.0);
        assert!((Carrier::Triangle.value(0.0) - 1.0).abs() < 1e-6);
        assert_eq!(Carrier::Square.value(0.0), 1.0);
    }

    #[test]
    fn test_carriers_stay_bipolar() {
        let mut phase = PhaseAccumulator::new(0.05);
        for _ in 0..1000 {
            let t = phase.next_phase();
            for carrier in Carrier::ALL {
                let v = carrier.value(t);
                assert!((-1.0 - 1e-6..=1.0 + 1e-6).contains(&v), "{:?} at {}: {}", carrier, t, v);
            }
        }
    }

    #[test]
    fn test_phase_starts_at_zero() {
        let mut phase = PhaseAccumulator::new(0.5);
        assert_eq!(phase.next_phase(), 0.0);
        assert_eq!(phase.next_phase(), 0.5);
    }

    #[test]
    fn test_phase_never_exceeds_two_pi() {
        let mut phase = PhaseAccumulator::new(0.02);
        for _ in 0..100_000 {
            phase.advance();
            assert!(phase.phase() <= TAU);
            assert!(phase.phase() >= 0.0);
        }
    }

    #[test]
    fn test_phase_wraps_by_subtraction() {
        let mut phase = PhaseAccumulator::new(4.0);
        phase.advance(); // 4.0
        phase.advance(); // 8.0 -> 8.0 - 2π
        assert!((phase.phase() - (8.0 - TAU)).abs() < 1e-12);
    }
}
