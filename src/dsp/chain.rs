//! Effects as values, and chains of them.

/*
Chaining
========

Every effect maps a mono signal to a new mono signal, so effects compose by
feeding one's output into the next:

    source ──→ [overdrive] ──→ [tremolo] ──→ [reverb] ──→ output

Length can grow along the way (delay and reverb append a tail) but never
shrinks. An `Effect` bundles an effect with its parameters so a chain can be
built, stored, or (with the `serde` feature) loaded from a file:

    let chain = Chain::new()
        .then(Effect::Overdrive(OverdriveParams::default()))
        .then(Effect::Tremolo(TremoloParams { rate: 0.8, depth: 1.0 }));
    let out = chain.process(&signal)?;

The first failing effect aborts the whole chain.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::delay::{feedback_delay, fir_delay, FeedbackDelayParams, FirDelayParams};
use super::distortion::{fuzz, overdrive, FuzzParams, OverdriveParams};
use super::filter::lowpass;
use super::modulate::{ring_modulator, tremolo, RingModParams, TremoloParams};
use super::reverb::{reverb, ReverbParams};
use super::signal::MonoSignal;
use crate::error::FxError;

/// One configured effect.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Overdrive(OverdriveParams),
    Fuzz(FuzzParams),
    Tremolo(TremoloParams),
    RingModulator(RingModParams),
    FirDelay(FirDelayParams),
    FeedbackDelay(FeedbackDelayParams),
    Lowpass,
    Reverb {
        impulse_response: MonoSignal,
        params: ReverbParams,
    },
}

impl Effect {
    pub fn apply(&self, signal: &MonoSignal) -> Result<MonoSignal, FxError> {
        match self {
            Effect::Overdrive(params) => Ok(overdrive(signal, params)),
            Effect::Fuzz(params) => fuzz(signal, params),
            Effect::Tremolo(params) => tremolo(signal, params),
            Effect::RingModulator(params) => ring_modulator(signal, params),
            Effect::FirDelay(params) => fir_delay(signal, params),
            Effect::FeedbackDelay(params) => feedback_delay(signal, params),
            Effect::Lowpass => lowpass(signal),
            Effect::Reverb {
                impulse_response,
                params,
            } => reverb(impulse_response, signal, params),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Effect::Overdrive(_) => "overdrive",
            Effect::Fuzz(_) => "fuzz",
            Effect::Tremolo(_) => "tremolo",
            Effect::RingModulator(_) => "ring modulator",
            Effect::FirDelay(_) => "FIR delay",
            Effect::FeedbackDelay(_) => "feedback delay",
            Effect::Lowpass => "low-pass",
            Effect::Reverb { .. } => "reverb",
        }
    }
}

/// Effects applied one after another.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    effects: Vec<Effect>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect to the end of the chain.
    pub fn then(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Run `signal` through every effect in order.
    pub fn process(&self, signal: &MonoSignal) -> Result<MonoSignal, FxError> {
        let mut current = signal.clone();
        for effect in &self.effects {
            log::debug!("applying {} to {} samples", effect.name(), current.len());
            current = effect.apply(&current)?;
        }
        Ok(current)
    }
}

impl FromIterator<Effect> for Chain {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}
