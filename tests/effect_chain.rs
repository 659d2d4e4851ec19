use fx_lab::dsp::delay::{fir_delay, FeedbackDelayParams, FirDelayParams};
use fx_lab::dsp::distortion::{FuzzParams, OverdriveParams};
use fx_lab::dsp::modulate::{RingModParams, TremoloParams};
use fx_lab::dsp::oscillator::sine_wave;
use fx_lab::dsp::reverb::ReverbParams;
use fx_lab::dsp::Carrier;
use fx_lab::{Chain, Effect, FxError, IntoMono, MonoSignal, Signal, StereoSignal};

fn guitar_like(len: usize) -> MonoSignal {
    (0..len)
        .map(|i| {
            let t = i as f32 / 48_000.0;
            (-3.0 * t).exp() * (std::f32::consts::TAU * 196.0 * t).sin() * 0.8
        })
        .collect()
}

fn room(len: usize) -> MonoSignal {
    (0..len)
        .map(|i| {
            let decay = (-(i as f32) / (len as f32 / 4.0)).exp();
            let noise = ((i as f32 * 78.233).sin() * 43_758.547).fract() - 0.5;
            decay * noise
        })
        .collect()
}

#[test]
fn pedalboard_chain_keeps_lengths_consistent() {
    let dry = guitar_like(4_800);
    let delay = FirDelayParams::new(10.0, 0.4);
    let delay_len = delay.delay_samples() as usize;

    let chain = Chain::new()
        .then(Effect::Overdrive(OverdriveParams::default()))
        .then(Effect::Tremolo(TremoloParams::default()))
        .then(Effect::FirDelay(delay))
        .then(Effect::Lowpass);

    let wet = chain.process(&dry).unwrap();
    assert_eq!(wet.len(), dry.len() + delay_len - 1);
    assert!(wet.iter().all(|x| x.is_finite()));
}

#[test]
fn fir_delay_length_follows_rounding() {
    let signal = guitar_like(1_000);
    for &(delay_ms, sample_rate) in &[(250.0f32, 48_000u32), (1.0, 44_100), (0.5, 5_000)] {
        let params = FirDelayParams::new(delay_ms, 0.5).with_sample_rate(sample_rate);
        let expected = (delay_ms as f64 / 1000.0 * sample_rate as f64).round_ties_even() as usize;
        let out = fir_delay(&signal, &params).unwrap();
        assert_eq!(out.len(), signal.len() + expected - 1);
    }
}

#[test]
fn fir_delay_rejects_sub_sample_delay() {
    let signal = guitar_like(100);
    let params = FirDelayParams::new(0.01, 0.5);
    assert!(matches!(
        fir_delay(&signal, &params),
        Err(FxError::DelayTooShort { .. })
    ));
}

#[test]
fn reverb_ends_chain_with_normalized_tail() {
    let dry = guitar_like(2_400);
    let ir = room(1_200);

    let chain = Chain::new()
        .then(Effect::Fuzz(FuzzParams::default()))
        .then(Effect::Reverb {
            impulse_response: ir.clone(),
            params: ReverbParams::default(),
        });

    let wet = chain.process(&dry).unwrap();
    assert_eq!(wet.len(), dry.len() + ir.len() - 1);
    assert!((wet.peak() - 0.99).abs() < 1e-4);
}

#[test]
fn chain_stops_at_first_invalid_effect() {
    let dry = guitar_like(480);
    let chain: Chain = vec![
        Effect::Overdrive(OverdriveParams::default()),
        Effect::FeedbackDelay(FeedbackDelayParams {
            delay_ms: 750.0,
            ..FeedbackDelayParams::default()
        }),
        Effect::Lowpass,
    ]
    .into_iter()
    .collect();

    assert!(matches!(
        chain.process(&dry),
        Err(FxError::ParameterOutOfRange { name: "delay_ms", .. })
    ));
}

#[test]
fn every_carrier_drives_the_ring_modulator() {
    let dry = sine_wave(0.5, 440.0, 48_000, 0.05);
    for carrier in Carrier::ALL {
        let effect = Effect::RingModulator(RingModParams {
            carrier,
            rate: 0.8,
            blend: 1.0,
        });
        let wet = effect.apply(&dry).unwrap();
        assert_eq!(wet.len(), dry.len());
        assert!(wet.peak() <= dry.peak() + 1e-6, "{}", carrier.name());
    }
}

#[test]
fn stereo_source_is_downmixed_before_processing() {
    let left = guitar_like(960);
    let right: Vec<f32> = left.iter().map(|x| x * 0.5).collect();
    let stereo = StereoSignal::from_channels(&left, &right).unwrap();
    let signal = Signal::from(stereo);

    let mono = signal.to_mono().unwrap();
    assert_eq!(mono.len(), 960);
    assert!((mono.peak() - 0.99).abs() < 1e-5);

    // Down-mixing is explicit and idempotent once mono
    assert_eq!(mono.to_mono().unwrap(), mono);

    let wet = Chain::new()
        .then(Effect::Overdrive(OverdriveParams::default()))
        .process(&mono)
        .unwrap();
    assert_eq!(wet.len(), mono.len());
}
