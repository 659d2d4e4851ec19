//! Render a sine through an effect chain and write it to `Results/`.
//!
//! Run with: cargo run --example offline_chain

use fx_lab::dsp::delay::FirDelayParams;
use fx_lab::dsp::distortion::OverdriveParams;
use fx_lab::dsp::modulate::TremoloParams;
use fx_lab::dsp::oscillator::{sine_wave_with, AngularFrequency};
use fx_lab::io::{results_path, write_wav};
use fx_lab::{Chain, Effect, DEFAULT_SAMPLE_RATE};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let dry = sine_wave_with(
        0.5,
        220.0,
        DEFAULT_SAMPLE_RATE,
        2.0,
        AngularFrequency::Conventional,
    );

    let chain = Chain::new()
        .then(Effect::Overdrive(OverdriveParams::default()))
        .then(Effect::Tremolo(TremoloParams {
            rate: 0.8,
            depth: 0.7,
        }))
        .then(Effect::FirDelay(FirDelayParams::new(250.0, 0.4)))
        .then(Effect::Lowpass);

    let wet = chain.process(&dry)?;
    let path = results_path(".")?.join("offline_chain.wav");
    write_wav(&path, &wet, DEFAULT_SAMPLE_RATE)?;

    println!(
        "Rendered {} samples ({:.2}s) to {}",
        wet.len(),
        wet.duration(DEFAULT_SAMPLE_RATE),
        path.display()
    );
    Ok(())
}
