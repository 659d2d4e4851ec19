//! fxlab application state and event loop

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use fx_lab::dsp::delay::{FeedbackDelayParams, FirDelayParams};
use fx_lab::dsp::distortion::{FuzzParams, OverdriveParams};
use fx_lab::dsp::modulate::{RingModParams, TremoloParams};
use fx_lab::dsp::oscillator::sine_wave;
use fx_lab::dsp::reverb::ReverbParams;
use fx_lab::dsp::Carrier;
use fx_lab::io::{read_wav, results_path, write_wav};
use fx_lab::{Effect, IntoMono, MonoSignal, DEFAULT_SAMPLE_RATE};

use super::playback::Player;
use super::ui::{self, SpectrumAnalyzer, FFT_SIZE};

/// Dry material plus an optional impulse response for the reverb preset
pub struct Source {
    pub name: String,
    pub dry: MonoSignal,
    pub sample_rate: u32,
    pub impulse_response: Option<(MonoSignal, u32)>,
}

impl Source {
    /// Load the input and impulse response files, or fall back to a demo tone
    pub fn load(input: Option<&String>, impulse_response: Option<&String>) -> EyreResult<Self> {
        let (name, dry, sample_rate) = match input {
            Some(path) => {
                let file = read_wav(path).wrap_err_with(|| format!("failed to read {}", path))?;
                let dry = file
                    .signal
                    .to_mono()
                    .wrap_err_with(|| format!("failed to down-mix {}", path))?;
                (file_stem(path), dry, file.sample_rate)
            }
            None => (
                "demo tone".to_string(),
                sine_wave(0.8, 880.0, DEFAULT_SAMPLE_RATE, 2.0),
                DEFAULT_SAMPLE_RATE,
            ),
        };

        let impulse_response = match impulse_response {
            Some(path) => {
                let file = read_wav(path).wrap_err_with(|| format!("failed to read {}", path))?;
                let ir = file
                    .signal
                    .to_mono()
                    .wrap_err_with(|| format!("failed to down-mix {}", path))?;
                Some((ir, file.sample_rate))
            }
            None => None,
        };

        Ok(Self {
            name,
            dry,
            sample_rate,
            impulse_response,
        })
    }

    /// Effect preset bound to a key, `None` for bypass or unbound keys
    fn preset(&self, key: char) -> Option<Effect> {
        let ring_mod = |carrier| {
            Effect::RingModulator(RingModParams {
                carrier,
                ..RingModParams::default()
            })
        };

        match key {
            '1' => Some(Effect::Overdrive(OverdriveParams::default())),
            '2' => Some(Effect::Fuzz(FuzzParams::default())),
            '3' => Some(Effect::Tremolo(TremoloParams::default())),
            '4' => Some(ring_mod(Carrier::Sine)),
            '5' => Some(ring_mod(Carrier::Triangle)),
            '6' => Some(ring_mod(Carrier::Square)),
            '7' => Some(Effect::FirDelay(
                FirDelayParams::default().with_sample_rate(self.sample_rate),
            )),
            '8' => Some(Effect::FeedbackDelay(FeedbackDelayParams {
                sample_rate: self.sample_rate,
                ..FeedbackDelayParams::default()
            })),
            '9' => Some(Effect::Lowpass),
            'r' => self
                .impulse_response
                .as_ref()
                .map(|(ir, ir_sample_rate)| Effect::Reverb {
                    impulse_response: ir.clone(),
                    params: ReverbParams {
                        ir_sample_rate: *ir_sample_rate,
                        sample_rate: self.sample_rate,
                        ..ReverbParams::default()
                    },
                }),
            _ => None,
        }
    }
}

/// Main application state
pub struct App {
    source: Source,
    /// Currently applied effect (`None` = bypass)
    effect: Option<Effect>,
    /// Processed signal
    wet: Arc<[f32]>,
    /// Active playback, if any
    player: Option<Player>,
    /// Position shown in the waveform views
    playhead: usize,
    spectrum: SpectrumAnalyzer,
    /// Last status or error message
    message: String,
    should_quit: bool,
}

impl App {
    pub fn new(source: Source) -> Self {
        let wet: Arc<[f32]> = Arc::from(source.dry.as_slice());
        let spectrum = SpectrumAnalyzer::new(FFT_SIZE, source.sample_rate as f32);
        let message = format!("loaded {}", source.name);
        let mut app = Self {
            source,
            effect: None,
            wet,
            player: None,
            playhead: 0,
            spectrum,
            message,
            should_quit: false,
        };
        app.refresh_spectrum();
        app
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_playback();

            terminal.draw(|frame| ui::render(frame, &self.view()))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn view(&self) -> ui::View<'_> {
        ui::View {
            source_name: &self.source.name,
            effect_name: self.effect.as_ref().map_or("bypass", Effect::name),
            sample_rate: self.source.sample_rate,
            dry: &self.source.dry,
            wet: &self.wet,
            playhead: self.playhead,
            is_playing: self.player.is_some(),
            spectrum: self.spectrum.data(),
            message: &self.message,
        }
    }

    fn poll_playback(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let position = player.poll();
        let finished = player.finished();
        if position != self.playhead {
            self.playhead = position;
            self.refresh_spectrum();
        }
        if finished {
            self.player = None;
            self.message = "playback finished".to_string();
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => self.toggle_playback(),
            KeyCode::Char('w') => self.write_result(),
            KeyCode::Char('0') => self.select(None),
            KeyCode::Char(c) => match self.source.preset(c) {
                Some(effect) => self.select(Some(effect)),
                None if c == 'r' => {
                    self.message = "no impulse response loaded".to_string();
                }
                None => {}
            },
            KeyCode::Left => self.seek(-(FFT_SIZE as isize)),
            KeyCode::Right => self.seek(FFT_SIZE as isize),
            _ => {}
        }
    }

    /// Re-render the wet signal with a new effect
    fn select(&mut self, effect: Option<Effect>) {
        self.player = None;

        let rendered = match &effect {
            Some(effect) => effect.apply(&self.source.dry),
            None => Ok(self.source.dry.clone()),
        };

        match rendered {
            Ok(wet) => {
                self.message = format!(
                    "{}: {} -> {} samples",
                    effect.as_ref().map_or("bypass", Effect::name),
                    self.source.dry.len(),
                    wet.len()
                );
                self.wet = Arc::from(wet.into_inner());
                self.effect = effect;
                self.playhead = self.playhead.min(self.wet.len());
                self.refresh_spectrum();
            }
            Err(err) => self.message = format!("error: {}", err),
        }
    }

    fn toggle_playback(&mut self) {
        if self.player.take().is_some() {
            self.message = "stopped".to_string();
            return;
        }

        match Player::start(self.wet.clone(), self.source.sample_rate) {
            Ok(player) => {
                self.player = Some(player);
                self.playhead = 0;
                self.message = "playing".to_string();
            }
            Err(err) => self.message = format!("error: {:#}", err),
        }
    }

    fn seek(&mut self, delta: isize) {
        if self.player.is_some() {
            return;
        }
        let max = self.wet.len().saturating_sub(1);
        self.playhead = self.playhead.saturating_add_signed(delta).min(max);
        self.refresh_spectrum();
    }

    fn write_result(&mut self) {
        let name = self.effect.as_ref().map_or("bypass", Effect::name);
        let file_name = format!("{}_{}.wav", self.source.name, name).replace(' ', "_");
        let wet = MonoSignal::from(&self.wet[..]);

        let written = results_path(".").and_then(|dir| {
            let path = dir.join(file_name);
            write_wav(&path, &wet, self.source.sample_rate).map(|_| path)
        });

        self.message = match written {
            Ok(path) => format!("wrote {}", path.display()),
            Err(err) => format!("error: {}", err),
        };
    }

    fn refresh_spectrum(&mut self) {
        let window = ui::window(&self.wet, self.playhead, FFT_SIZE);
        let mut buffer = vec![0.0f32; FFT_SIZE];
        buffer[..window.len()].copy_from_slice(window);
        self.spectrum.update(&buffer);
    }
}

fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
