//! Spectrum of the processed signal at the playhead
//!
//! One Hann-windowed FFT frame, sampled at log-spaced display frequencies.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

use fx_lab::dsp::amplify::magnitude_to_db;

/// Points plotted between 20 Hz and Nyquist
const DISPLAY_POINTS: usize = 48;

/// Floor of the dB scale
const MIN_DB: f64 = -100.0;

pub struct SpectrumAnalyzer {
    taper: Vec<f32>,
    /// FFT bin sampled for each display point
    bin_for_point: Vec<usize>,
    fft: Arc<dyn Fft<f32>>,
    bins: Vec<Complex<f32>>,
    /// (frequency_hz, magnitude_db) per display point
    points: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    /// Analyzer for `frame_len`-sample frames of a `sample_rate` Hz signal
    pub fn new(frame_len: usize, sample_rate: f32) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(frame_len);
        let taper = hann(frame_len);

        let nyquist = (sample_rate as f64 / 2.0).min(20_000.0).max(1.0);
        let lowest = 20.0f64.min(nyquist);
        let last_bin = (frame_len / 2).max(1) - 1;
        let hz_per_bin = sample_rate as f64 / frame_len as f64;

        let (points, bin_for_point) = (0..DISPLAY_POINTS)
            .map(|i| {
                let position = i as f64 / (DISPLAY_POINTS - 1) as f64;
                let freq = lowest * (nyquist / lowest).powf(position);
                let bin = ((freq / hz_per_bin).round() as usize).min(last_bin);
                ((freq, MIN_DB), bin)
            })
            .unzip();

        Self {
            taper,
            bin_for_point,
            fft,
            bins: vec![Complex::default(); frame_len],
            points,
        }
    }

    /// Analyze one frame; frames of the wrong length are ignored
    pub fn update(&mut self, frame: &[f32]) {
        if frame.len() != self.taper.len() {
            return;
        }

        for ((bin, &sample), &gain) in self.bins.iter_mut().zip(frame).zip(&self.taper) {
            *bin = Complex::new(sample * gain, 0.0);
        }
        self.fft.process(&mut self.bins);

        // A full-scale sine reads close to 0 dB
        let scale = 4.0 / self.taper.len() as f32;
        for ((_, db), &bin) in self.points.iter_mut().zip(&self.bin_for_point) {
            let magnitude = self.bins[bin].norm() * scale;
            *db = (magnitude_to_db(magnitude) as f64).max(MIN_DB);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.points
    }
}

fn hann(len: usize) -> Vec<f32> {
    if len < 2 {
        return vec![1.0; len];
    }
    let span = (len - 1) as f64;
    (0..len)
        .map(|n| (0.5 - 0.5 * (std::f64::consts::TAU * n as f64 / span).cos()) as f32)
        .collect()
}

/// Render the spectrum analyzer widget
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let max_freq = spectrum
        .iter()
        .map(|(f, _)| *f)
        .fold(0.0, f64::max)
        .max(1.0);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_freq])
                .labels(vec!["20 Hz".to_string(), format!("{:.0} Hz", max_freq)])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([MIN_DB, 10.0])
                .labels(vec!["-100", "-60", "-20", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_peaks_near_its_frequency() {
        let size = 2048;
        let sample_rate = 48_000.0;
        let mut analyzer = SpectrumAnalyzer::new(size, sample_rate);
        let tone: Vec<f32> = (0..size)
            .map(|n| (std::f32::consts::TAU * 1_000.0 * n as f32 / sample_rate).sin())
            .collect();
        analyzer.update(&tone);

        let (loudest_freq, loudest_db) = analyzer
            .data()
            .iter()
            .copied()
            .fold((0.0, MIN_DB), |best, point| if point.1 > best.1 { point } else { best });
        assert!(loudest_freq > 700.0 && loudest_freq < 1_400.0, "peak at {} Hz", loudest_freq);
        // Display bins are log-spaced, so the tone sits between two of them
        assert!(loudest_db > -40.0);
        assert!(analyzer
            .data()
            .iter()
            .filter(|&&(freq, _)| freq > 5_000.0)
            .all(|&(_, db)| db < -60.0));
    }

    #[test]
    fn test_wrong_length_is_ignored() {
        let mut analyzer = SpectrumAnalyzer::new(64, 48_000.0);
        analyzer.update(&[1.0; 32]);
        assert!(analyzer.data().iter().all(|&(_, db)| db == MIN_DB));
    }
}
