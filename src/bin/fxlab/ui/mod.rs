//! TUI module for fxlab
//!
//! Plots the dry and processed signal around the playhead, plus the
//! spectrum of the processed signal.

mod spectrum;
mod transport;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub use spectrum::SpectrumAnalyzer;

use spectrum::render_spectrum;
use transport::render_transport;
use waveform::render_waveform;

/// Samples per FFT frame, also the width of the waveform views
pub const FFT_SIZE: usize = 2048;

/// Everything the UI needs to draw one frame
pub struct View<'a> {
    pub source_name: &'a str,
    pub effect_name: &'a str,
    pub sample_rate: u32,
    pub dry: &'a [f32],
    pub wet: &'a [f32],
    pub playhead: usize,
    pub is_playing: bool,
    pub spectrum: &'a [(f64, f64)],
    pub message: &'a str,
}

/// Up to `len` samples starting at `start`, clamped to the signal
pub fn window(samples: &[f32], start: usize, len: usize) -> &[f32] {
    let start = start.min(samples.len());
    let end = (start + len).min(samples.len());
    &samples[start..end]
}

/// Render the UI
pub fn render(frame: &mut Frame, view: &View) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Transport bar
            Constraint::Min(6),     // Dry waveform
            Constraint::Min(6),     // Wet waveform
            Constraint::Length(10), // Spectrum
            Constraint::Length(1),  // Help bar
        ])
        .split(area);

    render_transport(frame, chunks[0], view);

    render_waveform(
        frame,
        chunks[1],
        " Dry ",
        window(view.dry, view.playhead, FFT_SIZE),
        Color::Cyan,
    );
    let wet_title = format!(" Wet ({}) ", view.effect_name);
    render_waveform(
        frame,
        chunks[2],
        &wet_title,
        window(view.wet, view.playhead, FFT_SIZE),
        Color::Yellow,
    );

    render_spectrum(frame, chunks[3], view.spectrum);

    let help = Paragraph::new(
        " [0] Bypass [1] Overdrive [2] Fuzz [3] Tremolo [4-6] Ring mod [7] FIR delay \
         [8] Delay [9] Low-pass [R] Reverb  [Space] Play  [←/→] Seek  [W] Write  [Q] Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamps_to_signal() {
        let samples = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(window(&samples, 1, 2), &[2.0, 3.0]);
        assert_eq!(window(&samples, 3, 10), &[4.0]);
        assert!(window(&samples, 10, 10).is_empty());
    }
}
