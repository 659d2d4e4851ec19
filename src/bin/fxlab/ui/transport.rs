//! Transport bar widget - shows effect, play state, position, and signal stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use fx_lab::dsp::signal::{peak, rms};

use super::View;

/// Render the transport bar
pub fn render_transport(frame: &mut Frame, area: Rect, view: &View) {
    let block = Block::default()
        .title(format!(" fxlab: {} ", view.source_name))
        .borders(Borders::ALL);

    let play_symbol = if view.is_playing { "▶" } else { "■" };
    let seconds = |samples: usize| samples as f32 / view.sample_rate as f32;

    let line = Line::from(vec![
        Span::styled(
            format!(" {}  ", view.effect_name),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{}  ", play_symbol),
            Style::default().fg(if view.is_playing {
                Color::Green
            } else {
                Color::Yellow
            }),
        ),
        Span::styled(
            format!(
                "{:.2}s / {:.2}s  ",
                seconds(view.playhead),
                seconds(view.wet.len())
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:.1}kHz  ", view.sample_rate as f32 / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}  ", peak(view.wet), rms(view.wet)),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(view.message.to_string(), Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
