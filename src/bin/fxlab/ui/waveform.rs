//! Waveform plot widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Render a slice of samples as a line chart over [-1, 1]
pub fn render_waveform(frame: &mut Frame, area: Rect, title: &str, samples: &[f32], color: Color) {
    let block = Block::default().title(title).borders(Borders::ALL);

    // Convert samples to chart data points
    let data: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let x = i as f64 / samples.len().max(1) as f64;
            (x, sample as f64)
        })
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&data);

    // Unnormalized signals can exceed full scale
    let bound = samples
        .iter()
        .fold(1.0f32, |acc, &x| acc.max(x.abs())) as f64;

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-bound, bound])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
