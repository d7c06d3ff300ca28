//! Quantized test-tone plot widget
//!
//! Renders the byte stream the way downstream plotters consume it: each
//! byte over 255 is a normalized amplitude, each index over the sequence
//! length a normalized time coordinate, both in [0, 1].

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use satlink_dsp::dsp::tone;

/// Base frequency of the displayed tone, in Hz.
const TONE_FREQUENCY: f64 = 100.0;
/// Base amplitude of the displayed tone.
const TONE_AMPLITUDE: f64 = 0.5;

/// Normalized plot points of the warble tone.
pub fn tone_trace() -> Vec<(f64, f64)> {
    let bytes = tone::warble(TONE_FREQUENCY, TONE_AMPLITUDE);
    let len = bytes.len() as f64;
    bytes
        .iter()
        .enumerate()
        .map(|(i, &byte)| (i as f64 / len, byte as f64 / 255.0))
        .collect()
}

/// Render the tone plot
pub fn render_trace(frame: &mut Frame, area: Rect, trace: &[(f64, f64)]) {
    let block = Block::default().title(" Test Tone ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Yellow))
        .data(trace);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
