//! I/Q trace widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use satlink_dsp::IQSample;

/// Render the in-phase and quadrature components of the capture buffer
pub fn render_waveform(frame: &mut Frame, area: Rect, samples: &[IQSample]) {
    let block = Block::default().title(" I/Q Capture ").borders(Borders::ALL);

    let len = samples.len().max(1) as f64;
    let i_data: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| (i as f64 / len, sample.re))
        .collect();
    let q_data: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| (i as f64 / len, sample.im))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("I")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&i_data),
        Dataset::default()
            .name("Q")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&q_data),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.25, 1.25])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
