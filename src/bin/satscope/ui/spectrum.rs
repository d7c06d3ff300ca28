//! Spectrum analyzer widget
//!
//! FFT-based spectrum of the complex capture buffer, shifted so negative
//! frequencies sit left of center.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

use satlink_dsp::IQSample;

/// Spectrum analyzer with FFT processing
pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f64>,
    /// FFT processor
    fft: Arc<dyn Fft<f64>>,
    /// Scratch buffer for FFT computation
    scratch: Vec<Complex<f64>>,
    /// Current spectrum data: (frequency_hz, magnitude_db)
    spectrum: Vec<(f64, f64)>,
    /// Capture sample rate in Hz
    sample_rate: f64,
}

impl SpectrumAnalyzer {
    /// Create a new analyzer for buffers of `fft_size` complex samples.
    pub fn new(fft_size: usize, sample_rate: f64) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);

        // Hann window - reduces spectral leakage
        let window: Vec<f64> = (0..fft_size)
            .map(|i| {
                if fft_size > 1 {
                    let denom = (fft_size - 1) as f64;
                    0.5 * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / denom).cos())
                } else {
                    1.0
                }
            })
            .collect();

        Self {
            window,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); fft_size],
            spectrum: Vec::with_capacity(fft_size),
            sample_rate,
        }
    }

    /// Update the spectrum from a full buffer of capture samples.
    ///
    /// Ignored unless the buffer length matches the FFT size.
    pub fn update(&mut self, buffer: &[IQSample]) {
        if buffer.len() != self.window.len() {
            return;
        }

        for (i, sample) in buffer.iter().enumerate() {
            self.scratch[i] = *sample * self.window[i];
        }

        self.fft.process(&mut self.scratch);

        // Shift so the x axis runs -fs/2 .. +fs/2 with DC at center.
        let n = self.scratch.len();
        self.spectrum.clear();
        for k in 0..n {
            let bin = (k + n / 2) % n;
            let freq = (k as f64 - (n / 2) as f64) * self.sample_rate / n as f64;
            let power = self.scratch[bin].norm_sqr().max(1e-12);
            self.spectrum.push((freq, 10.0 * power.log10()));
        }
    }

    /// Get the current spectrum data
    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
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
        .map(|(f, _)| f.abs())
        .fold(0.0, f64::max)
        .max(1.0);
    let max_db = spectrum
        .iter()
        .map(|(_, db)| *db)
        .fold(-100.0, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([-max_freq, max_freq])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-100.0, max_db.max(0.0) + 10.0])
                .labels(vec!["-100", "-60", "-20", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
