//! TUI module for satscope
//!
//! Three stacked panes: the quantized test-tone plot, a live I/Q trace of
//! the emulated capture, and its spectrum.

mod spectrum;
mod trace;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;

use satlink_dsp::device::emulator::CAPTURE_SAMPLE_RATE;
use satlink_dsp::IQSample;

use spectrum::{render_spectrum, SpectrumAnalyzer};
use trace::{render_trace, tone_trace};
use waveform::render_waveform;

/// Samples held for visualization; also the FFT size.
const VIS_BUFFER_SIZE: usize = 512;

/// UI application state
pub struct UiApp {
    /// Ring buffer receiver for decoded capture samples
    samples_rx: Consumer<IQSample>,
    /// Most recent capture samples, up to VIS_BUFFER_SIZE
    iq_buffer: Vec<IQSample>,
    /// Precomputed tone plot points (static)
    tone_trace: Vec<(f64, f64)>,
    /// FFT-based spectrum of the capture buffer
    analyzer: SpectrumAnalyzer,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(samples_rx: Consumer<IQSample>) -> Self {
        Self {
            samples_rx,
            iq_buffer: Vec::with_capacity(VIS_BUFFER_SIZE),
            tone_trace: tone_trace(),
            analyzer: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, CAPTURE_SAMPLE_RATE),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_samples();

            terminal.draw(|frame| self.render(frame))?;

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

    /// Drain the ring buffer, keeping the last VIS_BUFFER_SIZE samples.
    fn poll_samples(&mut self) {
        while let Ok(sample) = self.samples_rx.pop() {
            self.iq_buffer.push(sample);
        }

        if self.iq_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.iq_buffer.len() - VIS_BUFFER_SIZE;
            self.iq_buffer.drain(0..excess);
        }

        if self.iq_buffer.len() == VIS_BUFFER_SIZE {
            self.analyzer.update(&self.iq_buffer);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),  // Test tone plot
                Constraint::Min(8),     // I/Q trace
                Constraint::Length(10), // Spectrum
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        render_trace(frame, chunks[0], &self.tone_trace);
        render_waveform(frame, chunks[1], &self.iq_buffer);
        render_spectrum(frame, chunks[2], self.analyzer.data());

        let help = ratatui::widgets::Paragraph::new(" [Q] Quit")
            .style(ratatui::style::Style::default().fg(ratatui::style::Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
