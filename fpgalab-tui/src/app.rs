//! Application state — single-owner, main-thread only.
//!
//! All workbench state lives here: the figure, the demo traces, the
//! control cursor, and the status line. Slider change notifications come
//! back through an in-process channel drained by the event loop.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use anyhow::Context;
use fpgalab_core::mif::write_mif;
use fpgalab_core::plot::SliderFigure;

use crate::sample_data::{self, DemoParams, Trace, EXPORT_WIDTH, SAMPLES};
use crate::theme::Theme;

/// Which control the cursor is on: a slider (by figure index) or Reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Slider(usize),
    Reset,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

pub struct AppState {
    pub figure: SliderFigure,
    pub theme: Theme,
    pub traces: Vec<Trace>,
    pub cursor: Control,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
    /// Most recent value delivered through `on_changed`.
    pub last_change: Option<f64>,
    pub export_dir: PathBuf,
    change_rx: Receiver<f64>,
    traces_stale: bool,
}

impl AppState {
    /// Build the app around the demo figure. `theme: None` selects the
    /// default palette.
    pub fn new(theme: Option<Theme>) -> Self {
        let mut figure = sample_data::demo_figure();

        let (tx, change_rx) = mpsc::channel();
        figure.on_changed(move |value| {
            let _ = tx.send(value);
        });

        let params = DemoParams::from_values(&figure.values());
        let traces = sample_data::traces(&params);

        Self {
            figure,
            theme: theme.unwrap_or_default(),
            traces,
            cursor: Control::Slider(0),
            running: true,
            status_message: None,
            last_change: None,
            export_dir: PathBuf::from("."),
            change_rx,
            traces_stale: false,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    /// Sliders plus the reset button.
    pub fn control_count(&self) -> usize {
        self.figure.slider_count() + 1
    }

    fn cursor_index(&self) -> usize {
        match self.cursor {
            Control::Slider(i) => i,
            Control::Reset => self.figure.slider_count(),
        }
    }

    fn control_at(&self, index: usize) -> Control {
        if index < self.figure.slider_count() {
            Control::Slider(index)
        } else {
            Control::Reset
        }
    }

    pub fn cursor_next(&mut self) {
        let i = self.cursor_index();
        if i + 1 < self.control_count() {
            self.cursor = self.control_at(i + 1);
        }
    }

    pub fn cursor_prev(&mut self) {
        let i = self.cursor_index();
        self.cursor = self.control_at(i.saturating_sub(1));
    }

    /// Nudge the selected slider. No-op when the cursor is on Reset.
    pub fn nudge_selected(&mut self, direction: i32) {
        if let Control::Slider(i) = self.cursor {
            if let Some(slider) = self.figure.slider_mut(i) {
                slider.nudge(direction);
            }
        }
    }

    /// The reset fan-out: every slider back to its initial value.
    pub fn activate_reset(&mut self) {
        self.figure.reset();
        self.set_status("All sliders reset to initial values");
    }

    /// Drain pending slider-change notifications and refresh the traces
    /// if any arrived. Called once per event-loop tick.
    pub fn tick(&mut self) {
        while let Ok(value) = self.change_rx.try_recv() {
            self.last_change = Some(value);
            self.traces_stale = true;
        }
        if self.traces_stale {
            let params = DemoParams::from_values(&self.figure.values());
            self.traces = sample_data::traces(&params);
            self.traces_stale = false;
        }
    }

    /// Write every trace as a MIF file into the export directory.
    /// Returns the file names written.
    pub fn export_mifs(&self) -> anyhow::Result<Vec<String>> {
        let mut written = Vec::new();
        for trace in &self.traces {
            let name = format!("{}.mif", trace.name.replace(' ', "_"));
            let path = self.export_dir.join(&name);
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            let words = sample_data::trace_words(trace);
            write_mif(&mut sink, &words, SAMPLES, EXPORT_WIDTH)
                .with_context(|| format!("failed to write {}", path.display()))?;
            written.push(name);
        }
        Ok(written)
    }
}
