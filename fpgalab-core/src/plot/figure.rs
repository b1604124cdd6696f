//! The figure object: axes layout plus bottom/right sliders and reset.

use super::layout::{FigureLayout, FracRect};
use super::slider::{Slider, SliderSpec};
use super::PlotError;

/// An interactive figure with 1-4 plot axes, labeled sliders along the
/// bottom and right margins, and a reset action.
///
/// The figure owns every element for its lifetime; nothing is added or
/// removed after construction. The slider ordering exposed by
/// [`sliders`](SliderFigure::sliders) — bottom sliders first, then right
/// sliders, each in construction order — is a contract callers may index
/// by.
pub struct SliderFigure {
    layout: FigureLayout,
    bottom: Vec<Slider>,
    right: Vec<Slider>,
}

impl SliderFigure {
    /// Build the figure. Fails with [`PlotError::InvalidPlotCount`] for a
    /// plot count outside 1-4, before any slider is created.
    pub fn new(
        num_plots: usize,
        bottom_specs: Vec<SliderSpec>,
        right_specs: Vec<SliderSpec>,
    ) -> Result<Self, PlotError> {
        let layout = FigureLayout::compute(num_plots, bottom_specs.len(), right_specs.len())?;
        Ok(Self {
            layout,
            bottom: bottom_specs.into_iter().map(Slider::new).collect(),
            right: right_specs.into_iter().map(Slider::new).collect(),
        })
    }

    pub fn layout(&self) -> &FigureLayout {
        &self.layout
    }

    pub fn axes(&self) -> &[FracRect] {
        &self.layout.axes
    }

    /// Bottom sliders paired with their strips, for rendering.
    pub fn bottom_sliders(&self) -> impl Iterator<Item = (&Slider, &FracRect)> {
        self.bottom.iter().zip(&self.layout.bottom_sliders)
    }

    /// Right sliders paired with their strips, for rendering.
    pub fn right_sliders(&self) -> impl Iterator<Item = (&Slider, &FracRect)> {
        self.right.iter().zip(&self.layout.right_sliders)
    }

    /// All sliders: bottom first, then right, in construction order.
    pub fn sliders(&self) -> impl Iterator<Item = &Slider> {
        self.bottom.iter().chain(&self.right)
    }

    pub fn slider_count(&self) -> usize {
        self.bottom.len() + self.right.len()
    }

    /// Slider by its index in the [`sliders`](SliderFigure::sliders) order.
    pub fn slider(&self, index: usize) -> Option<&Slider> {
        if index < self.bottom.len() {
            self.bottom.get(index)
        } else {
            self.right.get(index - self.bottom.len())
        }
    }

    pub fn slider_mut(&mut self, index: usize) -> Option<&mut Slider> {
        if index < self.bottom.len() {
            self.bottom.get_mut(index)
        } else {
            let index = index - self.bottom.len();
            self.right.get_mut(index)
        }
    }

    /// Current value of every slider, in slider order.
    pub fn values(&self) -> Vec<f64> {
        self.sliders().map(Slider::value).collect()
    }

    /// Register a clone of `handler` on every slider. The handler is
    /// called with the new value whenever that slider's value changes.
    pub fn on_changed<F: FnMut(f64) + Clone + 'static>(&mut self, handler: F) {
        for slider in self.bottom.iter_mut().chain(&mut self.right) {
            slider.on_changed(handler.clone());
        }
    }

    /// Set every slider back to its initial value. Unconditional fan-out,
    /// no confirmation.
    pub fn reset(&mut self) {
        for slider in self.bottom.iter_mut().chain(&mut self.right) {
            slider.reset();
        }
    }
}

impl std::fmt::Debug for SliderFigure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderFigure")
            .field("axes", &self.layout.axes.len())
            .field("bottom", &self.bottom)
            .field("right", &self.right)
            .finish()
    }
}
