//! Slider-figure model — layout, sliders, and the owning figure object.
//!
//! Everything here is render-agnostic: geometry is expressed in normalized
//! figure coordinates (origin bottom-left, both axes in `[0, 1]`) and a
//! frontend maps it to whatever surface it draws on. The figure owns its
//! axes rectangles and sliders explicitly; there is no ambient
//! current-figure state.

pub mod figure;
pub mod layout;
pub mod slider;

pub use figure::SliderFigure;
pub use layout::{FigureLayout, FracRect};
pub use slider::{Slider, SliderSpec};

use thiserror::Error;

/// Errors from figure construction.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("figure supports 1 to 4 plots, got {0}")]
    InvalidPlotCount(usize),
}
