//! FPGA Lab TUI — terminal workbench for the slider figure.
//!
//! Provides interactive exploration of the demo signal bank with:
//! - Four waveform panels in the figure's 2x2 grid
//! - Bottom and right slider strips with vim-style adjustment
//! - A reset button restoring every slider's initial value
//! - One-key export of the current traces as MIF files

pub mod app;
pub mod input;
pub mod sample_data;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;
