//! Neon-on-dark style tokens for the workbench UI.
//!
//! One [`Theme`] value is owned by the app; passing `None` at startup
//! selects the default palette.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the figure, sliders, and status line.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Electric cyan (focus, highlights).
    pub accent: Color,
    /// Neon green (slider fill, success).
    pub positive: Color,
    /// Neon orange (warnings).
    pub warning: Color,
    /// Hot pink (errors).
    pub negative: Color,
    /// Steel blue (hints, secondary text).
    pub muted: Color,
    /// Light gray (trace lines on inactive panels).
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            warning: Color::Rgb(255, 140, 0),
            negative: Color::Rgb(255, 20, 147),
            muted: Color::Rgb(100, 149, 237),
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }
}

impl Theme {
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn negative(&self) -> Style {
        Style::default().fg(self.negative)
    }

    pub fn trace(&self) -> Style {
        Style::default().fg(self.positive)
    }

    /// Style for a slider bar or the reset box, highlighted when the
    /// cursor is on it.
    pub fn control(&self, active: bool) -> Style {
        if active {
            self.accent().add_modifier(Modifier::BOLD)
        } else {
            self.muted()
        }
    }

    pub fn panel_border(&self) -> Style {
        self.muted()
    }

    pub fn panel_title(&self) -> Style {
        self.accent()
    }
}
