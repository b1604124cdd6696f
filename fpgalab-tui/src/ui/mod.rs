//! Figure rendering — the normalized layout mapped onto the terminal.

pub mod axes_panel;
pub mod slider_strip;
pub mod status_bar;

use fpgalab_core::plot::FracRect;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{AppState, Control};

/// Draw the entire UI: figure area plus a one-line status bar.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());
    let figure_area = chunks[0];
    let status_area = chunks[1];

    for (trace, cell) in app.traces.iter().zip(app.figure.axes()) {
        axes_panel::render(f, to_rect(cell, figure_area), trace, &app.theme);
    }

    for (i, (slider, strip)) in app.figure.bottom_sliders().enumerate() {
        let active = app.cursor == Control::Slider(i);
        slider_strip::render_horizontal(
            f,
            to_rect(strip, figure_area),
            slider,
            active,
            &app.theme,
        );
    }

    let bottom_count = app.figure.layout().bottom_sliders.len();
    for (i, (slider, strip)) in app.figure.right_sliders().enumerate() {
        let active = app.cursor == Control::Slider(bottom_count + i);
        slider_strip::render_vertical(
            f,
            to_rect(strip, figure_area),
            slider,
            active,
            &app.theme,
        );
    }

    slider_strip::render_reset(
        f,
        to_rect(&app.figure.layout().reset_button, figure_area),
        app.cursor == Control::Reset,
        &app.theme,
    );

    status_bar::render(f, status_area, app);
}

/// Map a normalized figure rectangle (origin bottom-left) onto terminal
/// cells (origin top-left), clipped to `area`.
pub fn to_rect(frac: &FracRect, area: Rect) -> Rect {
    if area.width == 0 || area.height == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    let fx = |v: f64| (v.clamp(0.0, 1.0) * area.width as f64).round() as u16;
    let fy = |v: f64| (v.clamp(0.0, 1.0) * area.height as f64).round() as u16;

    let dx = fx(frac.x).min(area.width - 1);
    let dy = fy(1.0 - frac.top()).min(area.height - 1);
    let w = fx(frac.w).clamp(1, area.width - dx);
    let h = fy(frac.h).clamp(1, area.height - dy);
    Rect::new(area.x + dx, area.y + dy, w, h)
}
