//! Slider strips and the reset box.
//!
//! Horizontal strips render as `label [====    ] value`; vertical strips
//! as a filled column growing from the bottom of the strip.

use fpgalab_core::plot::Slider;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;

const LABEL_COLS: usize = 10;
const VALUE_COLS: usize = 8;

pub fn render_horizontal(
    f: &mut Frame,
    area: Rect,
    slider: &Slider,
    active: bool,
    theme: &Theme,
) {
    let style = theme.control(active);
    let value = format!(" {:>6.2}", slider.value());

    let bar_cols = (area.width as usize)
        .saturating_sub(LABEL_COLS + 2 + VALUE_COLS)
        .max(4);
    let filled = (slider.fraction() * bar_cols as f64).round() as usize;
    let filled = filled.min(bar_cols);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_cols - filled));

    let line = Line::from(vec![
        Span::styled(format!("{:>w$}: ", slider.label(), w = LABEL_COLS), style),
        Span::styled(bar, if active { theme.accent() } else { theme.muted() }),
        Span::styled(value, style),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

pub fn render_vertical(
    f: &mut Frame,
    area: Rect,
    slider: &Slider,
    active: bool,
    theme: &Theme,
) {
    let rows = area.height as usize;
    if rows == 0 {
        return;
    }
    let filled = (slider.fraction() * rows as f64).round() as usize;
    let filled = filled.min(rows);
    let style = theme.control(active);

    // Column fills from the bottom: empty rows first, then filled ones.
    let mut lines: Vec<Line> = Vec::with_capacity(rows);
    for row in 0..rows {
        let from_bottom = rows - row;
        let cell = if from_bottom <= filled { "█" } else { "·" };
        lines.push(Line::from(Span::styled(
            cell.repeat(area.width as usize),
            style,
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}

pub fn render_reset(f: &mut Frame, area: Rect, active: bool, theme: &Theme) {
    let style = theme.control(active);
    // The strip is one row tall on small terminals; only draw the border
    // when there is room for it.
    if area.height >= 3 {
        let block = Block::default().borders(Borders::ALL).border_style(style);
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(
            Paragraph::new(Span::styled("Reset", style)).alignment(Alignment::Center),
            inner,
        );
    } else {
        f.render_widget(
            Paragraph::new(Span::styled("[ Reset ]", style)).alignment(Alignment::Center),
            area,
        );
    }
}
