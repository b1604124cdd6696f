//! One axes cell — a bordered Braille line chart of a single trace.

use ratatui::layout::Rect;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use crate::sample_data::Trace;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, trace: &Trace, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title(format!(" {} ", trace.name))
        .title_style(theme.panel_title());

    let min_y = trace
        .points
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::INFINITY, f64::min);
    let max_y = trace
        .points
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    let padding = ((max_y - min_y).abs() * 0.05).max(0.05);
    let y_min = min_y - padding;
    let y_max = max_y + padding;
    let x_max = trace.points.len().saturating_sub(1) as f64;

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .style(theme.trace())
        .graph_type(GraphType::Line)
        .data(&trace.points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(Axis::default().style(theme.muted()).bounds([0.0, x_max.max(1.0)]))
        .y_axis(Axis::default().style(theme.muted()).bounds([y_min, y_max]));

    f.render_widget(chart, area);
}
