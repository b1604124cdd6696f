//! Bottom status bar — key hints, selected control, last message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Control, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " j/k:select h/l:adjust r:reset w:export q:quit",
        app.theme.muted(),
    ));
    spans.push(Span::raw(" | "));

    // Selected control and its value.
    match app.cursor {
        Control::Slider(i) => {
            if let Some(slider) = app.figure.slider(i) {
                spans.push(Span::styled(
                    format!("{} = {:.2}", slider.label(), slider.value()),
                    app.theme.accent(),
                ));
            }
        }
        Control::Reset => {
            spans.push(Span::styled("Reset", app.theme.accent()));
        }
    }

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => app.theme.accent(),
            StatusLevel::Warning => app.theme.warning(),
            StatusLevel::Error => app.theme.negative(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
