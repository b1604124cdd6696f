//! Full-frame render smoke test against the ratatui test backend.

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use fpgalab_tui::{ui, AppState};

fn rendered_text(app: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn full_frame_renders_every_element() {
    let app = AppState::new(None);
    let text = rendered_text(&app, 100, 40);

    // All four waveform panels are titled.
    for name in ["sine", "square", "triangle", "noisy sine"] {
        assert!(text.contains(name), "missing panel title {name}");
    }
    // All bottom slider labels appear with their bars.
    for label in ["Frequency", "Phase", "Duty"] {
        assert!(text.contains(label), "missing slider label {label}");
    }
    assert!(text.contains('['), "missing slider bar");
    // The reset control and key hints are visible.
    assert!(text.contains("Reset"), "missing reset box");
    assert!(text.contains("j/k:select"), "missing status hints");
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = AppState::new(None);
    let _ = rendered_text(&app, 20, 6);
}

#[test]
fn status_message_is_shown() {
    let mut app = AppState::new(None);
    app.set_warning("export skipped");
    let text = rendered_text(&app, 100, 40);
    assert!(text.contains("export skipped"));
}
