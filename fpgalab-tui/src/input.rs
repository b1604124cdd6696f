//! Keyboard input dispatch — global keys, then control-cursor keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Control};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => app.cursor_next(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_prev(),
        KeyCode::Char('h') | KeyCode::Left => app.nudge_selected(-1),
        KeyCode::Char('l') | KeyCode::Right => app.nudge_selected(1),
        KeyCode::Char('r') => app.activate_reset(),
        KeyCode::Enter => {
            if app.cursor == Control::Reset {
                app.activate_reset();
            }
        }
        KeyCode::Char('w') => export(app),
        _ => {}
    }
}

fn export(app: &mut AppState) {
    match app.export_mifs() {
        Ok(written) => {
            app.set_status(format!("Wrote {} MIF files: {}", written.len(), written.join(", ")));
        }
        Err(err) => app.set_error(format!("Export failed: {err:#}")),
    }
}
