use crate::app::state::App;
use crossterm::event::KeyCode;

/// Returns true when the key was consumed by the help overlay.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return key != KeyCode::Char('q');
    }

    false
}
