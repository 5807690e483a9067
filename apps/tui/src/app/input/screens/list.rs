use crate::app::input::helpers::PAGE_STEP;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_list_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
        }
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(1),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(1),
        KeyCode::PageUp => app.select_previous(PAGE_STEP),
        KeyCode::PageDown => app.select_next(PAGE_STEP),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        _ => {}
    }
}
