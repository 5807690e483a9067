use crate::app::state::App;
use crate::Tab;
use crossterm::event::KeyCode;
use digest_core::LoadState;

mod help;
mod list;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            app.select_tab(app.tab.next());
            return;
        }
        KeyCode::Char(digit @ '1'..='2') => {
            if let Some(tab) = digit
                .to_digit(10)
                .and_then(|number| usize::try_from(number).ok())
                .and_then(|number| Tab::from_index(number - 1))
            {
                app.select_tab(tab);
            }
            return;
        }
        _ => {}
    }

    // Rows only exist once the digest has rendered.
    if app.load_state == LoadState::Rendered {
        list::handle_list_input(app, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest_core::{Dashboard, DisclosureKey, Sources};
    use serde_json::json;

    fn rendered_app() -> App {
        let mut app = App::new(Sources::default());
        app.begin_loading();
        app.finish_load(Ok(Dashboard::from_payloads(
            json!({"companies": [{"company_name": "A"}, {"company_name": "B"}]}),
            json!({"macro_themes": [{"title": "Rates"}, {"title": "Energy"}]}),
        )
        .unwrap()));
        app
    }

    #[test]
    fn enter_toggles_the_selected_company() {
        let mut app = rendered_app();
        dispatch_input(&mut app, KeyCode::Down);
        dispatch_input(&mut app, KeyCode::Enter);
        assert!(app.disclosure.is_open(DisclosureKey::Company(1)));

        dispatch_input(&mut app, KeyCode::Char(' '));
        assert!(!app.disclosure.is_open(DisclosureKey::Company(1)));
    }

    #[test]
    fn number_keys_switch_tabs() {
        let mut app = rendered_app();
        dispatch_input(&mut app, KeyCode::Char('2'));
        assert_eq!(app.tab, Tab::Themes);
        dispatch_input(&mut app, KeyCode::Enter);
        assert!(app.disclosure.is_open(DisclosureKey::Theme(0)));
        dispatch_input(&mut app, KeyCode::Char('1'));
        assert_eq!(app.tab, Tab::Companies);
    }

    #[test]
    fn keys_other_than_quit_are_ignored_while_loading() {
        let mut app = App::new(Sources::default());
        app.begin_loading();
        dispatch_input(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_key(), None);

        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn escape_closes_help_before_quitting() {
        let mut app = rendered_app();
        dispatch_input(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        dispatch_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
    }
}
