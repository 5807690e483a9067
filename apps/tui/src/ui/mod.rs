// UI module for issue-digest
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::App;
use digest_core::LoadState;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and tabs
            Constraint::Min(5),    // Content area
            Constraint::Length(1), // Status line
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    screens::header::render_header(app, f, layout[0]);

    match app.load_state {
        LoadState::Empty | LoadState::Loading => screens::status::render_loading(app, f, layout[1]),
        LoadState::Failed => screens::status::render_load_error(app, f, layout[1]),
        LoadState::Rendered => match app.tab {
            crate::Tab::Companies => screens::companies::render_companies(app, f, layout[1]),
            crate::Tab::Themes => screens::themes::render_themes(app, f, layout[1]),
        },
    }

    screens::status::render_status_line(app, f, layout[2]);

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest_core::{Dashboard, LoadError, Sources};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use serde_json::json;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_with(company_json: serde_json::Value, theme_json: serde_json::Value) -> App {
        let mut app = App::new(Sources::default());
        app.begin_loading();
        app.finish_load(Ok(
            Dashboard::from_payloads(company_json, theme_json).unwrap()
        ));
        app
    }

    #[test]
    fn loading_state_shows_progress() {
        let mut app = App::new(Sources::default());
        app.begin_loading();
        assert!(draw(&app).contains("Loading"));
    }

    #[test]
    fn failed_load_shows_only_the_diagnostic() {
        let mut app = App::new(Sources::default());
        app.begin_loading();
        app.finish_load(Err(LoadError::Render(
            digest_core::RenderError::NullPayload {
                resource: digest_core::Resource::Companies,
            },
        )));

        let screen = draw(&app);
        assert!(screen.contains("Data load error"));
        assert!(!screen.contains("payload is null"));
        assert!(!screen.contains("Ticker"));
        assert!(screen.contains("--root"));
        assert!(screen.contains("Tried:"));
        assert!(screen.contains("/build/active_company_cards.json"));
        assert!(screen.contains("../build/macro_themes.json"));
    }

    #[test]
    fn empty_companies_show_placeholder_instead_of_table() {
        let app = app_with(json!({"companies": []}), json!({"macro_themes": []}));
        let screen = draw(&app);
        assert!(screen.contains("No active companies"));
        assert!(!screen.contains("Ticker"));
    }

    #[test]
    fn expanded_company_shows_update_bullets() {
        let mut app = app_with(
            json!({"companies": [{
                "company_name": "Exxon",
                "ticker_raw": "XOM.TO",
                "recommendation": "Strong Buy/Hold",
                "latest_update": "Raised estimate • Added to watchlist"
            }]}),
            json!({"macro_themes": []}),
        );

        let collapsed = draw(&app);
        assert!(collapsed.contains("XOM.TO"));
        assert!(!collapsed.contains("Added to watchlist"));

        app.toggle_selected();
        let expanded = draw(&app);
        assert!(expanded.contains("• Raised estimate"));
        assert!(expanded.contains("• Added to watchlist"));
        assert!(expanded.contains('−'));
    }

    #[test]
    fn themes_tab_lists_titles_and_expands_evidence() {
        let mut app = app_with(
            json!({"companies": []}),
            json!({"macro_themes": [{
                "title": "Rates higher for longer",
                "summary": "Central banks hold.",
                "evidence_snippets": [{"snippet": "BoC held", "source_pdf": "issue-42.pdf"}]
            }]}),
        );
        app.select_tab(crate::Tab::Themes);

        assert!(draw(&app).contains("Rates higher for longer"));
        assert!(!draw(&app).contains("issue-42.pdf"));

        app.toggle_selected();
        let screen = draw(&app);
        assert!(screen.contains("Central banks hold."));
        assert!(screen.contains("issue-42.pdf"));
    }
}
