use crate::app::App;
use digest_core::markup::LOAD_ERROR_TITLE;
use digest_core::LoadState;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

const LOAD_ERROR_HINT: &str = "Check that the extractor output exists at one of the \
configured locations, or point --root / DIGEST_ROOTS at the build directory.";

pub fn render_loading(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(rows[1]);

    let throbber = Throbber::default()
        .label("Loading company cards and macro themes...")
        .style(Style::default().fg(Color::Gray))
        .throbber_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let mut state = app.throbber.clone();
    f.render_stateful_widget(throbber, columns[1], &mut state);
}

/// One generic diagnostic; the underlying error is only logged.
pub fn render_load_error(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        TextLine::from(Span::styled(
            LOAD_ERROR_TITLE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            LOAD_ERROR_HINT,
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled("Tried:", Style::default().fg(Color::Gray))),
    ];
    lines.extend(
        app.sources
            .companies
            .iter()
            .chain(&app.sources.themes)
            .map(|location| TextLine::from(format!("  {location}"))),
    );

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

pub fn render_status_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let state = match app.load_state {
        LoadState::Empty | LoadState::Loading => "Loading".to_string(),
        LoadState::Failed => "Load failed".to_string(),
        LoadState::Rendered => {
            let loaded = app
                .loaded_at
                .map(|at| format!(" • loaded {}", at.format("%H:%M:%S")))
                .unwrap_or_default();
            format!(
                "{} companies • {} themes{loaded}",
                app.company_count(),
                app.theme_count()
            )
        }
    };

    let line = TextLine::from(vec![
        Span::styled(state, Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(": Help  ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(": Quit", Style::default().fg(Color::Gray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
