use crate::app::App;
use crate::Tab;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

pub fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Issue Digest")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let titles = Tab::ALL
        .iter()
        .map(|tab| {
            let count = match tab {
                Tab::Companies => app.company_count(),
                Tab::Themes => app.theme_count(),
            };
            TextLine::from(format!("{} ({count})", tab.label()))
        })
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .block(block)
        .select(app.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}
