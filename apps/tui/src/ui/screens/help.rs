use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 7] = [
    ("↑/↓ j/k", "Move selection"),
    ("PgUp/PgDn", "Jump 5 rows"),
    ("Home/End", "First/Last"),
    ("Enter/Space", "Expand or collapse"),
    ("Tab ←/→ 1/2", "Switch tab"),
    ("?", "Toggle this help"),
    ("q/Esc", "Quit"),
];

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(50, 50, f.area());

    let lines = SHORTCUTS
        .iter()
        .map(|(keys, action)| {
            TextLine::from(vec![
                Span::styled(
                    format!("{keys:>12}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {action}")),
            ])
        })
        .collect::<Vec<_>>();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Left);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
