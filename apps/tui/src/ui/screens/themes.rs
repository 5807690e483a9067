use crate::app::App;
use crate::ui::widgets::text::wrap_text;
use digest_core::disclosure::row_glyph;
use digest_core::markup::{EMPTY_THEMES_HINT, EMPTY_THEMES_TITLE};
use digest_core::{DisclosureKey, ThemeView};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const BODY_INDENT: usize = 5;

pub fn render_themes(app: &App, f: &mut Frame<'_>, area: Rect) {
    let themes = app
        .dashboard
        .as_ref()
        .map_or(&[][..], |dashboard| dashboard.themes.as_slice());

    let block = Block::default()
        .title("Macro Themes")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if themes.is_empty() {
        let paragraph = Paragraph::new(Text::from(vec![
            TextLine::from(Span::styled(
                EMPTY_THEMES_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            TextLine::from(Span::styled(
                EMPTY_THEMES_HINT,
                Style::default().fg(Color::Gray),
            )),
        ]))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let body_width = usize::from(block.inner(area).width).saturating_sub(BODY_INDENT + 2);
    let items = themes
        .iter()
        .enumerate()
        .map(|(index, theme)| {
            let open = app.disclosure.is_open(DisclosureKey::Theme(index));
            theme_item(theme, open, body_width)
        })
        .collect::<Vec<_>>();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Rgb(0, 0, 238))
            .fg(Color::White),
    );
    let mut state = ListState::default().with_selected(Some(app.selected_theme_index));
    f.render_stateful_widget(list, area, &mut state);
}

fn theme_item(theme: &ThemeView, open: bool, body_width: usize) -> ListItem<'static> {
    let mut lines = vec![TextLine::from(vec![
        Span::styled(
            format!(" {}  ", row_glyph(open)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            theme.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];

    if !open {
        return ListItem::new(Text::from(lines));
    }

    let indent = " ".repeat(BODY_INDENT);
    lines.extend(wrap_text(&theme.summary, body_width).into_iter().map(|text| {
        TextLine::from(Span::styled(
            format!("{indent}{text}"),
            Style::default().fg(Color::Gray),
        ))
    }));

    for item in &theme.evidence {
        lines.push(TextLine::from(""));
        lines.extend(
            wrap_text(&item.snippet, body_width.saturating_sub(2))
                .into_iter()
                .map(|text| TextLine::from(format!("{indent}│ {text}"))),
        );
        if !item.source.is_empty() {
            lines.push(TextLine::from(Span::styled(
                format!("{indent}│ {}", item.source),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines.push(TextLine::from(""));

    ListItem::new(Text::from(lines))
}
