use crate::app::App;
use crate::ui::widgets::badge::recommendation_badge;
use crate::ui::widgets::text::{fit, wrap_text};
use digest_core::disclosure::row_glyph;
use digest_core::markup::{EMPTY_COMPANIES_HINT, EMPTY_COMPANIES_TITLE};
use digest_core::{CompanyView, DisclosureKey};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const DETAIL_INDENT: usize = 6;

struct Columns {
    name: usize,
    ticker: usize,
}

impl Columns {
    fn measure(companies: &[CompanyView]) -> Self {
        let name = companies
            .iter()
            .map(|company| company.name.chars().count())
            .max()
            .unwrap_or(0);
        let ticker = companies
            .iter()
            .map(|company| company.ticker.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            name: name.clamp(12, 36),
            ticker: ticker.clamp(16, 24),
        }
    }
}

pub fn render_companies(app: &App, f: &mut Frame<'_>, area: Rect) {
    let companies = app
        .dashboard
        .as_ref()
        .map_or(&[][..], |dashboard| dashboard.companies.as_slice());

    let block = Block::default()
        .title("Active Companies")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if companies.is_empty() {
        let paragraph = Paragraph::new(Text::from(vec![
            TextLine::from(Span::styled(
                EMPTY_COMPANIES_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            TextLine::from(Span::styled(
                EMPTY_COMPANIES_HINT,
                Style::default().fg(Color::Gray),
            )),
        ]))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let columns = Columns::measure(companies);
    let header = TextLine::from(Span::styled(
        format!(
            "    {} {} Recommendation",
            fit("Name", columns.name),
            fit("Ticker (CAD/USD)", columns.ticker)
        ),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(header), chunks[0]);

    let detail_width = usize::from(inner.width).saturating_sub(DETAIL_INDENT + 2);
    let items = companies
        .iter()
        .enumerate()
        .map(|(index, company)| {
            let open = app.disclosure.is_open(DisclosureKey::Company(index));
            company_item(company, open, &columns, detail_width)
        })
        .collect::<Vec<_>>();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::Rgb(0, 0, 238))
            .fg(Color::White),
    );
    let mut state = ListState::default().with_selected(Some(app.selected_company_index));
    f.render_stateful_widget(list, chunks[1], &mut state);
}

fn company_item(
    company: &CompanyView,
    open: bool,
    columns: &Columns,
    detail_width: usize,
) -> ListItem<'static> {
    let mut lines = vec![TextLine::from(vec![
        Span::styled(
            format!(" {}  ", row_glyph(open)),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!(
            "{} {} ",
            fit(&company.name, columns.name),
            fit(&company.ticker, columns.ticker)
        )),
        recommendation_badge(&company.recommendation.text, company.recommendation.kind),
    ])];

    if open {
        let indent = " ".repeat(DETAIL_INDENT);
        lines.push(TextLine::from(Span::styled(
            format!("{indent}Updates"),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )));
        for bullet in &company.updates {
            for (row, text) in wrap_text(bullet, detail_width).into_iter().enumerate() {
                let marker = if row == 0 { "• " } else { "  " };
                lines.push(TextLine::from(format!("{indent}{marker}{text}")));
            }
        }
    }

    ListItem::new(Text::from(lines))
}
