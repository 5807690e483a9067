use digest_core::Recommendation;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub const fn recommendation_color(recommendation: Recommendation) -> Color {
    match recommendation {
        Recommendation::Buy => Color::Green,
        Recommendation::Sell => Color::Red,
        Recommendation::Hold => Color::Yellow,
        Recommendation::Unclassified => Color::Gray,
    }
}

pub fn recommendation_badge(text: &str, recommendation: Recommendation) -> Span<'static> {
    let style = Style::default().fg(recommendation_color(recommendation));
    let style = if recommendation == Recommendation::Unclassified {
        style
    } else {
        style.add_modifier(Modifier::BOLD)
    };
    Span::styled(format!(" {text} "), style)
}
