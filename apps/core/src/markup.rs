//! Markup for the two host containers.
//!
//! Class names match the page stylesheet. Every interactive element carries
//! `data-index` so handlers can be bound back to the entity that produced it.

use crate::disclosure::row_appearance;
use crate::normalize::{CompanyView, ThemeView};

pub const COMPANY_CONTAINER_ID: &str = "companyGrid";
pub const THEME_CONTAINER_ID: &str = "macroGrid";

pub const LOAD_ERROR_TITLE: &str = "Data load error";
pub const LOAD_ERROR_HINT: &str = "Ensure Live Server is running from the project root. \
Try opening /build/active_company_cards.json in the browser.";

pub const EMPTY_THEMES_TITLE: &str = "No macro themes yet";
pub const EMPTY_THEMES_HINT: &str = "Run the extractor to populate themes.";
pub const EMPTY_COMPANIES_TITLE: &str = "No active companies";
pub const EMPTY_COMPANIES_HINT: &str = "Run the extractor on the most recent issue.";

const COMPANY_COLUMNS: usize = 4;

/// Markup for both containers after one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub companies_html: String,
    pub themes_html: String,
}

impl RenderedView {
    pub fn loading() -> Self {
        let line = "<p class=\"muted\">Loading…</p>".to_string();
        Self {
            companies_html: line.clone(),
            themes_html: line,
        }
    }

    /// One diagnostic card in the company container; the theme container is
    /// cleared.
    pub fn error() -> Self {
        Self {
            companies_html: placeholder_card("company-card", LOAD_ERROR_TITLE, LOAD_ERROR_HINT),
            themes_html: String::new(),
        }
    }
}

struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(4 * 1024),
        }
    }

    fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn text(&mut self, s: &str) {
        self.buf.push_str(&esc(s));
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn placeholder_card(class: &str, title: &str, hint: &str) -> String {
    let mut w = Html::new();
    w.push(&format!("<div class=\"{class}\"><h3>"));
    w.text(title);
    w.push("</h3><p class=\"muted\">");
    w.text(hint);
    w.push("</p></div>");
    w.finish()
}

pub fn render_themes(themes: &[ThemeView]) -> String {
    if themes.is_empty() {
        return placeholder_card("theme-card", EMPTY_THEMES_TITLE, EMPTY_THEMES_HINT);
    }

    let mut w = Html::new();
    for (index, theme) in themes.iter().enumerate() {
        w.push(&format!(
            "<div class=\"theme-card\"><details data-index=\"{index}\"><summary data-index=\"{index}\"><span>"
        ));
        w.text(&theme.title);
        w.push("</span><span class=\"summary-plus\">+</span></summary><p class=\"muted\">");
        w.text(&theme.summary);
        w.push("</p><div class=\"evidence\">");
        for item in &theme.evidence {
            w.push("<div class=\"evidence-item\"><p>");
            w.text(&item.snippet);
            w.push("</p><span class=\"muted\">");
            w.text(&item.source);
            w.push("</span></div>");
        }
        w.push("</div></details></div>");
    }
    w.finish()
}

pub fn render_companies(companies: &[CompanyView]) -> String {
    if companies.is_empty() {
        return placeholder_card("company-card", EMPTY_COMPANIES_TITLE, EMPTY_COMPANIES_HINT);
    }

    let closed = row_appearance(false);
    let mut w = Html::new();
    w.push(
        "<table class=\"portfolio-table\"><thead><tr><th></th><th>Name</th>\
         <th>Ticker (CAD/USD)</th><th>Recommendation</th></tr></thead><tbody>",
    );

    for (index, company) in companies.iter().enumerate() {
        w.push(&format!(
            "<tr class=\"portfolio-row\" data-index=\"{index}\"><td class=\"toggle-cell\">\
             <span class=\"row-toggle\">{}</span></td><td>",
            closed.glyph
        ));
        w.text(&company.name);
        w.push("</td><td>");
        w.text(&company.ticker);
        w.push(&format!(
            "</td><td><span class=\"{}\">",
            company.recommendation.kind.css_class()
        ));
        w.text(&company.recommendation.text);
        w.push("</span></td></tr>");

        w.push(&format!(
            "<tr class=\"{}\" data-index=\"{index}\"><td colspan=\"{COMPANY_COLUMNS}\">\
             <div class=\"detail-box\"><div class=\"update-label\">Updates</div>\
             <ul class=\"detail-list\">",
            closed.details_class
        ));
        for bullet in &company.updates {
            w.push("<li>");
            w.text(bullet);
            w.push("</li>");
        }
        w.push("</ul></div></td></tr>");
    }

    w.push("</tbody></table>");
    w.finish()
}
