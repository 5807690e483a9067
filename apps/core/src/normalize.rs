//! Display-safe projections of the raw extractor records.
//!
//! Every optional field collapses to a fixed placeholder when it is absent or
//! empty, so rendering never has to branch on missing data.

use serde::Serialize;

use crate::model::{Company, EvidenceItem, Theme};

pub const UNTITLED_THEME: &str = "Untitled theme";
pub const UNKNOWN_COMPANY: &str = "Unknown";
pub const MISSING_VALUE: &str = "—";
pub const NO_UPDATE: &str = "No update in last 3 issues.";
pub const UPDATE_DELIMITER: &str = " • ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
    Unclassified,
}

impl Recommendation {
    /// Case-insensitive substring match; `buy` beats `sell` beats `hold`.
    pub fn classify(text: Option<&str>) -> Self {
        let value = text.unwrap_or_default().to_lowercase();
        if value.contains("buy") {
            Self::Buy
        } else if value.contains("sell") {
            Self::Sell
        } else if value.contains("hold") {
            Self::Hold
        } else {
            Self::Unclassified
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Buy => "rec rec-buy",
            Self::Sell => "rec rec-sell",
            Self::Hold => "rec rec-hold",
            Self::Unclassified => "rec",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationView {
    pub text: String,
    pub kind: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceView {
    pub snippet: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeView {
    pub title: String,
    pub summary: String,
    pub evidence: Vec<EvidenceView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyView {
    pub name: String,
    pub ticker: String,
    pub recommendation: RecommendationView,
    pub updates: Vec<String>,
}

impl From<&EvidenceItem> for EvidenceView {
    fn from(item: &EvidenceItem) -> Self {
        Self {
            snippet: or_placeholder(item.snippet.as_deref(), ""),
            source: or_placeholder(item.source_pdf.as_deref(), ""),
        }
    }
}

impl From<&Theme> for ThemeView {
    fn from(theme: &Theme) -> Self {
        Self {
            title: or_placeholder(theme.title.as_deref(), UNTITLED_THEME),
            summary: or_placeholder(theme.summary.as_deref(), ""),
            evidence: theme.evidence_snippets.iter().map(EvidenceView::from).collect(),
        }
    }
}

impl From<&Company> for CompanyView {
    fn from(company: &Company) -> Self {
        let recommendation = present(company.recommendation.as_deref());
        Self {
            name: or_placeholder(company.company_name.as_deref(), UNKNOWN_COMPANY),
            ticker: resolve_ticker(company.ticker_raw.as_deref(), company.ticker.as_deref()),
            recommendation: RecommendationView {
                text: or_placeholder(recommendation, MISSING_VALUE),
                kind: Recommendation::classify(recommendation),
            },
            updates: split_updates(company.latest_update.as_deref()),
        }
    }
}

/// `ticker_raw` wins over `ticker`; either one must be non-empty to count.
pub fn resolve_ticker(ticker_raw: Option<&str>, ticker: Option<&str>) -> String {
    or_placeholder(present(ticker_raw).or_else(|| present(ticker)), MISSING_VALUE)
}

/// Splits a `" • "`-joined update into trimmed, non-empty bullets. Text
/// without the delimiter is a single bullet as-is.
pub fn split_updates(text: Option<&str>) -> Vec<String> {
    let text = present(text).unwrap_or(NO_UPDATE);
    if !text.contains(UPDATE_DELIMITER) {
        return vec![text.to_string()];
    }

    text.split(UPDATE_DELIMITER)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    present(value).unwrap_or(placeholder).to_string()
}
