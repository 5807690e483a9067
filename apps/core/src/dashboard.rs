use std::fmt;
use std::future::Future;

use serde::Serialize;
use serde_json::Value;

use crate::error::{FetchError, LoadError, RenderError, TransitionError};
use crate::fetch::fetch_first_ok;
use crate::markup::{render_companies, render_themes, RenderedView};
use crate::model::{CompanyPayload, Resource, ThemePayload};
use crate::normalize::{CompanyView, ThemeView};

/// Absolute root first, then the sibling directory.
pub const DEFAULT_ROOTS: [&str; 2] = ["/build", "../build"];

/// Candidate locations for each document, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub companies: Vec<String>,
    pub themes: Vec<String>,
}

impl Default for Sources {
    fn default() -> Self {
        Self::from_roots(&DEFAULT_ROOTS)
    }
}

impl Sources {
    pub fn from_roots<S: AsRef<str>>(roots: &[S]) -> Self {
        Self {
            companies: candidates(roots, Resource::Companies),
            themes: candidates(roots, Resource::Themes),
        }
    }
}

fn candidates<S: AsRef<str>>(roots: &[S], resource: Resource) -> Vec<String> {
    roots
        .iter()
        .map(|root| {
            let root = root.as_ref().trim_end_matches('/');
            format!("{root}/{}", resource.file_name())
        })
        .collect()
}

/// Normalized content for one page load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub themes: Vec<ThemeView>,
    pub companies: Vec<CompanyView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Value>,
}

impl Dashboard {
    pub fn from_payloads(company_json: Value, theme_json: Value) -> Result<Self, RenderError> {
        let company = CompanyPayload::from_value(company_json)?;
        let theme = ThemePayload::from_value(theme_json)?;

        // `note` travels with the companies but never selects the theme list.
        Ok(Self {
            themes: theme.macro_themes.iter().map(ThemeView::from).collect(),
            companies: company.companies.iter().map(CompanyView::from).collect(),
            note: company.note,
        })
    }

    pub fn render(&self) -> RenderedView {
        RenderedView {
            companies_html: render_companies(&self.companies),
            themes_html: render_themes(&self.themes),
        }
    }
}

impl RenderedView {
    /// The view for a finished load: the rendered digest, or only the generic
    /// diagnostic when anything failed.
    pub fn from_outcome(outcome: &Result<Dashboard, LoadError>) -> Self {
        outcome.as_ref().map_or_else(|_| Self::error(), Dashboard::render)
    }
}

/// Loads both documents concurrently; either failure fails the whole load.
pub async fn load_dashboard<F, Fut>(sources: &Sources, fetch_one: F) -> Result<Dashboard, LoadError>
where
    F: Fn(&String) -> Fut,
    Fut: Future<Output = Result<Value, FetchError>>,
{
    let companies = async {
        fetch_first_ok(&sources.companies, &fetch_one)
            .await
            .map_err(|source| LoadError::Fetch {
                resource: Resource::Companies,
                source,
            })
    };
    let themes = async {
        fetch_first_ok(&sources.themes, &fetch_one)
            .await
            .map_err(|source| LoadError::Fetch {
                resource: Resource::Themes,
                source,
            })
    };

    let (company_json, theme_json) = futures::try_join!(companies, themes)?;
    tracing::debug!("both documents loaded");
    Dashboard::from_payloads(company_json, theme_json).map_err(LoadError::from)
}

/// Lifecycle of a container for one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Empty,
    Loading,
    Rendered,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    Start,
    Succeeded,
    Failed,
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Loading => write!(f, "Loading"),
            Self::Rendered => write!(f, "Rendered"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

impl fmt::Display for LoadEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Succeeded => write!(f, "Succeeded"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

impl LoadState {
    /// Loads happen once; rendered and failed are terminal.
    pub const fn advance(self, event: LoadEvent) -> Result<Self, TransitionError> {
        match (self, event) {
            (Self::Empty, LoadEvent::Start) => Ok(Self::Loading),
            (Self::Loading, LoadEvent::Succeeded) => Ok(Self::Rendered),
            (Self::Loading, LoadEvent::Failed) => Ok(Self::Failed),
            (from, event) => Err(TransitionError { from, event }),
        }
    }

    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::Duration;

    fn stub(
        responses: HashMap<String, Value>,
    ) -> impl Fn(&String) -> std::future::Ready<Result<Value, FetchError>> {
        move |location: &String| {
            std::future::ready(responses.get(location).cloned().ok_or_else(|| {
                FetchError::Status {
                    location: location.clone(),
                    status: 404,
                }
            }))
        }
    }

    fn company_doc() -> Value {
        json!({
            "companies": [
                {"company_name": "Exxon", "ticker_raw": "XOM.TO", "ticker": "XOM", "recommendation": "Strong Buy/Hold"},
                {}
            ],
            "note": "sample issue"
        })
    }

    fn theme_doc() -> Value {
        json!({"macro_themes": [{"title": "Energy transition", "evidence_snippets": "bad"}]})
    }

    #[test]
    fn default_sources_try_absolute_then_relative() {
        let sources = Sources::default();
        assert_eq!(
            sources.companies,
            vec![
                "/build/active_company_cards.json",
                "../build/active_company_cards.json"
            ]
        );
        assert_eq!(
            sources.themes,
            vec!["/build/macro_themes.json", "../build/macro_themes.json"]
        );
    }

    #[tokio::test]
    async fn loads_both_documents_through_fallbacks() {
        let responses = HashMap::from([
            ("../build/active_company_cards.json".to_string(), company_doc()),
            ("/build/macro_themes.json".to_string(), theme_doc()),
        ]);

        let dashboard = load_dashboard(&Sources::default(), stub(responses))
            .await
            .unwrap();

        assert_eq!(dashboard.companies.len(), 2);
        assert_eq!(dashboard.companies[0].ticker, "XOM.TO");
        assert_eq!(dashboard.companies[1].name, "Unknown");
        assert_eq!(dashboard.themes.len(), 1);
        assert!(dashboard.themes[0].evidence.is_empty());
        assert_eq!(dashboard.note, Some(json!("sample issue")));
    }

    #[test]
    fn note_never_changes_the_theme_list() {
        let with_note = Dashboard::from_payloads(company_doc(), theme_doc()).unwrap();
        let without_note =
            Dashboard::from_payloads(json!({"companies": []}), theme_doc()).unwrap();
        assert_eq!(with_note.themes, without_note.themes);
    }

    #[tokio::test]
    async fn either_exhausted_resource_fails_the_load() {
        let responses = HashMap::from([(
            "/build/active_company_cards.json".to_string(),
            company_doc(),
        )]);

        let error = load_dashboard(&Sources::default(), stub(responses))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            LoadError::Fetch {
                resource: Resource::Themes,
                source: FetchError::Exhausted { attempts: 2, .. }
            }
        ));
    }

    #[tokio::test]
    async fn null_payload_is_a_render_failure() {
        let responses = HashMap::from([
            ("/build/active_company_cards.json".to_string(), Value::Null),
            ("/build/macro_themes.json".to_string(), theme_doc()),
        ]);

        let error = load_dashboard(&Sources::default(), stub(responses))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            LoadError::Render(RenderError::NullPayload {
                resource: Resource::Companies
            })
        ));
    }

    #[tokio::test]
    async fn fetches_run_concurrently_with_one_request_per_resource() {
        let in_flight = RefCell::new(HashMap::<bool, usize>::new());
        let peak = RefCell::new(0_usize);
        let fetch_one = |location: &String| {
            let is_company = location.contains("company");
            let in_flight = &in_flight;
            let peak = &peak;
            async move {
                *in_flight.borrow_mut().entry(is_company).or_default() += 1;
                let total: usize = in_flight.borrow().values().sum();
                let mut peak_value = peak.borrow_mut();
                *peak_value = (*peak_value).max(total);
                drop(peak_value);
                assert!(in_flight.borrow().values().all(|count| *count <= 1));

                tokio::time::sleep(Duration::from_millis(5)).await;
                *in_flight.borrow_mut().entry(is_company).or_default() -= 1;
                if is_company {
                    Ok(json!({"companies": []}))
                } else {
                    Ok(json!({"macro_themes": []}))
                }
            }
        };

        let dashboard = load_dashboard(&Sources::default(), fetch_one).await.unwrap();
        assert!(dashboard.companies.is_empty());
        assert_eq!(*peak.borrow(), 2);
    }

    #[test]
    fn rendered_dashboard_fills_both_containers() {
        let view = Dashboard::from_payloads(company_doc(), theme_doc())
            .unwrap()
            .render();
        assert!(view.companies_html.contains("<table"));
        assert!(view.companies_html.contains("XOM.TO"));
        assert!(view.themes_html.contains("Energy transition"));
    }

    #[tokio::test]
    async fn failed_load_renders_only_the_diagnostic() {
        let responses = HashMap::from([(
            "/build/macro_themes.json".to_string(),
            theme_doc(),
        )]);

        let outcome = load_dashboard(&Sources::default(), stub(responses)).await;
        let view = RenderedView::from_outcome(&outcome);

        assert_eq!(view, RenderedView::error());
        assert!(!view.companies_html.contains("<table"));
        assert!(!view.companies_html.contains("theme-card"));
        assert!(!view.companies_html.contains("Energy transition"));
        assert!(view.themes_html.is_empty());
    }

    #[test]
    fn null_payload_renders_only_the_diagnostic() {
        let outcome = Dashboard::from_payloads(company_doc(), Value::Null).map_err(LoadError::from);
        assert_eq!(RenderedView::from_outcome(&outcome), RenderedView::error());
    }

    #[test]
    fn successful_load_renders_the_digest() {
        let outcome = Ok(Dashboard::from_payloads(company_doc(), theme_doc()).unwrap());
        let view = RenderedView::from_outcome(&outcome);
        assert!(view.companies_html.contains("<table"));
        assert!(view.themes_html.contains("theme-card"));
    }

    #[test]
    fn load_state_follows_a_single_lifecycle() {
        let loading = LoadState::Empty.advance(LoadEvent::Start).unwrap();
        assert!(loading.is_loading());
        assert_eq!(
            loading.advance(LoadEvent::Succeeded).unwrap(),
            LoadState::Rendered
        );
        assert_eq!(loading.advance(LoadEvent::Failed).unwrap(), LoadState::Failed);

        let error = LoadState::Rendered.advance(LoadEvent::Start).unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid load transition from Rendered with event Start"
        );
        assert!(LoadState::Empty.advance(LoadEvent::Succeeded).is_err());
    }
}
