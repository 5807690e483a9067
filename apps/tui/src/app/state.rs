use chrono::{DateTime, Local};
use digest_core::{
    Dashboard, DisclosureKey, DisclosureState, LoadError, LoadEvent, LoadState, Sources,
};
use throbber_widgets_tui::ThrobberState;

use crate::app::input::helpers::{clamp_decrement, clamp_increment};
use crate::Tab;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub sources: Sources,
    pub load_state: LoadState,
    pub dashboard: Option<Dashboard>,
    pub loaded_at: Option<DateTime<Local>>,
    pub tab: Tab,
    pub selected_company_index: usize,
    pub selected_theme_index: usize,
    pub disclosure: DisclosureState,
    pub show_help: bool,
    pub throbber: ThrobberState,
}

impl App {
    pub fn new(sources: Sources) -> Self {
        Self {
            running: true,
            sources,
            load_state: LoadState::Empty,
            dashboard: None,
            loaded_at: None,
            tab: Tab::Companies,
            selected_company_index: 0,
            selected_theme_index: 0,
            disclosure: DisclosureState::new(),
            show_help: false,
            throbber: ThrobberState::default(),
        }
    }

    pub fn begin_loading(&mut self) {
        self.advance(LoadEvent::Start);
    }

    /// Applies the outcome of the one load this session performs. The
    /// underlying error only goes to the log.
    pub fn finish_load(&mut self, result: Result<Dashboard, LoadError>) {
        match result {
            Ok(dashboard) => {
                tracing::info!(
                    companies = dashboard.companies.len(),
                    themes = dashboard.themes.len(),
                    "digest loaded"
                );
                self.dashboard = Some(dashboard);
                self.loaded_at = Some(Local::now());
                self.advance(LoadEvent::Succeeded);
            }
            Err(error) => {
                tracing::error!(%error, "digest load failed");
                self.dashboard = None;
                self.advance(LoadEvent::Failed);
            }
        }
    }

    fn advance(&mut self, event: LoadEvent) {
        match self.load_state.advance(event) {
            Ok(next) => self.load_state = next,
            Err(error) => tracing::warn!(%error, "ignored load event"),
        }
    }

    pub fn on_tick(&mut self) {
        if self.load_state.is_loading() {
            self.throbber.calc_next();
        }
    }

    pub fn company_count(&self) -> usize {
        self.dashboard
            .as_ref()
            .map_or(0, |dashboard| dashboard.companies.len())
    }

    pub fn theme_count(&self) -> usize {
        self.dashboard
            .as_ref()
            .map_or(0, |dashboard| dashboard.themes.len())
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            tracing::debug!(tab = tab.as_str(), "switched tab");
        }
        self.tab = tab;
    }

    pub fn select_next(&mut self, step: usize) {
        match self.tab {
            Tab::Companies => {
                self.selected_company_index =
                    clamp_increment(self.selected_company_index, step, self.company_count());
            }
            Tab::Themes => {
                self.selected_theme_index =
                    clamp_increment(self.selected_theme_index, step, self.theme_count());
            }
        }
    }

    pub const fn select_previous(&mut self, step: usize) {
        match self.tab {
            Tab::Companies => {
                self.selected_company_index = clamp_decrement(self.selected_company_index, step);
            }
            Tab::Themes => {
                self.selected_theme_index = clamp_decrement(self.selected_theme_index, step);
            }
        }
    }

    pub fn select_first(&mut self) {
        match self.tab {
            Tab::Companies => self.selected_company_index = 0,
            Tab::Themes => self.selected_theme_index = 0,
        }
    }

    pub fn select_last(&mut self) {
        match self.tab {
            Tab::Companies => {
                self.selected_company_index = self.company_count().saturating_sub(1);
            }
            Tab::Themes => self.selected_theme_index = self.theme_count().saturating_sub(1),
        }
    }

    /// The disclosure entry under the cursor on the current tab, if any.
    pub fn selected_key(&self) -> Option<DisclosureKey> {
        match self.tab {
            Tab::Companies if self.selected_company_index < self.company_count() => {
                Some(DisclosureKey::Company(self.selected_company_index))
            }
            Tab::Themes if self.selected_theme_index < self.theme_count() => {
                Some(DisclosureKey::Theme(self.selected_theme_index))
            }
            _ => None,
        }
    }

    pub fn toggle_selected(&mut self) -> Option<bool> {
        let key = self.selected_key()?;
        Some(self.disclosure.toggle(key))
    }
}
