//! Open/closed state for theme cards and company rows.
//!
//! State is held explicitly per entity and the visible appearance is always
//! recomputed from it, never read back from the rendered element.

use std::collections::HashMap;

pub const GLYPH_CLOSED: &str = "+";
pub const GLYPH_OPEN: &str = "−";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisclosureKey {
    Theme(usize),
    Company(usize),
}

#[derive(Debug, Default, Clone)]
pub struct DisclosureState {
    open: HashMap<DisclosureKey, bool>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, key: DisclosureKey) -> bool {
        self.open.get(&key).copied().unwrap_or(false)
    }

    /// Flips one entry and returns its new state.
    pub fn toggle(&mut self, key: DisclosureKey) -> bool {
        let open = self.open.entry(key).or_insert(false);
        *open = !*open;
        *open
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }
}

/// How a company row pair looks for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAppearance {
    pub glyph: &'static str,
    pub details_class: &'static str,
}

pub const fn row_appearance(open: bool) -> RowAppearance {
    RowAppearance {
        glyph: row_glyph(open),
        details_class: details_class(open),
    }
}

pub const fn row_glyph(open: bool) -> &'static str {
    if open {
        GLYPH_OPEN
    } else {
        GLYPH_CLOSED
    }
}

pub const fn details_class(open: bool) -> &'static str {
    if open {
        "portfolio-details is-open"
    } else {
        "portfolio-details"
    }
}
