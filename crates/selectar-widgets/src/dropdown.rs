//! The mounted dropdown view.
//!
//! A `DropdownView` only exists while the dropdown is open *and* the host
//! has completed the render pass that mounts it; the controller holds it as
//! an `Option` and every operation that touches it branches on presence.
//! The view owns the visible (filtered) subset and the highlight; it never
//! owns selection state, which stays in the catalog.

use selectar_core::OptionCatalog;
use serde::{Deserialize, Serialize};

/// A row the dropdown can display and highlight.
///
/// A value-keyed snapshot of a catalog option; selection state is looked up
/// live through the controller, never cached here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleOption {
    /// The option's identifier.
    pub value: String,
    /// The option's display label.
    pub label: String,
}

/// The dropdown list: visible options plus the keyboard highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    entries: Vec<VisibleOption>,
    visible: Vec<VisibleOption>,
    highlighted: Option<usize>,
    filter_term: String,
}

impl DropdownView {
    /// Mount a view over the catalog's current options.
    ///
    /// All options are visible and the first one is highlighted.
    #[must_use]
    pub fn new(catalog: &OptionCatalog) -> Self {
        let entries: Vec<VisibleOption> = catalog
            .iter()
            .map(|o| VisibleOption {
                value: o.value.clone(),
                label: o.label.clone(),
            })
            .collect();
        let visible = entries.clone();
        let highlighted = if visible.is_empty() { None } else { Some(0) };
        Self {
            entries,
            visible,
            highlighted,
            filter_term: String::new(),
        }
    }

    /// Narrow the visible subset to labels containing `term`
    /// (case-insensitive). The highlight resets to the first match.
    pub fn filter(&mut self, term: &str) {
        self.filter_term = term.to_string();
        let needle = term.to_lowercase();
        self.visible = self
            .entries
            .iter()
            .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        self.highlighted = if self.visible.is_empty() { None } else { Some(0) };
    }

    /// The currently highlighted option, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&VisibleOption> {
        self.highlighted.and_then(|i| self.visible.get(i))
    }

    /// Move the highlight to the next visible option, clamping at the end.
    pub fn highlight_next(&mut self) {
        if self.visible.is_empty() {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < self.visible.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    /// Move the highlight to the previous visible option, clamping at the
    /// start.
    pub fn highlight_previous(&mut self) {
        if self.visible.is_empty() {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i > 0 => i - 1,
            Some(_) | None => 0,
        });
    }

    /// The visible options, in catalog order.
    #[must_use]
    pub fn visible(&self) -> &[VisibleOption] {
        &self.visible
    }

    /// The active filter term.
    #[must_use]
    pub fn filter_term(&self) -> &str {
        &self.filter_term
    }
}
