//! The option catalog: the authoritative ordered set of selectable options.
//!
//! A catalog owns its options and their selection flags. Order is the order
//! the options were supplied in, and is what rendering and keyboard
//! traversal follow. The catalog is replaced wholesale when the external
//! option list changes; callers carry the previous selection forward by
//! value (see `SelectController::set_options` in selectar-widgets).

use std::collections::HashSet;

use crate::error::SelectError;
use crate::option::SelectOption;

/// Ordered, deduplicated collection of [`SelectOption`]s with selection
/// state.
///
/// Besides catalog order, the catalog remembers *selection order* — the
/// order in which values became selected — so that backspace-style "remove
/// the most recent choice" operations are possible in multi-select mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCatalog {
    options: Vec<SelectOption>,
    selection_order: Vec<String>,
}

impl OptionCatalog {
    /// Build a catalog from an ordered option sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::InvalidOption`] when two options share a
    /// value. The ambiguity is not recoverable: a duplicated identifier
    /// would make every value-keyed operation ambiguous.
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Result<Self, SelectError> {
        let options: Vec<SelectOption> = options.into_iter().collect();
        let mut seen = HashSet::with_capacity(options.len());
        for opt in &options {
            if !seen.insert(opt.value.as_str()) {
                return Err(SelectError::invalid(opt.value.clone()));
            }
        }
        Ok(Self {
            options,
            selection_order: Vec::new(),
        })
    }

    /// The selected values, in catalog order (not selection order).
    #[must_use]
    pub fn value(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.is_selected())
            .map(|o| o.value.clone())
            .collect()
    }

    /// Assign the selection by membership: every option becomes selected
    /// iff its value appears in `ids`.
    ///
    /// Unknown identifiers are silently ignored — external bindings may
    /// hold stale values while an option-list replacement is in flight.
    /// Selection order is reset to the order of `ids`.
    pub fn set_value(&mut self, ids: &[String]) {
        for opt in &mut self.options {
            let selected = ids.iter().any(|id| id == &opt.value);
            opt.set_selected(selected);
        }
        self.selection_order.clear();
        for id in ids {
            if self.position(id).is_some() && !self.selection_order.contains(id) {
                self.selection_order.push(id.clone());
            }
        }
    }

    /// Mark a single option selected.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnknownOption`] when `value` is not in the
    /// catalog.
    pub fn select(&mut self, value: &str) -> Result<(), SelectError> {
        let index = self
            .position(value)
            .ok_or_else(|| SelectError::unknown(value))?;
        self.options[index].set_selected(true);
        if !self.selection_order.iter().any(|v| v == value) {
            self.selection_order.push(value.to_string());
        }
        Ok(())
    }

    /// Mark a single option deselected.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnknownOption`] when `value` is not in the
    /// catalog.
    pub fn deselect(&mut self, value: &str) -> Result<(), SelectError> {
        let index = self
            .position(value)
            .ok_or_else(|| SelectError::unknown(value))?;
        self.options[index].set_selected(false);
        self.selection_order.retain(|v| v != value);
        Ok(())
    }

    /// Find an option by value.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnknownOption`] when `value` is not in the
    /// catalog.
    pub fn lookup(&self, value: &str) -> Result<&SelectOption, SelectError> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .ok_or_else(|| SelectError::unknown(value))
    }

    /// Whether any option is selected.
    #[must_use]
    pub fn has_selected(&self) -> bool {
        self.options.iter().any(SelectOption::is_selected)
    }

    /// Deselect every option. Idempotent.
    pub fn clear_selection(&mut self) {
        for opt in &mut self.options {
            opt.set_selected(false);
        }
        self.selection_order.clear();
    }

    /// The most recently selected value, if any.
    #[must_use]
    pub fn last_selected(&self) -> Option<&str> {
        self.selection_order.last().map(String::as_str)
    }

    /// All options, in catalog order.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the catalog has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over the options in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }
}

impl<'a> IntoIterator for &'a OptionCatalog {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
