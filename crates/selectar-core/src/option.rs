//! A selectable option.

use serde::{Deserialize, Serialize};

/// One entry in an option catalog.
///
/// The `selected` flag is private: it only changes through
/// [`OptionCatalog`](crate::OptionCatalog) mutators, so a catalog's
/// externally visible value can never drift from its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique identifier within a catalog snapshot.
    pub value: String,
    /// Display string, not required unique.
    pub label: String,
    /// Selection flag, owned by the catalog.
    selected: bool,
}

impl SelectOption {
    /// Create a new option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    /// Create an option where value equals label.
    #[must_use]
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
            selected: false,
        }
    }

    /// Whether this option is currently selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
