//! Keyboard intents for the selection widget.
//!
//! Input boundaries (DOM adapters, terminal backends, test drivers) resolve
//! their native key encoding into a [`KeyIntent`] once; the state machine
//! never sees raw key codes.

use serde::{Deserialize, Serialize};

/// The keys the selection widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyIntent {
    /// Enter/Return key
    Enter,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Up arrow
    ArrowUp,
    /// Down arrow
    ArrowDown,
    /// Backspace key
    Backspace,
    /// Tab key
    Tab,
}

/// A resolved key press: intent plus the modifier state the protocol cares
/// about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPress {
    /// The resolved key.
    pub intent: KeyIntent,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyPress {
    /// Create a key press without modifiers.
    #[must_use]
    pub const fn new(intent: KeyIntent) -> Self {
        Self { intent, alt: false }
    }

    /// Create a key press with Alt held.
    #[must_use]
    pub const fn with_alt(intent: KeyIntent) -> Self {
        Self { intent, alt: true }
    }

    /// Check if this press should open a closed dropdown from the selection
    /// control: Enter, Space, or Alt+Down.
    #[must_use]
    pub const fn is_open_request(&self) -> bool {
        matches!(self.intent, KeyIntent::Enter | KeyIntent::Space)
            || (self.alt && matches!(self.intent, KeyIntent::ArrowDown))
    }

    /// Check if this press navigates the dropdown highlight.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self.intent, KeyIntent::ArrowUp | KeyIntent::ArrowDown)
    }
}

impl From<KeyIntent> for KeyPress {
    fn from(intent: KeyIntent) -> Self {
        Self::new(intent)
    }
}
