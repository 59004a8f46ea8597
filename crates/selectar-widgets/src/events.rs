//! Notifications and render requests emitted by the controller.
//!
//! Effects are communicated as typed values the host drains after each
//! input event, never as calls back into the renderer. Observers get
//! [`SelectEvent`]s; the rendering collaborator gets [`RenderRequest`]s.

use serde::{Deserialize, Serialize};

/// Notification emitted on a controller state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectEvent {
    /// The dropdown transitioned to open.
    Opened,
    /// The dropdown transitioned to closed.
    Closed,
    /// An option became selected.
    Selected {
        /// The option's identifier.
        value: String,
        /// The option's display label.
        label: String,
    },
    /// An option became deselected.
    Deselected {
        /// The option's identifier.
        value: String,
        /// The option's display label.
        label: String,
    },
}

impl SelectEvent {
    /// Check if this is a selection-change notification.
    #[must_use]
    pub const fn is_selection_change(&self) -> bool {
        matches!(self, Self::Selected { .. } | Self::Deselected { .. })
    }
}

/// Fire-and-forget geometry/focus intent for the rendering collaborator.
///
/// The core never reads DOM measurements back; it only asks the renderer
/// to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderRequest {
    /// Re-measure the control and size the dropdown to match.
    RecomputeWidth,
    /// Re-derive the dropdown's position from the control.
    RecomputePosition,
    /// Move keyboard focus to the selection control.
    FocusSelection,
    /// Move keyboard focus to the search input.
    FocusSearch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_selection_change() {
        let selected = SelectEvent::Selected {
            value: "a".to_string(),
            label: "A".to_string(),
        };
        assert!(selected.is_selection_change());
        assert!(!SelectEvent::Opened.is_selection_change());
        assert!(!SelectEvent::Closed.is_selection_change());
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let events = vec![
            SelectEvent::Opened,
            SelectEvent::Closed,
            SelectEvent::Deselected {
                value: "b".to_string(),
                label: "B".to_string(),
            },
        ];
        for event in events {
            let json = serde_json::to_string(&event).expect("serialize");
            let back: SelectEvent = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(event, back);
        }
    }

    #[test]
    fn test_render_request_equality() {
        assert_eq!(RenderRequest::FocusSearch, RenderRequest::FocusSearch);
        assert_ne!(RenderRequest::FocusSearch, RenderRequest::FocusSelection);
    }
}
