//! Two-way value binding between the widget and an external form control.
//!
//! The adapter is framework-independent: a host registers change/touched
//! callbacks, writes model values in, and receives the widget's output
//! value whenever the selection changes. Model-originated writes are not
//! echoed back through the change callback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type alias for the change callback.
type ChangeFn = Box<dyn FnMut(&OutputValue)>;

/// Type alias for the touched callback.
type TouchedFn = Box<dyn FnMut()>;

/// A value arriving from the external binding, before normalization.
///
/// Mirrors what loosely-typed form layers supply: nothing at all, a bare
/// string (possibly empty), or a sequence of identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// No value bound (absent or null).
    #[default]
    Absent,
    /// A single identifier; the empty string means "nothing selected".
    Text(String),
    /// An ordered identifier sequence.
    Many(Vec<String>),
}

impl RawValue {
    /// Normalize to an ordered identifier sequence.
    ///
    /// Absent and the empty string normalize to the empty sequence; a bare
    /// string becomes a one-element sequence.
    #[must_use]
    pub fn normalize(self) -> Vec<String> {
        match self {
            Self::Absent => Vec::new(),
            Self::Text(s) => {
                if s.is_empty() {
                    Vec::new()
                } else {
                    vec![s]
                }
            }
            Self::Many(ids) => ids,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(ids: Vec<String>) -> Self {
        Self::Many(ids)
    }
}

impl From<Option<String>> for RawValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

/// The externally observable value of the widget.
///
/// Single-select mode yields a bare identifier, multi-select mode yields
/// the ordered identifier sequence, and no selection yields [`Empty`]
/// (the typed rendition of the reference's empty string).
///
/// [`Empty`]: OutputValue::Empty
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputValue {
    /// Nothing is selected.
    #[default]
    Empty,
    /// The single selected identifier (non-multiple mode).
    Single(String),
    /// The selected identifiers in catalog order (multiple mode).
    Many(Vec<String>),
}

impl OutputValue {
    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The single selected value, if in that shape.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(v) => Some(v),
            _ => None,
        }
    }

    /// The selected sequence, if in that shape.
    #[must_use]
    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            Self::Many(v) => Some(v),
            _ => None,
        }
    }
}

/// Registered callbacks of the two-way binding contract.
#[derive(Default)]
pub struct ValueBinding {
    on_change: Option<ChangeFn>,
    on_touched: Option<TouchedFn>,
}

impl ValueBinding {
    /// Create a binding with no callbacks registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback invoked whenever the selection changes.
    pub fn register_on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&OutputValue) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Register the callback invoked when the control is touched (blurred).
    pub fn register_on_touched<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.on_touched = Some(Box::new(callback));
    }

    pub(crate) fn notify_change(&mut self, value: &OutputValue) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
    }

    pub(crate) fn notify_touched(&mut self) {
        if let Some(callback) = self.on_touched.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for ValueBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueBinding")
            .field("on_change", &self.on_change.is_some())
            .field("on_touched", &self.on_touched.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    // =========================================================================
    // RawValue Normalization Tests
    // =========================================================================

    #[test]
    fn test_normalize_absent() {
        assert!(RawValue::Absent.normalize().is_empty());
    }

    #[test]
    fn test_normalize_empty_string() {
        assert!(RawValue::from("").normalize().is_empty());
    }

    #[test]
    fn test_normalize_bare_string() {
        assert_eq!(RawValue::from("nl").normalize(), vec!["nl".to_string()]);
    }

    #[test]
    fn test_normalize_sequence() {
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(RawValue::from(ids.clone()).normalize(), ids);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(RawValue::from(None), RawValue::Absent);
        assert_eq!(
            RawValue::from(Some("x".to_string())),
            RawValue::Text("x".to_string())
        );
    }

    #[test]
    fn test_raw_value_deserializes_loose_json() {
        let absent: RawValue = serde_json::from_str("null").expect("null");
        assert_eq!(absent, RawValue::Absent);
        let text: RawValue = serde_json::from_str("\"de\"").expect("string");
        assert_eq!(text, RawValue::Text("de".to_string()));
        let many: RawValue = serde_json::from_str("[\"de\",\"fr\"]").expect("array");
        assert_eq!(
            many,
            RawValue::Many(vec!["de".to_string(), "fr".to_string()])
        );
    }

    // =========================================================================
    // OutputValue Tests
    // =========================================================================

    #[test]
    fn test_output_value_shapes() {
        assert!(OutputValue::Empty.is_empty());
        assert_eq!(
            OutputValue::Single("a".to_string()).as_single(),
            Some("a")
        );
        let many = OutputValue::Many(vec!["a".to_string()]);
        assert_eq!(many.as_many(), Some(&["a".to_string()][..]));
        assert!(many.as_single().is_none());
    }

    #[test]
    fn test_output_value_default_is_empty() {
        assert!(OutputValue::default().is_empty());
    }

    // =========================================================================
    // ValueBinding Tests
    // =========================================================================

    #[test]
    fn test_notify_change_invokes_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut binding = ValueBinding::new();
        binding.register_on_change(move |v| sink.borrow_mut().push(v.clone()));

        binding.notify_change(&OutputValue::Single("a".to_string()));
        assert_eq!(
            seen.borrow().as_slice(),
            &[OutputValue::Single("a".to_string())]
        );
    }

    #[test]
    fn test_notify_without_callbacks_is_noop() {
        let mut binding = ValueBinding::new();
        binding.notify_change(&OutputValue::Empty);
        binding.notify_touched();
    }

    #[test]
    fn test_notify_touched_invokes_callback() {
        let touched = Rc::new(RefCell::new(0_u32));
        let sink = Rc::clone(&touched);

        let mut binding = ValueBinding::new();
        binding.register_on_touched(move || *sink.borrow_mut() += 1);

        binding.notify_touched();
        binding.notify_touched();
        assert_eq!(*touched.borrow(), 2);
    }

    #[test]
    fn test_binding_debug_reports_registration() {
        let mut binding = ValueBinding::new();
        binding.register_on_change(|_| {});
        let debug = format!("{binding:?}");
        assert!(debug.contains("on_change: true"));
        assert!(debug.contains("on_touched: false"));
    }
}
