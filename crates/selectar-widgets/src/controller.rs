//! The selection controller: interaction state machine and orchestration.
//!
//! `SelectController` owns the open/closed state, the focus flag, the
//! active [`OptionCatalog`] and the optionally-mounted [`DropdownView`],
//! and turns keyboard/pointer intents into catalog mutations. Observable
//! effects come out as [`SelectEvent`]s, [`RenderRequest`]s and the bound
//! output value pushed through the registered change callback.

use selectar_core::{KeyIntent, KeyPress, OptionCatalog, SelectError, SelectOption};

use crate::binding::{OutputValue, RawValue, ValueBinding};
use crate::dropdown::DropdownView;
use crate::events::{RenderRequest, SelectEvent};

/// Static configuration of a selection widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    /// Whether more than one option may be selected at once.
    pub multiple: bool,
    /// Theme name handed through to the renderer.
    pub theme: String,
    /// Whether the single-select clear ("x") control is offered.
    pub allow_clear: bool,
    /// Placeholder shown while nothing is selected.
    pub placeholder: Option<String>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            theme: "default".to_string(),
            allow_clear: false,
            placeholder: None,
        }
    }
}

impl SelectConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set multi-select mode.
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set the theme name.
    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Offer the single-select clear control.
    #[must_use]
    pub fn allow_clear(mut self, allow_clear: bool) -> Self {
        self.allow_clear = allow_clear;
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// The behavioral core of the selection widget.
pub struct SelectController {
    config: SelectConfig,
    catalog: OptionCatalog,
    is_open: bool,
    has_focus: bool,
    disabled: bool,
    dropdown: Option<DropdownView>,
    pending_filter: Option<String>,
    events: Vec<SelectEvent>,
    requests: Vec<RenderRequest>,
    binding: ValueBinding,
}

impl SelectController {
    /// Build a controller over an initial option list.
    ///
    /// This is the first catalog construction: there is no prior selection
    /// to carry forward.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::InvalidOption`] when the option list contains
    /// a duplicate value.
    pub fn new(
        options: impl IntoIterator<Item = SelectOption>,
        config: SelectConfig,
    ) -> Result<Self, SelectError> {
        Ok(Self {
            config,
            catalog: OptionCatalog::new(options)?,
            is_open: false,
            has_focus: false,
            disabled: false,
            dropdown: None,
            pending_filter: None,
            events: Vec::new(),
            requests: Vec::new(),
            binding: ValueBinding::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the control has keyboard focus.
    #[must_use]
    pub const fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Whether the control is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether multi-select mode is active.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.config.multiple
    }

    /// The widget configuration.
    #[must_use]
    pub const fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// The active option catalog.
    #[must_use]
    pub const fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// The mounted dropdown view, present only between `mount_dropdown()`
    /// and the next close.
    #[must_use]
    pub const fn dropdown(&self) -> Option<&DropdownView> {
        self.dropdown.as_ref()
    }

    /// Whether the placeholder should be shown: one is configured and
    /// nothing is selected.
    #[must_use]
    pub fn show_placeholder(&self) -> bool {
        self.config.placeholder.is_some() && !self.catalog.has_selected()
    }

    /// The placeholder to render, when it should be shown.
    #[must_use]
    pub fn placeholder_text(&self) -> Option<&str> {
        if self.show_placeholder() {
            self.config.placeholder.as_deref()
        } else {
            None
        }
    }

    /// Whether the single-select clear control should be shown.
    #[must_use]
    pub fn show_clear(&self) -> bool {
        self.config.allow_clear && !self.config.multiple && self.catalog.has_selected()
    }

    // =========================================================================
    // External inputs: options, bound value, binding callbacks
    // =========================================================================

    /// Replace the option list.
    ///
    /// The catalog is rebuilt, never patched; the previous selection is
    /// carried forward by value into the new catalog (values that no longer
    /// exist are dropped). A mounted dropdown is remounted over the new
    /// catalog with its filter term preserved and the highlight reset.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::InvalidOption`] on a duplicate value; the
    /// previous catalog stays active in that case.
    pub fn set_options(
        &mut self,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> Result<(), SelectError> {
        let carried = self.catalog.value();
        let mut catalog = OptionCatalog::new(options)?;
        catalog.set_value(&carried);
        self.catalog = catalog;
        if self.dropdown.is_some() {
            let term = self
                .dropdown
                .as_ref()
                .map(|d| d.filter_term().to_string())
                .unwrap_or_default();
            let mut view = DropdownView::new(&self.catalog);
            if !term.is_empty() {
                view.filter(&term);
            }
            self.dropdown = Some(view);
        }
        Ok(())
    }

    /// Write a model value into the widget (the binding adapter's
    /// `writeValue`).
    ///
    /// The value is normalized (absent/empty/bare string/sequence) and
    /// assigned by membership; unknown identifiers are ignored. The change
    /// callback is *not* invoked: model-originated writes must not echo.
    pub fn write_value(&mut self, raw: impl Into<RawValue>) {
        let ids = raw.into().normalize();
        self.catalog.set_value(&ids);
    }

    /// Register the callback receiving the output value on every selection
    /// change.
    pub fn register_on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&OutputValue) + 'static,
    {
        self.binding.register_on_change(callback);
    }

    /// Register the callback fired when the control is touched (blurred).
    pub fn register_on_touched<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.binding.register_on_touched(callback);
    }

    /// Enable or disable the widget. Disabling while open closes the
    /// dropdown first, so a disabled widget is never stuck open.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && self.is_open {
            self.close(false);
        }
        self.disabled = disabled;
    }

    // =========================================================================
    // Dropdown toggle
    // =========================================================================

    /// Open the dropdown. No-op when already open or disabled.
    ///
    /// Geometry is requested before the state flips, matching the order the
    /// renderer needs it in: measure the control, then place the dropdown.
    pub fn open(&mut self) {
        if self.disabled || self.is_open {
            return;
        }
        self.requests.push(RenderRequest::RecomputeWidth);
        self.requests.push(RenderRequest::RecomputePosition);
        self.is_open = true;
        self.events.push(SelectEvent::Opened);
    }

    /// Close the dropdown, optionally returning focus to the control.
    /// No-op when already closed or disabled.
    pub fn close(&mut self, return_focus: bool) {
        if self.disabled || !self.is_open {
            return;
        }
        self.is_open = false;
        self.dropdown = None;
        self.pending_filter = None;
        if return_focus {
            self.focus();
        }
        self.events.push(SelectEvent::Closed);
    }

    /// Toggle between open and closed; closing returns focus.
    pub fn toggle_open(&mut self) {
        if self.disabled {
            return;
        }
        if self.is_open {
            self.close(true);
        } else {
            self.open();
        }
    }

    /// Mount the dropdown view; the host calls this after the render pass
    /// that follows `open()`. Flushes the pending typed-character filter.
    /// No-op while closed; idempotent while open.
    pub fn mount_dropdown(&mut self) {
        if !self.is_open {
            return;
        }
        if self.dropdown.is_none() {
            self.dropdown = Some(DropdownView::new(&self.catalog));
        }
        if let Some(term) = self.pending_filter.take() {
            if let Some(view) = self.dropdown.as_mut() {
                view.filter(&term);
            }
        }
    }

    // =========================================================================
    // Selection orchestration
    // =========================================================================

    /// Toggle an option's selection, enforcing the single-selection
    /// invariant in non-multiple mode. Unknown values are ignored (the UI
    /// only constructs values from rendered options).
    pub fn toggle_select(&mut self, value: &str) {
        if self.disabled {
            return;
        }
        let was_selected = match self.catalog.lookup(value) {
            Ok(option) => option.is_selected(),
            Err(_) => return,
        };
        if !self.config.multiple {
            self.deselect_others(value);
        }
        if was_selected {
            self.deselect_and_emit(value);
        } else {
            self.select_and_emit(value);
        }
        self.requests.push(if self.config.multiple {
            RenderRequest::FocusSearch
        } else {
            RenderRequest::FocusSelection
        });
    }

    /// Programmatically select an option.
    ///
    /// In non-multiple mode every other selection is cleared first
    /// (replace semantics: no `Deselected` notification for the implicit
    /// deselection).
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnknownOption`] when `value` is not in the
    /// catalog.
    pub fn select(&mut self, value: &str) -> Result<(), SelectError> {
        if self.disabled {
            return Ok(());
        }
        self.catalog.lookup(value)?;
        if !self.config.multiple {
            self.deselect_others(value);
        }
        self.select_and_emit(value);
        Ok(())
    }

    /// Deselect an option. Unknown values are a no-op: click targets are
    /// always sourced from rendered, hence valid, options.
    pub fn deselect(&mut self, value: &str) {
        if self.disabled || self.catalog.lookup(value).is_err() {
            return;
        }
        self.deselect_and_emit(value);
    }

    /// Remove the most recently selected option (selection order). Only
    /// meaningful in multiple mode; no-op when nothing is selected.
    ///
    /// The bound value is resynchronized but no `Deselected` notification
    /// fires, matching the reference behavior of backspace chip removal.
    pub fn pop_last_selection(&mut self) {
        if self.disabled || !self.config.multiple {
            return;
        }
        let Some(last) = self.catalog.last_selected().map(ToString::to_string) else {
            return;
        };
        // Known by construction: it came out of the selection order.
        let _ = self.catalog.deselect(&last);
        self.sync_output();
    }

    /// Clear every selection in one step and resynchronize the bound value
    /// once. No-op when nothing is selected.
    pub fn clear(&mut self) {
        if self.disabled || !self.catalog.has_selected() {
            return;
        }
        self.catalog.clear_selection();
        self.sync_output();
    }

    /// The externally observable value: empty, the single selected value,
    /// or the ordered selected sequence, depending on mode.
    #[must_use]
    pub fn output_value(&self) -> OutputValue {
        let mut selected = self.catalog.value();
        if selected.is_empty() {
            OutputValue::Empty
        } else if self.config.multiple {
            OutputValue::Many(selected)
        } else {
            OutputValue::Single(selected.swap_remove(0))
        }
    }

    // =========================================================================
    // Keyboard protocol
    // =========================================================================

    /// Key press on the selection control: Enter, Space and Alt+Down open a
    /// closed dropdown. Everything else falls through to the host.
    pub fn handle_key(&mut self, key: KeyPress) {
        if self.disabled {
            return;
        }
        if !self.is_open && key.is_open_request() {
            self.open();
        }
    }

    /// Key press in the search input. `search_text` is the input's current
    /// content (the controller does not own the search buffer).
    pub fn handle_search_key(&mut self, key: KeyPress, search_text: &str) {
        if self.disabled {
            return;
        }
        match key.intent {
            KeyIntent::Enter => {
                let highlighted = self
                    .dropdown
                    .as_ref()
                    .and_then(DropdownView::highlighted)
                    .map(|o| o.value.clone());
                if let Some(value) = highlighted {
                    self.toggle_select(&value);
                }
            }
            KeyIntent::Backspace => {
                if search_text.is_empty() {
                    self.pop_last_selection();
                }
            }
            KeyIntent::ArrowUp => {
                if let Some(view) = self.dropdown.as_mut() {
                    view.highlight_previous();
                } else {
                    self.open();
                }
            }
            KeyIntent::ArrowDown => {
                if let Some(view) = self.dropdown.as_mut() {
                    view.highlight_next();
                } else {
                    self.open();
                }
            }
            KeyIntent::Escape => self.close(true),
            KeyIntent::Space | KeyIntent::Tab => {}
        }
    }

    /// Typed characters in the search input.
    ///
    /// While closed this opens the dropdown and defers the filter until the
    /// render pass mounts the view (`mount_dropdown()` flushes it); while
    /// open it filters immediately. A single continuation is pending at a
    /// time — re-typing before the mount replaces it.
    pub fn handle_input(&mut self, text: &str) {
        if self.disabled {
            return;
        }
        if !self.is_open {
            self.open();
            self.pending_filter = Some(text.to_string());
        } else if let Some(view) = self.dropdown.as_mut() {
            view.filter(text);
        } else {
            self.pending_filter = Some(text.to_string());
        }
    }

    // =========================================================================
    // Pointer entry points
    // =========================================================================

    /// Click on the selection container: toggles the dropdown; multi mode
    /// also moves focus into the search input.
    pub fn selection_click(&mut self) {
        if self.disabled {
            return;
        }
        self.toggle_open();
        if self.config.multiple {
            self.requests.push(RenderRequest::FocusSearch);
        }
    }

    /// Click on the single-select clear ("x") control: deselects the sole
    /// selected option without opening the dropdown. The `Deselected`
    /// notification fires (which is why this goes through the deselect
    /// path rather than `clear`).
    pub fn clear_click(&mut self) {
        if self.disabled {
            return;
        }
        let Some(selected) = self.catalog.value().into_iter().next() else {
            return;
        };
        self.deselect_and_emit(&selected);
    }

    /// Click on a multi-select chip's "x": deselects that option.
    pub fn clear_item_click(&mut self, value: &str) {
        self.deselect(value);
    }

    /// Click anywhere outside the widget: closes without refocusing.
    pub fn window_click(&mut self) {
        self.close(false);
    }

    /// Window resized: the dropdown width must be re-derived.
    pub fn window_resize(&mut self) {
        self.requests.push(RenderRequest::RecomputeWidth);
    }

    /// The control gained focus; routes focus to the search input in multi
    /// mode, the selection control otherwise.
    pub fn focus(&mut self) {
        self.has_focus = true;
        self.requests.push(if self.config.multiple {
            RenderRequest::FocusSearch
        } else {
            RenderRequest::FocusSelection
        });
    }

    /// The control lost focus; notifies the binding's touched callback.
    pub fn blur(&mut self) {
        self.has_focus = false;
        self.binding.notify_touched();
    }

    // =========================================================================
    // Effect queues
    // =========================================================================

    /// Drain the queued notifications.
    pub fn take_events(&mut self) -> Vec<SelectEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain the queued render requests.
    pub fn take_render_requests(&mut self) -> Vec<RenderRequest> {
        std::mem::take(&mut self.requests)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Deselect every selected option except `keep`, without notifications:
    /// single-select replacement is one user intent, one event.
    fn deselect_others(&mut self, keep: &str) {
        for other in self.catalog.value() {
            if other != keep {
                let _ = self.catalog.deselect(&other);
            }
        }
    }

    fn select_and_emit(&mut self, value: &str) {
        // Caller has verified the value; a race is impossible in the
        // run-to-completion model.
        let _ = self.catalog.select(value);
        let (value, label) = self.identity_of(value);
        self.sync_output();
        self.events.push(SelectEvent::Selected { value, label });
    }

    fn deselect_and_emit(&mut self, value: &str) {
        let _ = self.catalog.deselect(value);
        let (value, label) = self.identity_of(value);
        self.sync_output();
        self.events.push(SelectEvent::Deselected { value, label });
    }

    fn identity_of(&self, value: &str) -> (String, String) {
        self.catalog
            .lookup(value)
            .map(|o| (o.value.clone(), o.label.clone()))
            .unwrap_or_else(|_| (value.to_string(), value.to_string()))
    }

    fn sync_output(&mut self) {
        let output = self.output_value();
        self.binding.notify_change(&output);
    }
}

impl std::fmt::Debug for SelectController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectController")
            .field("config", &self.config)
            .field("is_open", &self.is_open)
            .field("has_focus", &self.has_focus)
            .field("disabled", &self.disabled)
            .field("mounted", &self.dropdown.is_some())
            .field("value", &self.catalog.value())
            .finish_non_exhaustive()
    }
}
