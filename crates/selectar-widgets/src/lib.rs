//! Behavioral select widget for selectar.
//!
//! The pieces compose the core of a searchable single/multi-select
//! dropdown:
//! - [`SelectController`] — open/close state machine, selection
//!   orchestration, keyboard protocol
//! - [`DropdownView`] — the optionally-mounted dropdown collaborator
//! - [`ValueBinding`], [`RawValue`], [`OutputValue`] — the two-way
//!   form-binding adapter
//! - [`SelectEvent`], [`RenderRequest`] — notifications and geometry/focus
//!   intents drained by the host

pub mod binding;
pub mod controller;
pub mod dropdown;
pub mod events;

pub use binding::{OutputValue, RawValue, ValueBinding};
pub use controller::{SelectConfig, SelectController};
pub use dropdown::{DropdownView, VisibleOption};
pub use events::{RenderRequest, SelectEvent};
