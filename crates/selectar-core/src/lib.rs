//! Core types for the selectar selection widget.
//!
//! This crate provides the foundational pieces used by the behavioral
//! controller in `selectar-widgets`:
//! - The option catalog: [`SelectOption`], [`OptionCatalog`]
//! - Keyboard intents: [`KeyIntent`], [`KeyPress`]
//! - Errors: [`SelectError`]

mod catalog;
mod error;
mod key;
mod option;

pub use catalog::OptionCatalog;
pub use error::SelectError;
pub use key::{KeyIntent, KeyPress};
pub use option::SelectOption;
