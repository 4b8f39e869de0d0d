//! Discord interaction handlers
//!
//! Handlers for interactions that are not commands themselves, such as
//! parameter autocomplete.

/// Autocomplete handlers for member selection
pub mod autocomplete;
