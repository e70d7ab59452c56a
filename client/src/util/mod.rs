//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure display logic (filters, formatting, icons) lives here so pages stay
//! thin and the rules are testable without a browser. `fetch` is the one
//! reactive helper.

pub mod fetch;
pub mod filter;
pub mod format;
pub mod skill_icons;
