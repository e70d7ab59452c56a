//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and record cards. Only `toaster` reads
//! shared state from a Leptos context provider; the rest take props.

pub mod experience_card;
pub mod fetch_status;
pub mod footer;
pub mod navbar;
pub mod project_card;
pub mod skill_card;
pub mod toaster;
