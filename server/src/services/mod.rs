//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and persistence concerns so route handlers
//! can stay focused on protocol translation and status mapping.

pub mod contact;
pub mod notify;
pub mod portfolio;
pub mod seed;
