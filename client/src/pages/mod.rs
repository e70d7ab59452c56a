//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch lifecycle, filter
//! selection, form submission) and delegates rendering details to
//! `components`.

pub mod about;
pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;
pub mod skills;
