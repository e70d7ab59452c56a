//! Client-side state containers.
//!
//! DESIGN
//! ======
//! Plain data types with small transition methods; pages wrap them in
//! `RwSignal`s so the logic stays testable without a reactive runtime.

pub mod contact_form;
pub mod list_fetch;
pub mod toast;
