//! Gallery UI Components
//!
//! Dioxus widgets shared by the gallery section: the filter dropdown and the
//! attribute badges. They know nothing about where content
//! comes from; the desktop app wires them to state.

pub mod components;

pub use components::*;
