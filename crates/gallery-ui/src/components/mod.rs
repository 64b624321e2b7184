//! Reusable presentational components for the gallery
//!
//! Stateless widgets: every value comes in through props and every change
//! goes out through an event handler.

mod badge;
mod filter_select;

pub use badge::*;
pub use filter_select::*;
