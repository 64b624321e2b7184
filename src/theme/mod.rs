//! Visual theme for the gallery site.

mod styles;

pub use styles::GLOBAL_STYLES;
