//! UI Components for the gallery site.

pub mod gallery;
