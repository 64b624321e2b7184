//! Page components for the gallery site.

mod gallery;

pub use gallery::GalleryPage;
