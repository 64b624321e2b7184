//! Gallery section components
//!
//! The list block owns the view state; the filter bar, cards and dialog are
//! driven entirely by props.

mod filter_bar;
mod gallery_card;
mod gallery_dialog;
mod gallery_list;

pub use filter_bar::FilterBar;
pub use gallery_card::GalleryCard;
pub use gallery_dialog::GalleryDialog;
pub use gallery_list::GalleryListBlock;
