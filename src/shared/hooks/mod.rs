// Custom Dioxus hooks
pub mod use_favorites;

pub use use_favorites::{use_favorites, UseFavoritesReturn};
