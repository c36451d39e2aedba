use dioxus::prelude::*;

use crate::domain::catalog;
use crate::domain::models::{Favorites, ProductId};
use crate::shared::logging;

/// Page-level favorites state. Copy, so it can be moved into every card's handler.
#[derive(Clone, Copy, PartialEq)]
pub struct UseFavoritesReturn {
    pub favorites: Signal<Favorites>,
}

impl UseFavoritesReturn {
    /// Flip one product's favorite flag, leaving the others untouched
    pub fn toggle(&mut self, id: ProductId) {
        if let Ok(catalog) = catalog() {
            if catalog.get(id).is_err() {
                logging::log_unknown_product(id);
            }
        }

        let mut favorites = self.favorites.write();
        let is_favorite = favorites.toggle(id);
        logging::log_favorite_toggled(id, is_favorite, favorites.count());
    }
}

/// Favorites mapping scoped to the calling component; starts empty on every mount
pub fn use_favorites() -> UseFavoritesReturn {
    let favorites = use_signal(Favorites::new);

    UseFavoritesReturn { favorites }
}
