use dioxus::prelude::*;

use crate::app::components::{Backdrop, EmptyState, ErrorMessage, ProductCard};
use crate::domain::catalog;
use crate::domain::models::{Favorites, Product, ProductId};
use crate::shared::hooks::use_favorites;
use crate::shared::logging;

/// (product id, favorite flag) for every card, in catalog order.
/// Products without an entry in the mapping are not favorited.
pub fn card_states(products: &[Product], favorites: &Favorites) -> Vec<(ProductId, bool)> {
    products
        .iter()
        .map(|p| (p.id, favorites.is_favorite(p.id)))
        .collect()
}

/// Product listing: one card per catalog entry, favorites kept for the session only
#[component]
pub fn HomePage() -> Element {
    let mut favorites = use_favorites();

    let catalog = match catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            return rsx! {
                div { class: "p-home",
                    ErrorMessage { message: e.to_string() }
                }
            };
        }
    };

    logging::log_page_render(catalog.len());
    let states = card_states(catalog.products(), &favorites.favorites.read());

    rsx! {
        div { class: "p-home",
            Backdrop {}

            div { class: "p-home__cards",
                if catalog.is_empty() {
                    EmptyState { message: "No products available" }
                }
                for (product, (id, is_favorite)) in catalog.products().iter().zip(states) {
                    ProductCard {
                        key: "{id}",
                        image: product.image.clone(),
                        title: product.title.clone(),
                        description: product.description.clone(),
                        price: product.price,
                        rating: product.rating,
                        is_favorite,
                        on_favorite: move |_| favorites.toggle(id),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_product_in_order() {
        let catalog = catalog().unwrap();
        let states = card_states(catalog.products(), &Favorites::new());

        let ids: Vec<ProductId> = states.iter().map(|(id, _)| *id).collect();
        let expected: Vec<ProductId> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
        assert!(states.iter().all(|(_, favorite)| !favorite));
    }

    #[test]
    fn test_toggle_changes_only_one_card() {
        let catalog = catalog().unwrap();
        let mut favorites = Favorites::new();
        favorites.toggle(ProductId(1));

        let states = card_states(catalog.products(), &favorites);
        assert_eq!(
            states,
            vec![(ProductId(1), true), (ProductId(2), false), (ProductId(3), false)]
        );
    }

    #[test]
    fn test_double_toggle_of_product_two_restores_initial_cards() {
        let catalog = catalog().unwrap();
        let initial = card_states(catalog.products(), &Favorites::new());

        let mut favorites = Favorites::new();
        favorites.toggle(ProductId(2));
        favorites.toggle(ProductId(2));

        assert_eq!(card_states(catalog.products(), &favorites), initial);
    }
}
