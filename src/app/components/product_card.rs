use dioxus::prelude::*;

use crate::domain::models::{original_price, star_states};
use crate::shared::format::{format_locale_number, format_price};

const HEART_PATH: &str = "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z";
const STAR_POINTS: &str = "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2";

const FAVORITE_COLOR: &str = "#ef4444";
const STAR_FILLED_COLOR: &str = "#E3A458";
const STAR_EMPTY_COLOR: &str = "#e5e7eb";

/// BEM modifier for hover-driven styles
pub fn hover_modifier(block: &str, is_hovered: bool) -> String {
    if is_hovered {
        format!("{block} {block}--hovered")
    } else {
        block.to_string()
    }
}

/// (fill, stroke) of the heart icon
pub fn heart_colors(is_favorite: bool) -> (&'static str, &'static str) {
    if is_favorite {
        (FAVORITE_COLOR, FAVORITE_COLOR)
    } else {
        ("none", "#fff")
    }
}

// Product card (BEM: c-product-card)
// Display only: favorite state is owned by the caller, hover state is local.
#[component]
pub fn ProductCard(
    image: String,
    title: String,
    description: String,
    price: f64,
    #[props(default)] rating: Option<f64>,
    on_favorite: EventHandler<MouseEvent>,
    #[props(default)] is_favorite: bool,
) -> Element {
    let mut is_hovered = use_signal(|| false);
    let hovered = is_hovered();

    let card_class = hover_modifier("c-product-card", hovered);
    let media_class = hover_modifier("c-product-card__media", hovered);
    let muted_class = hover_modifier("c-product-card__muted", hovered);

    let price_label = format_price(price);
    let original_price_label = format_price(original_price(price));

    rsx! {
        div {
            class: "{card_class}",
            onmouseenter: move |_| is_hovered.set(true),
            onmouseleave: move |_| is_hovered.set(false),

            div { class: "c-product-card__inner",
                // Image section
                div { class: "c-product-card__frame",
                    div { class: "{media_class}",
                        img {
                            class: "c-product-card__image",
                            src: "{image}",
                            alt: "{title}",
                        }
                    }

                    FavoriteButton { is_favorite, on_click: on_favorite }
                }

                // Content section
                div { class: "c-product-card__content",
                    if let Some(rating) = rating {
                        StarRating { rating, muted_class: muted_class.clone() }
                    }

                    h3 { class: "c-product-card__title", "{title}" }

                    p { class: "c-product-card__description {muted_class}", "{description}" }

                    div { class: "c-product-card__prices",
                        span { class: "c-product-card__price", "{price_label}" }
                        span { class: "c-product-card__price c-product-card__price--original",
                            "{original_price_label}"
                        }
                    }

                    // No cart behaviour behind this button
                    button { class: "c-product-card__cart", "Add to Cart" }
                }
            }
        }
    }
}

#[component]
fn FavoriteButton(is_favorite: bool, on_click: EventHandler<MouseEvent>) -> Element {
    let (fill, stroke) = heart_colors(is_favorite);

    rsx! {
        button {
            class: "c-product-card__favorite",
            aria_label: "Add to favorites",
            onclick: move |evt| on_click.call(evt),
            svg {
                class: "c-product-card__heart",
                "width": "24",
                "height": "24",
                "viewBox": "0 0 24 24",
                "fill": "{fill}",
                "stroke": "{stroke}",
                "stroke-width": "2",
                "stroke-linecap": "round",
                "stroke-linejoin": "round",
                path { "d": HEART_PATH }
            }
        }
    }
}

#[component]
fn StarRating(rating: f64, muted_class: String) -> Element {
    let Some(stars) = star_states(Some(rating)) else {
        return rsx! {};
    };
    let rating_label = format_locale_number(rating);

    rsx! {
        div { class: "c-product-card__rating",
            div { class: "c-product-card__stars",
                for (i, filled) in stars.into_iter().enumerate() {
                    StarIcon { key: "{i}", filled }
                }
            }
            span { class: "c-product-card__rating-value {muted_class}", "({rating_label})" }
        }
    }
}

#[component]
fn StarIcon(filled: bool) -> Element {
    let color = if filled { STAR_FILLED_COLOR } else { STAR_EMPTY_COLOR };

    rsx! {
        svg {
            "width": "18",
            "height": "18",
            "viewBox": "0 0 24 24",
            "fill": "{color}",
            "stroke": "{color}",
            "stroke-width": "1",
            polygon { "points": STAR_POINTS }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_modifier() {
        assert_eq!(hover_modifier("c-product-card", false), "c-product-card");
        assert_eq!(
            hover_modifier("c-product-card", true),
            "c-product-card c-product-card--hovered"
        );
    }

    #[test]
    fn test_heart_colors_follow_favorite_flag() {
        assert_eq!(heart_colors(true), ("#ef4444", "#ef4444"));
        assert_eq!(heart_colors(false), ("none", "#fff"));
    }
}
