use serde::{Deserialize, Serialize};
use std::fmt;

/// Markup applied to the current price to get the struck-through "original" price
pub const ORIGINAL_PRICE_MARKUP: f64 = 1.1;

/// Number of star indicators shown for a rating
pub const RATING_STARS: usize = 5;

/// Highest rating a product can carry
pub const MAX_RATING: f64 = 5.0;

/// Product identifier, unique within the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One sellable item as shown on the listing page.
/// Loaded from the static fixture, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub image: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Decorative "before discount" price shown next to the current one
pub fn original_price(price: f64) -> f64 {
    price * ORIGINAL_PRICE_MARKUP
}

/// Number of filled stars for a rating: floor(rating), capped at five
pub fn filled_stars(rating: f64) -> usize {
    if rating <= 0.0 {
        return 0;
    }
    (rating.floor() as usize).min(RATING_STARS)
}

/// Filled/empty flag for each of the five star indicators.
///
/// Returns `None` when the rating indicator must not be rendered at all.
/// A rating of zero or NaN is treated like a missing one: the listing only
/// shows stars for products that actually carry a score.
pub fn star_states(rating: Option<f64>) -> Option<[bool; RATING_STARS]> {
    let rating = rating.filter(|r| *r != 0.0 && !r.is_nan())?;
    let filled = filled_stars(rating);

    let mut stars = [false; RATING_STARS];
    for star in stars.iter_mut().take(filled) {
        *star = true;
    }
    Some(stars)
}
