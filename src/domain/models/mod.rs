// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod product;
pub mod favorites;

pub use product::{
    filled_stars, original_price, star_states, Product, ProductId, MAX_RATING,
    ORIGINAL_PRICE_MARKUP, RATING_STARS,
};
pub use favorites::Favorites;
