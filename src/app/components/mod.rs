pub mod background;
pub mod common;
pub mod product_card;

pub use background::Backdrop;
pub use common::{EmptyState, ErrorMessage};
pub use product_card::ProductCard;
