// Domain layer: product models and the bundled catalog
pub mod models;
pub mod catalog;

pub use catalog::{catalog, Catalog};
