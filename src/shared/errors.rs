use thiserror::Error;

use crate::domain::models::ProductId;

/// Problems with the product fixture shipped in the binary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Invalid product fixture: {0}")]
    Parse(String),

    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    #[error("Rating {rating} of product {id} is outside 0..=5")]
    RatingOutOfRange { id: ProductId, rating: f64 },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

pub type Result<T> = std::result::Result<T, AppError>;
