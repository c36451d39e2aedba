//! Structured logging module for the product showcase
//!
//! Provides consistent, contextual logging across the application.
//! Every event carries an `operation` field so logs can be filtered per concern.

use crate::domain::models::ProductId;

/// Log levels for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    CatalogLoad,
    FavoriteToggle,
    PageRender,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::CatalogLoad => "catalog_load",
            LogOperation::FavoriteToggle => "favorite_toggle",
            LogOperation::PageRender => "page_render",
        }
    }
}

/// Log catalog fixture parsed successfully
pub fn log_catalog_loaded(product_count: usize) {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        product_count = product_count,
        "Product catalog loaded"
    );
}

/// Log catalog fixture rejected
pub fn log_catalog_error(error: &str) {
    tracing::error!(
        operation = LogOperation::CatalogLoad.as_str(),
        error = error,
        "Failed to load product catalog"
    );
}

/// Log a favorite flag change
pub fn log_favorite_toggled(product_id: ProductId, is_favorite: bool, favorite_count: usize) {
    tracing::debug!(
        operation = LogOperation::FavoriteToggle.as_str(),
        product_id = %product_id,
        is_favorite = is_favorite,
        favorite_count = favorite_count,
        "Favorite toggled"
    );
}

/// Log a toggle for an id the catalog does not know
pub fn log_unknown_product(product_id: ProductId) {
    tracing::warn!(
        operation = LogOperation::FavoriteToggle.as_str(),
        product_id = %product_id,
        "Favorite toggled for unknown product"
    );
}

/// Log listing page render
pub fn log_page_render(card_count: usize) {
    tracing::trace!(
        operation = LogOperation::PageRender.as_str(),
        card_count = card_count,
        "Rendering product listing"
    );
}
