//! Static product catalog
//!
//! The product list is a JSON fixture compiled into the binary and parsed
//! once on first access. It is read-only for the lifetime of the process.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::domain::models::{Product, ProductId, MAX_RATING};
use crate::shared::errors::{AppError, CatalogError, Result};
use crate::shared::logging;

const PRODUCTS_JSON: &str = include_str!("../../assets/data/products.json");

static CATALOG: Lazy<std::result::Result<Catalog, CatalogError>> = Lazy::new(|| {
    let loaded = Catalog::from_json(PRODUCTS_JSON);
    match &loaded {
        Ok(catalog) => logging::log_catalog_loaded(catalog.len()),
        Err(e) => logging::log_catalog_error(&e.to_string()),
    }
    loaded
});

/// Ordered, immutable list of products
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse and check a catalog fixture.
    /// Ids must be unique and ratings, when present, within 0..=5.
    pub fn from_json(json: &str) -> std::result::Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if let Some(rating) = product.rating {
                if !(0.0..=MAX_RATING).contains(&rating) {
                    return Err(CatalogError::RatingOutOfRange {
                        id: product.id,
                        rating,
                    });
                }
            }
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(AppError::ProductNotFound(id))
    }
}

/// The catalog bundled with the application
pub fn catalog() -> Result<&'static Catalog> {
    (*CATALOG).as_ref().map_err(|e| AppError::Catalog(e.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads_in_order() {
        let catalog = catalog().unwrap();
        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.products()[0].title, "Men Sport Shoes");
        assert_eq!(catalog.products()[1].price, 2499.0);
        assert_eq!(catalog.products()[2].rating, Some(4.2));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.get(ProductId(2)).unwrap().title, "Running Sneakers Pro");
        assert!(matches!(
            catalog.get(ProductId(42)),
            Err(AppError::ProductNotFound(ProductId(42)))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "image": "/a.jpg", "title": "A", "description": "", "price": 1},
            {"id": 1, "image": "/b.jpg", "title": "B", "description": "", "price": 2}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(ProductId(1)))
        ));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let json = r#"[{"id": 9, "image": "/a.jpg", "title": "A", "description": "", "price": 1, "rating": 6.5}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::RatingOutOfRange { id: ProductId(9), .. })
        ));
    }

    #[test]
    fn test_malformed_fixture_rejected() {
        assert!(matches!(
            Catalog::from_json("[{\"id\": \"oops\"}]"),
            Err(CatalogError::Parse(_))
        ));
    }
}
