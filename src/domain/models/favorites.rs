use std::collections::HashMap;

use super::product::ProductId;

/// Session-local record of which products the user marked as favorite.
/// A missing key means "not favorited".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    entries: HashMap<ProductId, bool>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.entries.get(&id).copied().unwrap_or(false)
    }

    /// Flip the favorite flag of one product and return its new value.
    /// Every other entry is left untouched.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        let entry = self.entries.entry(id).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Number of products currently favorited
    pub fn count(&self) -> usize {
        self.entries.values().filter(|favorite| **favorite).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_not_favorite() {
        let favorites = Favorites::new();
        assert!(!favorites.is_favorite(ProductId(1)));
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn test_toggle_only_affects_one_product() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(ProductId(1)));

        assert!(favorites.is_favorite(ProductId(1)));
        assert!(!favorites.is_favorite(ProductId(2)));
        assert!(!favorites.is_favorite(ProductId(3)));
        assert_eq!(favorites.count(), 1);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut favorites = Favorites::new();
        favorites.toggle(ProductId(3));

        assert!(favorites.toggle(ProductId(2)));
        assert!(!favorites.toggle(ProductId(2)));

        assert!(!favorites.is_favorite(ProductId(2)));
        assert!(favorites.is_favorite(ProductId(3)));
    }
}
