use std::collections::HashSet;

use shared::domain::{CategoryFilter, Product};

/// Distinct non-empty categories in first-occurrence order, preceded by the
/// `All` sentinel.
pub fn extract_categories(products: &[Product]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut categories = vec![CategoryFilter::All];
    for category in products.iter().filter_map(Product::category) {
        if seen.insert(category) {
            categories.push(CategoryFilter::only(category));
        }
    }
    categories
}
