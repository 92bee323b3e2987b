use shared::domain::{CategoryFilter, Product};

use crate::normalize::normalize_str;

/// Products whose normalized name contains the normalized query and whose
/// category passes `category`, in catalog order.
pub fn filter(products: &[Product], query: &str, category: &CategoryFilter) -> Vec<Product> {
    let needle = normalize_str(query);
    products
        .iter()
        .filter(|product| category.matches(product.category.as_deref()))
        .filter(|product| matches_query(product, &needle))
        .cloned()
        .collect()
}

/// `normalized_query` must already be in normalized form.
pub fn matches_query(product: &Product, normalized_query: &str) -> bool {
    normalized_query.is_empty() || normalize_str(product.name()).contains(normalized_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Café Grinder").with_category("Kitchen"),
            Product::new(2, "Mouse").with_category("Accessories"),
            Product::new(3, "Mouse Pad").with_category("accessories"),
            Product {
                name: None,
                ..Product::new(4, "")
            },
        ]
    }

    #[test]
    fn empty_query_and_sentinel_keep_everything_in_order() {
        let all = products();
        assert_eq!(filter(&all, "", &CategoryFilter::All), all);
    }

    #[test]
    fn query_matching_ignores_case_and_accents() {
        let matched = filter(&products(), "CAFE", &CategoryFilter::All);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name(), "Café Grinder");
    }

    #[test]
    fn category_matching_is_exact() {
        let matched = filter(&products(), "mouse", &CategoryFilter::only("Accessories"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name(), "Mouse");
    }

    #[test]
    fn nameless_products_only_match_the_empty_query() {
        let all = products();
        assert!(filter(&all, "", &CategoryFilter::All)
            .iter()
            .any(|p| p.name.is_none()));
        assert!(filter(&all, "m", &CategoryFilter::All)
            .iter()
            .all(|p| p.name.is_some()));
    }

    #[test]
    fn unknown_category_matches_nothing() {
        assert!(filter(&products(), "", &CategoryFilter::only("Garden")).is_empty());
    }
}
