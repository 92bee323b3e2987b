use std::sync::Arc;

use serde::Serialize;

use crate::domain::Product;

/// Ordered products to display plus the count shown next to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub products: Arc<[Product]>,
    pub result_count: usize,
}

impl CatalogView {
    pub fn new(products: Vec<Product>) -> Self {
        let result_count = products.len();
        Self {
            products: products.into(),
            result_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.result_count == 0
    }

    pub fn names(&self) -> Vec<&str> {
        self.products.iter().map(Product::name).collect()
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
