use shared::{
    domain::{Catalog, CategoryFilter, ControlState},
    view::CatalogView,
};
use tracing::{debug, trace};

use crate::{
    categories::extract_categories,
    filter::filter,
    sort::{sort_in_place, NameCollator},
};

/// Filter then sort: the ordered products for one set of control values.
pub fn derive(catalog: &Catalog, state: &ControlState, collator: &NameCollator) -> CatalogView {
    let mut products = filter(catalog.products(), &state.query, &state.category);
    sort_in_place(&mut products, state.sort_mode, collator);
    debug!(
        query = %state.query,
        category = ?state.category,
        sort_mode = %state.sort_mode,
        catalog_len = catalog.len(),
        result_count = products.len(),
        "derived catalog view"
    );
    CatalogView::new(products)
}

struct Memo {
    catalog: Catalog,
    state: ControlState,
    view: CatalogView,
}

/// Owns the name collator and remembers the last derivation.
///
/// The memo is keyed on catalog identity plus the exact control values, so a
/// hit always returns what a fresh derivation would.
pub struct CatalogPipeline {
    collator: NameCollator,
    memo: Option<Memo>,
}

impl CatalogPipeline {
    pub fn new(collator: NameCollator) -> Self {
        Self {
            collator,
            memo: None,
        }
    }

    pub fn with_locale(locale: &str) -> Self {
        Self::new(NameCollator::for_locale_or_fallback(locale))
    }

    pub fn collator(&self) -> &NameCollator {
        &self.collator
    }

    pub fn derive(&mut self, catalog: &Catalog, state: &ControlState) -> CatalogView {
        if let Some(memo) = &self.memo {
            if memo.catalog.same_identity(catalog) && memo.state == *state {
                trace!(result_count = memo.view.result_count, "catalog view served from memo");
                return memo.view.clone();
            }
        }

        let view = self.derive_uncached(catalog, state);
        self.memo = Some(Memo {
            catalog: catalog.clone(),
            state: state.clone(),
            view: view.clone(),
        });
        view
    }

    pub fn derive_uncached(&self, catalog: &Catalog, state: &ControlState) -> CatalogView {
        derive(catalog, state, &self.collator)
    }

    pub fn categories(&self, catalog: &Catalog) -> Vec<CategoryFilter> {
        extract_categories(catalog.products())
    }

    pub fn clear_memo(&mut self) {
        self.memo = None;
    }
}

impl Default for CatalogPipeline {
    fn default() -> Self {
        Self::new(NameCollator::default())
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
