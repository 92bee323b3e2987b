//! Owner of the control values; every change re-derives the catalog view.

use catalog::CatalogPipeline;
use shared::{
    domain::{Catalog, CategoryFilter, ControlState, SortMode},
    view::CatalogView,
};
use tracing::{debug, info};

use crate::{config::Settings, controller::events::ControlEvent};

pub struct Controller {
    catalog: Catalog,
    categories: Vec<CategoryFilter>,
    state: ControlState,
    pipeline: CatalogPipeline,
}

impl Controller {
    pub fn new(catalog: Catalog, settings: &Settings) -> Self {
        let state = ControlState {
            sort_mode: settings.default_sort,
            ..ControlState::default()
        };
        Self::with_pipeline(catalog, CatalogPipeline::with_locale(&settings.locale), state)
    }

    pub fn with_pipeline(catalog: Catalog, pipeline: CatalogPipeline, state: ControlState) -> Self {
        // Categories are scanned once per catalog identity, not per keystroke.
        let categories = pipeline.categories(&catalog);
        info!(
            products = catalog.len(),
            categories = categories.len() - 1,
            locale = pipeline.collator().locale(),
            "catalog controller ready"
        );
        Self {
            catalog,
            categories,
            state,
            pipeline,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn view(&mut self) -> CatalogView {
        self.pipeline.derive(&self.catalog, &self.state)
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> CatalogView {
        self.state.query = query.into();
        self.view()
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> CatalogView {
        if !category.is_all() && !self.categories.contains(&category) {
            debug!(?category, "selected category is not in the catalog");
        }
        self.state.category = category;
        self.view()
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) -> CatalogView {
        self.state.sort_mode = sort_mode;
        self.view()
    }

    pub fn apply(&mut self, event: ControlEvent) -> CatalogView {
        match event {
            ControlEvent::QueryChanged(query) => self.set_query(query),
            ControlEvent::CategorySelected(category) => self.set_category(category),
            ControlEvent::SortModeChanged(sort_mode) => self.set_sort_mode(sort_mode),
        }
    }

    /// Swaps in a new catalog. The category list is rebuilt only when the
    /// catalog identity changes; a selection that no longer exists is reset
    /// to the sentinel.
    pub fn replace_catalog(&mut self, catalog: Catalog) -> CatalogView {
        if !catalog.same_identity(&self.catalog) {
            self.categories = self.pipeline.categories(&catalog);
            let selected = &self.state.category;
            if !selected.is_all() && !self.categories.contains(selected) {
                info!(
                    category = ?self.state.category,
                    "selected category vanished with the catalog; showing all products"
                );
                self.state.category = CategoryFilter::All;
            }
            info!(
                products = catalog.len(),
                categories = self.categories.len() - 1,
                "catalog replaced"
            );
            self.catalog = catalog;
        }
        self.view()
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
