//! Catalog derivation: turns a product catalog plus the storefront's control
//! values (query, category, sort mode) into the ordered list to display.
//!
//! - [`normalize`] canonicalizes text for case- and accent-insensitive matching.
//! - [`categories`] lists the distinct categories, `All` sentinel first.
//! - [`filter`] narrows by query and category, preserving catalog order.
//! - [`sort`] orders by name, price or rating with a collated name tie-break.
//! - [`pipeline`] composes filter and sort and memoizes the last result.

pub mod categories;
pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod sort;

pub use categories::extract_categories;
pub use filter::{filter, matches_query};
pub use normalize::{normalize, normalize_str};
pub use pipeline::{derive, CatalogPipeline};
pub use sort::{sort, NameCollator, DEFAULT_LOCALE};
