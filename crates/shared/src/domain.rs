use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(id) => write!(f, "{id}"),
            ProductId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One catalog item as supplied by the static catalog document.
///
/// Text fields stay optional so a sparse record still loads. Numeric fields are
/// always finite: non-finite values become 0 on construction and on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: f64,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            image: None,
            category: None,
            price: 0.0,
            rating: 0.0,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = finite_or_zero(price);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = finite_or_zero(rating);
        self
    }

    /// Name used for matching and collation; absent names behave as empty.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Category label, or `None` when the product is uncategorized.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn price(&self) -> f64 {
        finite_or_zero(self.price)
    }

    pub fn rating(&self) -> f64 {
        finite_or_zero(self.rating)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        Raw::Other(_) => 0.0,
    };
    // `"NaN"` and `"inf"` parse as floats but are not prices.
    Ok(finite_or_zero(value))
}

/// Shared, immutable handle to an ordered product list.
///
/// Clones share identity; two separately built catalogs never do, even when
/// their contents are equal.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
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

    pub fn same_identity(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.products, &other.products)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(value: Vec<Product>) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Name,
    PriceAsc,
    PriceDesc,
    Ranking,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Name,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::Ranking,
    ];

    /// Parses a control value; anything unrecognized falls back to `Name`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim() {
            "price-asc" => SortMode::PriceAsc,
            "price-desc" => SortMode::PriceDesc,
            "ranking" => SortMode::Ranking,
            _ => SortMode::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::Ranking => "ranking",
        }
    }
}

impl FromStr for SortMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection. `All` is the "no category filter" sentinel and is
/// always listed first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn only(category: impl Into<String>) -> Self {
        Self::Only(category.into())
    }

    /// Exact, case-sensitive comparison against the raw product category.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => category == Some(selected.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            CategoryFilter::All => all_label,
            CategoryFilter::Only(category) => category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ControlState {
    pub query: String,
    pub category: CategoryFilter,
    pub sort_mode: SortMode,
}

impl ControlState {
    pub fn new(query: impl Into<String>, category: CategoryFilter, sort_mode: SortMode) -> Self {
        Self {
            query: query.into(),
            category,
            sort_mode,
        }
    }
}
