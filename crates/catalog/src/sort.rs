use std::{cmp::Ordering, fmt};

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use shared::{
    domain::{Product, SortMode},
    error::{CatalogError, CatalogResult},
};

use crate::normalize::normalize_str;

pub const DEFAULT_LOCALE: &str = "es";

/// Name comparison used for the `name` order and as the tie-break of every
/// other order. Compares at primary strength: accents and case are ignored.
pub struct NameCollator {
    locale: String,
    backend: CollatorBackend,
}

enum CollatorBackend {
    Icu(Collator),
    Normalized,
}

impl NameCollator {
    pub fn new(locale: &str) -> CatalogResult<Self> {
        let parsed: Locale = locale.parse().map_err(|err| CatalogError::Collation {
            locale: locale.to_string(),
            reason: format!("{err}"),
        })?;

        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);
        let collator =
            Collator::try_new(&(&parsed).into(), options).map_err(|err| CatalogError::Collation {
                locale: locale.to_string(),
                reason: format!("{err}"),
            })?;

        Ok(Self {
            locale: parsed.to_string(),
            backend: CollatorBackend::Icu(collator),
        })
    }

    /// Compares normalized names code point by code point. Used when no
    /// collation data is available for the configured locale.
    pub fn fallback() -> Self {
        Self {
            locale: "und".to_string(),
            backend: CollatorBackend::Normalized,
        }
    }

    /// Builds a collator for `locale`, degrading to [`NameCollator::fallback`].
    pub fn for_locale_or_fallback(locale: &str) -> Self {
        match Self::new(locale) {
            Ok(collator) => collator,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to normalized name ordering");
                Self::fallback()
            }
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.backend {
            CollatorBackend::Icu(collator) => collator.compare(left, right),
            CollatorBackend::Normalized => normalize_str(left).cmp(&normalize_str(right)),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::for_locale_or_fallback(DEFAULT_LOCALE)
    }
}

impl fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backend = match self.backend {
            CollatorBackend::Icu(_) => "icu",
            CollatorBackend::Normalized => "normalized",
        };
        f.debug_struct("NameCollator")
            .field("locale", &self.locale)
            .field("backend", &backend)
            .finish()
    }
}

/// Returns a freshly ordered copy of `products`; the input is left untouched.
pub fn sort(products: &[Product], mode: SortMode, collator: &NameCollator) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sort_in_place(&mut sorted, mode, collator);
    sorted
}

pub(crate) fn sort_in_place(products: &mut [Product], mode: SortMode, collator: &NameCollator) {
    products.sort_by(|a, b| compare(a, b, mode, collator));
}

pub fn compare(a: &Product, b: &Product, mode: SortMode, collator: &NameCollator) -> Ordering {
    let by_name = || collator.compare(a.name(), b.name());
    match mode {
        SortMode::Name => by_name(),
        SortMode::PriceAsc => compare_numbers(a.price(), b.price()).then_with(by_name),
        SortMode::PriceDesc => compare_numbers(b.price(), a.price()).then_with(by_name),
        SortMode::Ranking => compare_numbers(b.rating(), a.rating()).then_with(by_name),
    }
}

// Accessors already map non-finite values to zero.
fn compare_numbers(left: f64, right: f64) -> Ordering {
    left.partial_cmp(&right).unwrap_or(Ordering::Equal)
}
