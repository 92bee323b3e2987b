//! Display glue: turns derived catalog views into product cards.

use std::io::{self, Write};

use serde::Serialize;
use shared::{
    domain::{Product, ProductId},
    view::CatalogView,
};

pub const DEFAULT_PRODUCT_NAME: &str = "Product";
pub const DEFAULT_CATEGORY: &str = "General";
pub const EMPTY_RESULTS_TEXT: &str = "No products match your search.";
const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    pub symbol: String,
    pub grouping: char,
    pub decimal: char,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            symbol: "US$".into(),
            grouping: '.',
            decimal: ',',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub price_format: PriceFormat,
    pub all_categories_label: String,
    pub placeholder_image: String,
    pub fallback_image: String,
}

/// Two-decimal currency text, e.g. `US$ 1.234,50`. Non-finite values render
/// as zero.
pub fn format_price(value: f64, format: &PriceFormat) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    // Kept in f64 so large amounts print every digit instead of saturating an
    // integer cast; beyond 2^53 the cents are whatever f64 can represent.
    let cents = (value.abs() * 100.0).round();
    let whole_units = (cents / 100.0).trunc();
    let fraction = (cents - whole_units * 100.0).clamp(0.0, 99.0) as u8;
    let digits = format!("{whole_units:.0}");

    let mut whole = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            whole.push(format.grouping);
        }
        whole.push(digit);
    }

    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };
    format!(
        "{sign}{} {whole}{}{fraction:02}",
        format.symbol, format.decimal
    )
}

/// Rating rounded to whole stars and clamped to `0..=5`.
pub fn star_count(rating: f64) -> u8 {
    if !rating.is_finite() {
        return 0;
    }
    rating.round().clamp(0.0, f64::from(MAX_STARS)) as u8
}

pub fn rating_stars(rating: f64) -> String {
    let filled = usize::from(star_count(rating));
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(usize::from(MAX_STARS) - filled));
    stars
}

pub fn result_count_text(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}

/// Replacement source for an image that failed to load, or `None` when the
/// failing source already is the fallback.
pub fn broken_image_fallback<'a>(
    current_src: &str,
    settings: &'a RenderSettings,
) -> Option<&'a str> {
    if current_src == settings.fallback_image {
        None
    } else {
        Some(settings.fallback_image.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub category: String,
    pub stars: String,
    pub rating_label: String,
    pub price: String,
    pub add_label: String,
}

impl CardView {
    pub fn from_product(product: &Product, settings: &RenderSettings) -> Self {
        let name = non_empty(product.name.as_deref()).unwrap_or(DEFAULT_PRODUCT_NAME);
        let image =
            non_empty(product.image.as_deref()).unwrap_or(settings.placeholder_image.as_str());
        let category = non_empty(product.category.as_deref()).unwrap_or(DEFAULT_CATEGORY);
        let stars = star_count(product.rating());

        Self {
            id: product.id.clone(),
            name: name.to_string(),
            image: image.to_string(),
            category: category.to_string(),
            stars: rating_stars(product.rating()),
            rating_label: format!("Rating {stars} of {MAX_STARS}"),
            price: format_price(product.price(), &settings.price_format),
            add_label: format!("Add {name} to cart"),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub trait Renderer {
    fn render(&mut self, view: &CatalogView, settings: &RenderSettings) -> io::Result<()>;

    /// Add-to-cart action for a rendered card.
    fn on_add(&mut self, product: &Product) {
        tracing::info!(product_id = %product.id, name = product.name(), "added to cart");
    }
}

/// Plain-text cards, one block per product.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writer for non-card output interleaved with rendered views.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    fn write_card(&mut self, card: &CardView) -> io::Result<()> {
        writeln!(self.out, "[{}] {}", card.id, card.name)?;
        writeln!(self.out, "    {}  {}  {}", card.category, card.stars, card.price)?;
        writeln!(self.out, "    {}", card.image)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &CatalogView, settings: &RenderSettings) -> io::Result<()> {
        writeln!(self.out, "{}", result_count_text(view.result_count))?;
        if view.is_empty() {
            writeln!(self.out, "{EMPTY_RESULTS_TEXT}")?;
            return self.out.flush();
        }
        for product in view.products.iter() {
            let card = CardView::from_product(product, settings);
            self.write_card(&card)?;
        }
        self.out.flush()
    }
}
