//! Storefront glue around the catalog pipeline: catalog loading, settings,
//! the controller that owns the control values, and card rendering.

pub mod config;
pub mod controller;
pub mod loader;
pub mod render;

pub use config::{load_settings, load_settings_from, Settings};
pub use controller::{parse_session_line, ControlEvent, Controller, SessionCommand};
pub use loader::{load_catalog, parse_catalog};
pub use render::{
    broken_image_fallback, format_price, rating_stars, result_count_text, CardView, PriceFormat,
    RenderSettings, Renderer, TextRenderer, EMPTY_RESULTS_TEXT,
};
