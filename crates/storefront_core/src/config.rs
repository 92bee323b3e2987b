use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use shared::{
    domain::SortMode,
    error::{CatalogError, CatalogResult},
};

use crate::render::{PriceFormat, RenderSettings};

pub const SETTINGS_FILE: &str = "storefront.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog_path: PathBuf,
    pub locale: String,
    pub default_sort: SortMode,
    pub currency_symbol: String,
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub all_categories_label: String,
    pub placeholder_image: String,
    pub fallback_image: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/catalog.json"),
            locale: catalog::DEFAULT_LOCALE.into(),
            default_sort: SortMode::Name,
            currency_symbol: "US$".into(),
            grouping_separator: '.',
            decimal_separator: ',',
            all_categories_label: "All products".into(),
            placeholder_image: "https://via.placeholder.com/400x300?text=Product".into(),
            fallback_image: "https://via.placeholder.com/400x300?text=No+image".into(),
        }
    }
}

impl Settings {
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            price_format: PriceFormat {
                symbol: self.currency_symbol.clone(),
                grouping: self.grouping_separator,
                decimal: self.decimal_separator,
            },
            all_categories_label: self.all_categories_label.clone(),
            placeholder_image: self.placeholder_image.clone(),
            fallback_image: self.fallback_image.clone(),
        }
    }
}

/// Defaults, then `storefront.toml` in the working directory when present and
/// readable, then environment overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        match parse_settings_file(&raw) {
            Ok(file_cfg) => apply_file_values(&mut settings, &file_cfg),
            Err(err) => {
                tracing::warn!(error = %err, file = SETTINGS_FILE, "ignoring settings file")
            }
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

/// Like [`load_settings`] but with an explicit file that must exist and parse.
pub fn load_settings_from(path: impl AsRef<Path>) -> CatalogResult<Settings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|err| CatalogError::io(path, err))?;
    let file_cfg = parse_settings_file(&raw)?;

    let mut settings = Settings::default();
    apply_file_values(&mut settings, &file_cfg);
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn parse_settings_file(raw: &str) -> CatalogResult<HashMap<String, String>> {
    toml::from_str::<HashMap<String, String>>(raw)
        .map_err(|err| CatalogError::config(err.to_string()))
}

pub(crate) fn apply_file_values(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("catalog_path") {
        settings.catalog_path = PathBuf::from(v);
    }
    if let Some(v) = file_cfg.get("locale") {
        settings.locale = v.clone();
    }
    if let Some(v) = file_cfg.get("default_sort") {
        settings.default_sort = SortMode::parse_lenient(v);
    }
    if let Some(v) = file_cfg.get("currency_symbol") {
        settings.currency_symbol = v.clone();
    }
    if let Some(c) = file_cfg.get("grouping_separator").and_then(|v| single_char(v)) {
        settings.grouping_separator = c;
    }
    if let Some(c) = file_cfg.get("decimal_separator").and_then(|v| single_char(v)) {
        settings.decimal_separator = c;
    }
    if let Some(v) = file_cfg.get("all_categories_label") {
        settings.all_categories_label = v.clone();
    }
    if let Some(v) = file_cfg.get("placeholder_image") {
        settings.placeholder_image = v.clone();
    }
    if let Some(v) = file_cfg.get("fallback_image") {
        settings.fallback_image = v.clone();
    }
}

pub(crate) fn apply_env_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("STOREFRONT_CATALOG") {
        settings.catalog_path = PathBuf::from(v);
    }
    if let Some(v) = lookup("APP__CATALOG_PATH") {
        settings.catalog_path = PathBuf::from(v);
    }

    if let Some(v) = lookup("APP__LOCALE") {
        settings.locale = v;
    }

    if let Some(v) = lookup("APP__DEFAULT_SORT") {
        settings.default_sort = SortMode::parse_lenient(&v);
    }

    if let Some(v) = lookup("APP__CURRENCY_SYMBOL") {
        settings.currency_symbol = v;
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
