use super::{apply_env_overrides, apply_file_values, load_settings_from, Settings};

use std::{collections::HashMap, fs, path::PathBuf};

use shared::{domain::SortMode, error::CatalogError};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    let file_cfg = HashMap::from([
        ("catalog_path".to_string(), "fixtures/shop.json".to_string()),
        ("locale".to_string(), "en".to_string()),
        ("default_sort".to_string(), "price-desc".to_string()),
        ("grouping_separator".to_string(), ",".to_string()),
        ("decimal_separator".to_string(), "..".to_string()),
    ]);

    apply_file_values(&mut settings, &file_cfg);

    assert_eq!(settings.catalog_path, PathBuf::from("fixtures/shop.json"));
    assert_eq!(settings.locale, "en");
    assert_eq!(settings.default_sort, SortMode::PriceDesc);
    assert_eq!(settings.grouping_separator, ',');
    assert_eq!(settings.decimal_separator, ',', "multi-char separators are ignored");
}

#[test]
fn unknown_sort_mode_in_file_falls_back_to_name() {
    let mut settings = Settings {
        default_sort: SortMode::Ranking,
        ..Settings::default()
    };
    let file_cfg = HashMap::from([("default_sort".to_string(), "stars".to_string())]);
    apply_file_values(&mut settings, &file_cfg);
    assert_eq!(settings.default_sort, SortMode::Name);
}

#[test]
fn app_prefixed_env_wins_over_legacy_catalog_variable() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |key| match key {
        "STOREFRONT_CATALOG" => Some("legacy.json".into()),
        "APP__CATALOG_PATH" => Some("preferred.json".into()),
        "APP__CURRENCY_SYMBOL" => Some("€".into()),
        _ => None,
    });
    assert_eq!(settings.catalog_path, PathBuf::from("preferred.json"));
    assert_eq!(settings.currency_symbol, "€");
    assert_eq!(settings.locale, Settings::default().locale);
}

#[test]
fn env_without_values_keeps_defaults() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, no_env);
    assert_eq!(settings, Settings::default());
}

#[test]
fn loads_explicit_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storefront.toml");
    fs::write(
        &path,
        "catalog_path = \"shop.json\"\nall_categories_label = \"Todos los productos\"\n",
    )
    .expect("write settings");

    let settings = load_settings_from(&path).expect("settings");
    assert_eq!(settings.all_categories_label, "Todos los productos");
    assert_eq!(
        settings.render_settings().all_categories_label,
        "Todos los productos"
    );
}

#[test]
fn explicit_settings_file_must_exist_and_parse() {
    let dir = tempfile::tempdir().expect("tempdir");

    let missing = load_settings_from(dir.path().join("absent.toml")).expect_err("missing");
    assert!(matches!(missing, CatalogError::Io { .. }));

    let path = dir.path().join("broken.toml");
    fs::write(&path, "catalog_path = [1, 2]\n").expect("write settings");
    let broken = load_settings_from(&path).expect_err("broken");
    assert!(matches!(broken, CatalogError::Config(_)));
}
