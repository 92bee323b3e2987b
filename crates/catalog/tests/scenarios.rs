use catalog::{extract_categories, filter, normalize_str, sort, CatalogPipeline, NameCollator};
use shared::domain::{Catalog, CategoryFilter, ControlState, Product, SortMode};

fn accessories() -> Catalog {
    let products: Vec<Product> = serde_json::from_str(
        r#"[
            {"id": 1, "name": "Mouse", "category": "Accessories", "price": 20, "rating": 4},
            {"id": 2, "name": "Keyboard", "category": "Accessories", "price": 15, "rating": 5}
        ]"#,
    )
    .expect("catalog json");
    Catalog::new(products)
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(Product::name).collect()
}

#[test]
fn scenario_a_price_ascending_over_whole_catalog() {
    let mut pipeline = CatalogPipeline::default();
    let view = pipeline.derive(
        &accessories(),
        &ControlState::new("", CategoryFilter::All, SortMode::PriceAsc),
    );
    assert_eq!(view.names(), vec!["Keyboard", "Mouse"]);
}

#[test]
fn scenario_b_lowercase_query_matches_capitalized_name() {
    let mut pipeline = CatalogPipeline::default();
    let view = pipeline.derive(
        &accessories(),
        &ControlState::new("mouse", CategoryFilter::All, SortMode::Name),
    );
    assert_eq!(view.names(), vec!["Mouse"]);
    assert_eq!(view.result_count, 1);
}

#[test]
fn scenario_c_empty_catalog() {
    let catalog = Catalog::empty();
    let collator = NameCollator::default();

    assert_eq!(extract_categories(catalog.products()), vec![CategoryFilter::All]);
    assert!(filter(catalog.products(), "", &CategoryFilter::All).is_empty());
    assert!(sort(catalog.products(), SortMode::Ranking, &collator).is_empty());

    let view = CatalogPipeline::default().derive(&catalog, &ControlState::default());
    assert!(view.is_empty());
}

#[test]
fn scenario_d_rating_tie_broken_by_name() {
    let catalog = Catalog::new(vec![
        Product::new(1, "Zed").with_rating(5.0),
        Product::new(2, "Alpha").with_rating(5.0),
    ]);
    let view = CatalogPipeline::default().derive(
        &catalog,
        &ControlState::new("", CategoryFilter::All, SortMode::Ranking),
    );
    assert_eq!(view.names(), vec!["Alpha", "Zed"]);
}

#[test]
fn normalize_folds_case_and_accents() {
    assert_eq!(normalize_str("CAFÉ"), normalize_str("cafe"));
    assert_eq!(normalize_str("cafe"), "cafe");
}

#[test]
fn name_sort_is_idempotent_and_deterministic() {
    let collator = NameCollator::default();
    let products = vec![
        Product::new(1, "banana"),
        Product::new(2, "Árbol"),
        Product::new(3, "apple"),
        Product::new(4, "Banana"),
        Product::new(5, "cafe"),
        Product::new(6, "Café"),
    ];

    let once = sort(&products, SortMode::Name, &collator);
    let twice = sort(&once, SortMode::Name, &collator);
    assert_eq!(once, twice);
    assert_eq!(once, sort(&products, SortMode::Name, &collator));
    assert_eq!(
        names(&once),
        vec!["apple", "Árbol", "banana", "Banana", "cafe", "Café"]
    );
}

#[test]
fn equal_prices_fall_back_to_name_order() {
    let collator = NameCollator::default();
    let products = vec![
        Product::new(1, "Webcam").with_price(49.0),
        Product::new(2, "Dock").with_price(49.0),
        Product::new(3, "Adapter").with_price(49.0),
    ];
    assert_eq!(
        names(&sort(&products, SortMode::PriceAsc, &collator)),
        vec!["Adapter", "Dock", "Webcam"]
    );
}

#[test]
fn spanish_collation_orders_enye_after_n() {
    let collator = NameCollator::new("es").expect("collator");
    let products = vec![
        Product::new(1, "Ñandú"),
        Product::new(2, "Nube"),
        Product::new(3, "Oso"),
    ];
    assert_eq!(
        names(&sort(&products, SortMode::Name, &collator)),
        vec!["Nube", "Ñandú", "Oso"]
    );
}

#[test]
fn filter_never_grows_the_catalog() {
    let catalog = accessories();
    for query in ["", "o", "key", "zzz", "MOUSE"] {
        for category in extract_categories(catalog.products()) {
            assert!(filter(catalog.products(), query, &category).len() <= catalog.len());
        }
    }
}
