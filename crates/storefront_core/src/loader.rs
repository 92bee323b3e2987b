use std::{collections::HashSet, fs, path::Path};

use serde_json::Value;
use shared::{
    domain::{Catalog, Product},
    error::{CatalogError, CatalogResult},
};
use tracing::{info, warn};

pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|err| CatalogError::io(path, err))?;
    let catalog = parse_catalog(&raw)?;
    info!(path = %path.display(), products = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Parses a catalog document.
///
/// A document that is not an array is treated as an empty catalog, and
/// entries that cannot be read as a product are skipped. Only invalid JSON
/// syntax is an error.
pub fn parse_catalog(raw: &str) -> CatalogResult<Catalog> {
    let document: Value = serde_json::from_str(raw)?;
    let Value::Array(records) = document else {
        warn!(
            kind = json_kind(&document),
            "catalog document is not an array; using an empty catalog"
        );
        return Ok(Catalog::empty());
    };

    let mut seen_ids = HashSet::new();
    let mut products = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if !record.is_object() {
            warn!(index, kind = json_kind(&record), "skipping catalog entry that is not an object");
            continue;
        }
        match serde_json::from_value::<Product>(record) {
            Ok(product) => {
                if !seen_ids.insert(product.id.clone()) {
                    warn!(index, id = %product.id, "duplicate product id in catalog");
                }
                products.push(product);
            }
            Err(err) => warn!(index, error = %err, "skipping malformed catalog entry"),
        }
    }

    Ok(Catalog::new(products))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
