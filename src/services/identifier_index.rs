use std::collections::HashMap;

use crate::{error::LookupError, models::Product};

/// Bidirectional name/id lookup over the loaded products
///
/// Built once per catalog snapshot and never mutated. When a name or id
/// appears more than once the last product wins in that direction.
#[derive(Debug, Clone, Default)]
pub struct IdentifierIndex {
    by_name: HashMap<String, i64>,
    by_id: HashMap<i64, String>,
}

impl IdentifierIndex {
    pub fn build(products: &[Product]) -> Self {
        let mut index = Self {
            by_name: HashMap::with_capacity(products.len()),
            by_id: HashMap::with_capacity(products.len()),
        };

        for product in products {
            index.by_name.insert(product.item.clone(), product.item_id);
            index.by_id.insert(product.item_id, product.item.clone());
        }

        index
    }

    pub fn name_to_id(&self, name: &str) -> Result<i64, LookupError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| LookupError(name.to_string()))
    }

    /// Display name for `id`, or `fallback` unchanged when the id is unknown
    pub fn id_to_name<'a>(&'a self, id: i64, fallback: &'a str) -> &'a str {
        self.by_id.get(&id).map(String::as_str).unwrap_or(fallback)
    }

    pub fn contains_id(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
