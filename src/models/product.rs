use serde::{Deserialize, Serialize};

/// A selectable product from the `product` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub item_id: i64,
    /// Display name, unique across the catalog
    pub item: String,
}

impl Product {
    pub fn new(item_id: i64, item: impl Into<String>) -> Self {
        Self {
            item_id,
            item: item.into(),
        }
    }
}

/// A precomputed related product for an item, from the `top_products` table
///
/// Storage does not enforce uniqueness of `(item_id, rank)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TopProduct {
    pub item_id: i64,
    pub rank: i64,
    pub title: String,
    pub price: Option<f64>,
    pub average_rating: f64,
}

impl TopProduct {
    pub fn new(
        item_id: i64,
        rank: i64,
        title: impl Into<String>,
        price: Option<f64>,
        average_rating: f64,
    ) -> Self {
        Self {
            item_id,
            rank,
            title: title.into(),
            price,
            average_rating,
        }
    }
}
