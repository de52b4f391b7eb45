use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::OnceCell;

use crate::{
    config::EXCLUDED_ITEMS,
    db::CatalogSource,
    error::AppResult,
    models::{MarketBasketRule, Product, TopProduct},
    services::IdentifierIndex,
};

/// Immutable snapshot of the three catalog tables plus the name/id index
///
/// Shared read-only across every request; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    top_products: Vec<TopProduct>,
    rules: Vec<MarketBasketRule>,
    index: IdentifierIndex,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Builds a snapshot, enforcing the product denylist and name ordering
    /// regardless of what the source returned.
    pub fn new(
        mut products: Vec<Product>,
        top_products: Vec<TopProduct>,
        rules: Vec<MarketBasketRule>,
    ) -> Self {
        products.retain(|product| !EXCLUDED_ITEMS.contains(&product.item.as_str()));
        products.sort_by(|a, b| a.item.cmp(&b.item));

        let index = IdentifierIndex::build(&products);

        Self {
            products,
            top_products,
            rules,
            index,
            loaded_at: Utc::now(),
        }
    }

    /// Selectable products in selector order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn top_products(&self) -> &[TopProduct] {
        &self.top_products
    }

    pub fn rules(&self) -> &[MarketBasketRule] {
        &self.rules
    }

    pub fn index(&self) -> &IdentifierIndex {
        &self.index
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Loads the catalog from a [`CatalogSource`] at most once
///
/// The first successful [`load`](Self::load) queries the source; every later
/// call returns the same `Arc` without touching the source again. A failed
/// load leaves the store empty.
pub struct CatalogStore {
    source: Arc<dyn CatalogSource>,
    snapshot: OnceCell<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            snapshot: OnceCell::new(),
        }
    }

    pub async fn load(&self) -> AppResult<Arc<Catalog>> {
        let catalog = self
            .snapshot
            .get_or_try_init(|| self.fetch())
            .await?;

        Ok(Arc::clone(catalog))
    }

    async fn fetch(&self) -> AppResult<Arc<Catalog>> {
        tracing::info!(source = self.source.name(), "Loading catalog");

        let (products, top_products, rules) = tokio::try_join!(
            self.source.load_products(),
            self.source.load_top_products(),
            self.source.load_market_basket(),
        )?;

        let catalog = Catalog::new(products, top_products, rules);

        tracing::info!(
            products = catalog.products().len(),
            top_products = catalog.top_products().len(),
            rules = catalog.rules().len(),
            "Catalog loaded"
        );

        Ok(Arc::new(catalog))
    }
}
