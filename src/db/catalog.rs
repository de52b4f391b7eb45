use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    config::EXCLUDED_ITEMS,
    error::AppResult,
    models::{MarketBasketRule, Product, TopProduct},
};

/// Read-only source of the three catalog tables
///
/// Implementations are queried once per process by
/// [`CatalogStore`](crate::services::CatalogStore); they do no caching of their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Selectable products, denylisted names removed, ordered by name
    async fn load_products(&self) -> AppResult<Vec<Product>>;

    /// The full `top_products` table in storage order
    async fn load_top_products(&self) -> AppResult<Vec<TopProduct>>;

    /// The full `market_basket` table in storage order
    async fn load_market_basket(&self) -> AppResult<Vec<MarketBasketRule>>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

// Id lists and display columns are read back as text so that single ids
// stored as INTEGER and NULL cells both decode. NULL becomes ''.
const TOP_PRODUCTS_QUERY: &str = r#"
    SELECT
        CAST(item_id AS INTEGER) AS item_id,
        CAST("rank" AS INTEGER) AS "rank",
        COALESCE(CAST(title AS TEXT), '') AS title,
        CAST(price AS REAL) AS price,
        COALESCE(CAST(average_rating AS REAL), 0.0) AS average_rating
    FROM top_products
"#;

const MARKET_BASKET_QUERY: &str = r#"
    SELECT
        COALESCE(CAST(antecedents AS TEXT), '') AS antecedents,
        COALESCE(CAST(antecedents_id AS TEXT), '') AS antecedents_id,
        COALESCE(CAST(consequents AS TEXT), '') AS consequents,
        COALESCE(CAST(consequents_id AS TEXT), '') AS consequents_id,
        CAST(support AS REAL) AS support,
        CAST(confidence AS REAL) AS confidence,
        CAST(lift AS REAL) AS lift
    FROM market_basket
"#;

/// Catalog backed by the SQLite file produced by the market-basket pipeline
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
    excluded: &'static [&'static str],
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_excluded(pool, EXCLUDED_ITEMS)
    }

    pub fn with_excluded(pool: SqlitePool, excluded: &'static [&'static str]) -> Self {
        Self { pool, excluded }
    }
}

#[async_trait]
impl CatalogSource for SqliteCatalog {
    async fn load_products(&self) -> AppResult<Vec<Product>> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT DISTINCT CAST(item_id AS INTEGER) AS item_id, CAST(item AS TEXT) AS item \
             FROM product WHERE item IS NOT NULL",
        );

        if !self.excluded.is_empty() {
            query.push(" AND item NOT IN (");
            let mut names = query.separated(", ");
            for name in self.excluded {
                names.push_bind(*name);
            }
            names.push_unseparated(")");
        }

        query.push(" ORDER BY item");

        let products = query
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    async fn load_top_products(&self) -> AppResult<Vec<TopProduct>> {
        let rows = sqlx::query_as::<_, TopProduct>(TOP_PRODUCTS_QUERY)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = rows.len(), "Loaded top products");
        Ok(rows)
    }

    async fn load_market_basket(&self) -> AppResult<Vec<MarketBasketRule>> {
        let rows = sqlx::query_as::<_, MarketBasketRule>(MARKET_BASKET_QUERY)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = rows.len(), "Loaded market basket rules");
        Ok(rows)
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}
