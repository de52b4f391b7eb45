//! Composes the per-selection panels the presentation layer renders.

use crate::{
    error::LookupError,
    models::{
        ChartView, DashboardView, Recommendations, RecommendationRecord, SelectedProduct,
        TopRanked, TopRankedCard,
    },
    services::{
        consequent_expander::expand_consequents, recommendation_filter::filter_rules,
        top_rank::select_top_ranked, Catalog,
    },
};

/// Top-ranked panel for one product
pub fn top_ranked_view(catalog: &Catalog, item_id: i64, product_name: &str) -> TopRanked {
    let rows = select_top_ranked(catalog.top_products(), item_id);

    if rows.is_empty() {
        return TopRanked::NotFound {
            message: format!("No top-ranked products (rank 1-3) found for {}", product_name),
        };
    }

    TopRanked::Found {
        products: rows.into_iter().map(TopRankedCard::from).collect(),
    }
}

/// Recommendation panel for one product
pub fn recommendations_view(
    catalog: &Catalog,
    item_id: i64,
    product_name: &str,
    threshold: f64,
) -> Recommendations {
    let rules = filter_rules(catalog.rules(), item_id, threshold);

    if rules.is_empty() {
        return Recommendations::NoRules {
            message: format!(
                "No recommendations found for '{}' with lift > {}",
                product_name,
                threshold_label(threshold)
            ),
        };
    }

    let records = expand_consequents(&rules, catalog.index());

    if records.is_empty() {
        return Recommendations::Unmapped {
            message: "Could not map consequent IDs to product names".to_string(),
        };
    }

    let mut ascending = records.clone();
    ascending.sort_by(|a, b| a.lift.total_cmp(&b.lift));

    let mut table: Vec<RecommendationRecord> =
        records.iter().map(RecommendationRecord::rounded).collect();
    table.sort_by(|a, b| b.lift.total_cmp(&a.lift));

    let chart = ChartView::new(
        format!(
            "Products to Buy with '{}' (Lift > {})",
            product_name,
            threshold_label(threshold)
        ),
        ascending,
    );

    Recommendations::Found {
        rule_count: rules.len(),
        threshold,
        chart,
        table,
    }
}

/// Whole thresholds keep one decimal ("1.0"); others print as-is ("1.25")
fn threshold_label(threshold: f64) -> String {
    if threshold.fract() == 0.0 {
        format!("{:.1}", threshold)
    } else {
        threshold.to_string()
    }
}

/// Full page for a product name, or the first selectable product when `None`
///
/// Returns `Ok(None)` when the catalog has no selectable products.
pub fn dashboard_view(
    catalog: &Catalog,
    product: Option<&str>,
    threshold: f64,
) -> Result<Option<DashboardView>, LookupError> {
    let name = match product {
        Some(name) => name,
        None => match catalog.products().first() {
            Some(first) => first.item.as_str(),
            None => return Ok(None),
        },
    };

    let item_id = catalog.index().name_to_id(name)?;

    tracing::info!(item_id, product = name, "Building dashboard view");

    Ok(Some(DashboardView {
        selected: SelectedProduct {
            item_id,
            item: name.to_string(),
        },
        top_ranked: top_ranked_view(catalog, item_id, name),
        recommendations: recommendations_view(catalog, item_id, name, threshold),
    }))
}
