use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{DashboardView, Product, Recommendations, TopRanked},
    services::dashboard as views,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub product: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductPanel<T> {
    pub item_id: i64,
    pub item: String,
    #[serde(flatten)]
    pub panel: T,
}

/// Health check endpoint with catalog sizes
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let catalog = &state.catalog;
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "products": catalog.products().len(),
            "rules": catalog.rules().len(),
            "loaded_at": catalog.loaded_at(),
        })),
    )
}

/// Selector options in display order
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// Ranked related products for a product id
pub async fn top_ranked(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> AppResult<Json<ProductPanel<TopRanked>>> {
    let item = product_name(&state, item_id)?;
    let panel = views::top_ranked_view(&state.catalog, item_id, &item);

    Ok(Json(ProductPanel {
        item_id,
        item,
        panel,
    }))
}

/// Market-basket recommendations for a product id
pub async fn recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(item_id): Path<i64>,
) -> AppResult<Json<ProductPanel<Recommendations>>> {
    let item = product_name(&state, item_id)?;
    let panel =
        views::recommendations_view(&state.catalog, item_id, &item, state.lift_threshold);

    tracing::info!(
        request_id = %request_id,
        item_id,
        status = recommendation_status(&panel),
        "Served recommendations"
    );

    Ok(Json(ProductPanel {
        item_id,
        item,
        panel,
    }))
}

/// Whole dashboard for a product name, defaulting to the first product
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<DashboardView>> {
    tracing::info!(
        request_id = %request_id,
        product = ?query.product,
        "Processing dashboard request"
    );

    let view = views::dashboard_view(
        &state.catalog,
        query.product.as_deref(),
        state.lift_threshold,
    )?
    .ok_or_else(|| AppError::NotFound("No products available".to_string()))?;

    Ok(Json(view))
}

fn product_name(state: &AppState, item_id: i64) -> AppResult<String> {
    let index = state.catalog.index();
    if !index.contains_id(item_id) {
        return Err(AppError::NotFound(format!("Unknown product id: {}", item_id)));
    }
    Ok(index.id_to_name(item_id, "").to_string())
}

fn recommendation_status(panel: &Recommendations) -> &'static str {
    match panel {
        Recommendations::Found { .. } => "found",
        Recommendations::NoRules { .. } => "no_rules",
        Recommendations::Unmapped { .. } => "unmapped",
    }
}
