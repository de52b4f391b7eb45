use std::sync::Arc;

use crate::services::{recommendation_filter::DEFAULT_LIFT_THRESHOLD, Catalog};

/// Shared application state
///
/// The catalog is read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub lift_threshold: f64,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, lift_threshold: f64) -> Self {
        Self {
            catalog,
            lift_threshold,
        }
    }

    /// State using the default lift threshold
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, DEFAULT_LIFT_THRESHOLD)
    }
}
