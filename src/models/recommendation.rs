use serde::{Deserialize, Serialize};

use super::TopProduct;

/// Minimum rendered chart height in pixels
const MIN_CHART_HEIGHT: u32 = 400;
/// Pixels allotted per bar
const BAR_HEIGHT: u32 = 30;

/// One recommended product, carrying the metrics of the rule that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub product_name: String,
    pub lift: f64,
    pub confidence: f64,
    pub support: f64,
}

impl RecommendationRecord {
    /// Copy rounded for tabular display
    pub fn rounded(&self) -> Self {
        Self {
            product_name: self.product_name.clone(),
            lift: round_to(self.lift, 2),
            confidence: round_to(self.confidence, 2),
            support: round_to(self.support, 3),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// A ranked related-product card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRankedCard {
    pub rank: i64,
    pub title: String,
    pub price: Option<f64>,
    pub price_label: String,
    pub average_rating: f64,
    pub rating_label: String,
}

impl From<&TopProduct> for TopRankedCard {
    fn from(row: &TopProduct) -> Self {
        let price_label = match row.price {
            Some(price) => format!("${:.2}", price),
            None => "N/A".to_string(),
        };

        Self {
            rank: row.rank,
            title: row.title.clone(),
            price: row.price,
            price_label,
            average_rating: row.average_rating,
            rating_label: format!("{:.1}", row.average_rating),
        }
    }
}

/// Top-ranked panel for a selected product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TopRanked {
    Found { products: Vec<TopRankedCard> },
    NotFound { message: String },
}

/// Bar chart input: records ascending by lift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub title: String,
    pub height: u32,
    pub records: Vec<RecommendationRecord>,
}

impl ChartView {
    pub fn new(title: String, records: Vec<RecommendationRecord>) -> Self {
        let bars = u32::try_from(records.len()).unwrap_or(u32::MAX);
        Self {
            title,
            height: MIN_CHART_HEIGHT.max(bars.saturating_mul(BAR_HEIGHT)),
            records,
        }
    }
}

/// Recommendation panel for a selected product
///
/// `NoRules` and `Unmapped` are distinct empty states: the first means no rule
/// qualified, the second means rules qualified but none had a usable consequent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Recommendations {
    Found {
        rule_count: usize,
        threshold: f64,
        chart: ChartView,
        /// Records descending by lift, rounded for display
        table: Vec<RecommendationRecord>,
    },
    NoRules {
        message: String,
    },
    Unmapped {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedProduct {
    pub item_id: i64,
    pub item: String,
}

/// Everything the page needs for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub selected: SelectedProduct,
    pub top_ranked: TopRanked,
    pub recommendations: Recommendations,
}
