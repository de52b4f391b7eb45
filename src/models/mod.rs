mod basket_rule;
mod product;
mod recommendation;

pub use basket_rule::{split_id_list, MarketBasketRule, ID_SEPARATOR, NONE_TOKEN};
pub use product::{Product, TopProduct};
pub use recommendation::{
    ChartView, DashboardView, Recommendations, RecommendationRecord, SelectedProduct,
    TopRanked, TopRankedCard,
};
