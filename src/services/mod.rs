pub mod catalog;
pub mod consequent_expander;
pub mod dashboard;
pub mod identifier_index;
pub mod recommendation_filter;
pub mod top_rank;

pub use catalog::{Catalog, CatalogStore};
pub use identifier_index::IdentifierIndex;
