pub mod catalog;
pub mod sqlite;

pub use catalog::{CatalogSource, SqliteCatalog};
pub use sqlite::create_pool;
