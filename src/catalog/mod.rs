mod defaults;
mod persistence;
mod store;

pub use defaults::{default_catalog, DEFAULT_INGREDIENTS};
pub use persistence::{load_catalog, save_catalog};
pub use store::Catalog;
