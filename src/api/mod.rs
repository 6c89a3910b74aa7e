// Catalog resource client

pub mod catalog;

// Re-export commonly used functions
pub use catalog::load_catalog;
