/// Services module - business logic layer
///
/// Services contain the filter, rating and cookie logic called from the UI.
/// They hold no egui types so they can be tested on their own.

pub mod cookie_store;
pub mod filter;
pub mod rated_set;
pub mod rating;

// Re-export commonly used types
pub use cookie_store::{CookieStore, MemoryCookieStore, SqliteCookieStore};
pub use filter::CategoryFilter;
pub use rated_set::RatedSet;
pub use rating::{RateOutcome, Stars};
