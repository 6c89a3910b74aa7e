//! Application constants and configuration values

// === UI & Layout ===
pub const CARD_WIDTH: f32 = 320.0;
pub const CARD_SPACING: f32 = 15.0;
pub const TOAST_DURATION_SECS: u64 = 3;

// === Branding ===
pub const ACCENT_COLOR_RGB: (u8, u8, u8) = (255, 170, 0); // Star gold

// === Catalog ===
pub const DEFAULT_CATALOG_SOURCE: &str = "services.json";

// === Ratings ===
pub const RATED_SERVICES_COOKIE: &str = "rated_services";
pub const RATED_SERVICES_TTL_DAYS: i64 = 30;
pub const MAX_STARS: u8 = 5;
