//! Shared color palette
use egui::Color32;

pub const BG_MAIN: Color32 = Color32::from_rgb(18, 18, 20);
pub const BG_CARD: Color32 = Color32::from_rgb(28, 28, 32);
pub const BG_CARD_HOVER: Color32 = Color32::from_rgb(40, 40, 45);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 235);
pub const TEXT_SECONDARY: Color32 = Color32::GRAY;
pub const TEXT_MUTED: Color32 = Color32::DARK_GRAY;
pub const STAR_FILLED: Color32 = Color32::from_rgb(255, 170, 0);
pub const STAR_EMPTY: Color32 = Color32::from_rgb(80, 80, 80);
pub const RATED_BADGE: Color32 = Color32::from_rgb(60, 160, 90);
pub const TOAST_INFO: Color32 = Color32::from_rgb(50, 90, 160);
pub const TOAST_SUCCESS: Color32 = Color32::from_rgb(40, 140, 70);
pub const TOAST_ERROR: Color32 = Color32::from_rgb(180, 50, 50);
