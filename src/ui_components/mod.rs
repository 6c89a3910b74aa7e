pub mod colors;
pub mod helpers;
pub mod toast;
