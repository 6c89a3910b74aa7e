pub mod async_helper;
pub mod clipboard;
pub mod error_handling;
