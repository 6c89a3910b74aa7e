pub mod directory_app;

pub use directory_app::DirectoryApp;
