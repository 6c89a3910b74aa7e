// Data models for the services catalog

pub mod service;

// Re-export commonly used types
pub use service::Service;
