pub mod background_tasks;
pub mod content_state;
pub mod ui_state;

pub use background_tasks::BackgroundTasks;
pub use content_state::{CatalogStatus, ContentState};
pub use ui_state::UIState;
