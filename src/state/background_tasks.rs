use std::sync::mpsc::Receiver;
use crate::models::Service;
use crate::utils::async_helper::AsyncTaskResult;

#[derive(Default)]
pub struct BackgroundTasks {
    // Catalog load (one shot at startup, or after a manual retry)
    pub catalog_rx: Option<Receiver<AsyncTaskResult<Vec<Service>>>>,
}

impl BackgroundTasks {
    /// Check if any background task is active
    pub fn has_active_tasks(&self) -> bool {
        self.catalog_rx.is_some()
    }

    /// Clear all task receivers (for cleanup)
    pub fn clear_all(&mut self) {
        self.catalog_rx = None;
    }
}
