use crate::ui_components::toast::ToastManager;

pub struct UIState {
    // Toast Notifications ("already rated" and friends)
    pub toast_manager: ToastManager,

    // Header "About" button asks the scroll area to jump to the footer
    pub scroll_to_about: bool,

    pub is_shutting_down: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            toast_manager: ToastManager::new(),
            scroll_to_about: false,
            is_shutting_down: false,
        }
    }
}

impl UIState {
    /// Request a smooth scroll to the About section on the next frame
    pub fn request_scroll_to_about(&mut self) {
        self.scroll_to_about = true;
    }

    /// Consume the pending scroll request
    pub fn take_scroll_to_about(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_about)
    }
}
