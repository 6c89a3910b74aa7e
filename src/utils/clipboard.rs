/// Copy text to the system clipboard, logging instead of failing
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => {
            log::debug!("[Clipboard] Copied {} chars", text.len());
            true
        }
        Err(e) => {
            log::warn!("[Clipboard] Failed to copy: {}", e);
            false
        }
    }
}
