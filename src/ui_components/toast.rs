//! Toast notifications drawn at the bottom of the window
use super::colors;
use crate::constants::TOAST_DURATION_SECS;
use egui::{Color32, CornerRadius, RichText};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created: Instant,
}

pub struct ToastManager {
    pub toasts: Vec<Toast>,
    duration: Duration,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            duration: Duration::from_secs(TOAST_DURATION_SECS),
        }
    }

    pub fn show_info(&mut self, message: &str) {
        self.push(message, ToastKind::Info);
    }

    pub fn show_success(&mut self, message: &str) {
        self.push(message, ToastKind::Success);
    }

    pub fn show_error(&mut self, message: &str) {
        self.push(message, ToastKind::Error);
    }

    fn push(&mut self, message: &str, kind: ToastKind) {
        self.toasts.push(Toast {
            message: message.to_string(),
            kind,
            created: Instant::now(),
        });
    }

    /// Drop toasts older than the display duration
    pub fn prune(&mut self) {
        let duration = self.duration;
        self.toasts.retain(|t| t.created.elapsed() < duration);
    }

    pub fn render(&mut self, ui: &mut egui::Ui) {
        self.prune();

        for toast in &self.toasts {
            let fill = match toast.kind {
                ToastKind::Info => colors::TOAST_INFO,
                ToastKind::Success => colors::TOAST_SUCCESS,
                ToastKind::Error => colors::TOAST_ERROR,
            };

            egui::Frame::new()
                .fill(fill)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(egui::Margin::symmetric(16, 10))
                .show(ui, |ui| {
                    ui.label(RichText::new(&toast.message).size(14.0).color(Color32::WHITE));
                });
            ui.add_space(6.0);
        }
        ui.add_space(20.0);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}
