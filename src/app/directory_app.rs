use eframe::egui;
use log::{error, info, warn};
use std::sync::mpsc::{channel, TryRecvError};
use std::time::Duration;

use crate::config::AppConfig;
use crate::screens::directory::DirectoryAction;
use crate::services::{
    rating, CookieStore, MemoryCookieStore, RateOutcome, RatedSet, SqliteCookieStore, Stars,
};
use crate::state::{BackgroundTasks, ContentState, UIState};
use crate::ui_components::colors;

pub struct DirectoryApp {
    // UI state (toasts, scroll requests)
    pub ui: UIState,

    // Content state (catalog, filter, search, load status)
    pub content: ContentState,

    // Background tasks (receiver for the catalog load)
    pub tasks: BackgroundTasks,

    // Rated-services cookie lives here
    pub cookies: Box<dyn CookieStore>,

    // Rated ids as last read from the cookie store
    rated: RatedSet,

    config: AppConfig,
}

impl DirectoryApp {
    pub fn new(config: AppConfig, cookies: Box<dyn CookieStore>) -> Self {
        let rated = RatedSet::load(cookies.as_ref());
        Self {
            ui: UIState::default(),
            content: ContentState::default(),
            tasks: BackgroundTasks::default(),
            cookies,
            rated,
            config,
        }
    }

    /// Open the configured cookie store, falling back to memory on failure
    pub fn create_cookie_store(config: &AppConfig) -> Box<dyn CookieStore> {
        let Some(path) = &config.cookie_db_path else {
            info!("[Cookies] Using in-memory cookie store");
            return Box::new(MemoryCookieStore::new());
        };

        match SqliteCookieStore::open(path) {
            Ok(store) => {
                info!("[Cookies] Using cookie store at {}", path.display());
                Box::new(store)
            }
            Err(e) => {
                warn!(
                    "[Cookies] Failed to open {}: {} - ratings will not survive restart",
                    path.display(),
                    e
                );
                Box::new(MemoryCookieStore::new())
            }
        }
    }

    /// Kick off the catalog load in background
    pub fn start_catalog_load(&mut self) {
        let source = self.config.catalog_source.clone();
        info!("[Catalog] Loading services from {}", source.describe());

        self.content.status = crate::state::CatalogStatus::Loading;
        let (tx, rx) = channel();
        self.tasks.catalog_rx = Some(rx);

        crate::utils::async_helper::spawn_and_send(
            move || {
                Box::pin(async move {
                    crate::api::load_catalog(&source)
                        .await
                        .map_err(|e| e.to_string())
                })
            },
            tx,
        );
    }

    /// Check for catalog load completion from background tasks
    pub fn check_catalog_load(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.tasks.catalog_rx else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err("catalog task ended unexpectedly".to_string()),
        };
        self.tasks.catalog_rx = None;

        match result {
            Ok(services) => {
                info!("[Catalog] {} services ready", services.len());
                self.content.set_catalog(services);
            }
            Err(e) => {
                error!("[Catalog] Error loading services data: {}", e);
                self.content.set_load_failed(e);
            }
        }

        ctx.request_repaint();
    }

    /// Rated-set used for painting; refreshed after each rating
    pub fn rated_set(&self) -> &RatedSet {
        &self.rated
    }

    /// Rate a service and show the appropriate toast
    pub fn rate_service(&mut self, service_id: u64, stars: Stars) -> RateOutcome {
        let outcome = rating::rate(
            &mut self.content.catalog,
            self.cookies.as_mut(),
            service_id,
            stars,
        );
        if matches!(outcome, RateOutcome::Rated { .. }) {
            self.rated = RatedSet::load(self.cookies.as_ref());
        }

        match &outcome {
            RateOutcome::Rated { average, .. } => {
                self.ui
                    .toast_manager
                    .show_success(&format!("Thanks for rating! New average {:.1}", average));
            }
            RateOutcome::AlreadyRated => {
                self.ui
                    .toast_manager
                    .show_error("You have already rated this service!");
            }
            RateOutcome::UnknownService => {}
        }

        outcome
    }

    /// Apply a user interaction collected while painting
    pub fn handle_action(&mut self, action: DirectoryAction) {
        match action {
            DirectoryAction::Rate(service_id, stars) => {
                self.rate_service(service_id, stars);
            }
            DirectoryAction::SelectCategory(filter) => {
                self.content.current_filter = filter;
            }
            DirectoryAction::CopyPhone(phone) => {
                if crate::utils::clipboard::copy_to_clipboard(&phone) {
                    self.ui.toast_manager.show_info("Phone number copied to clipboard");
                } else {
                    self.ui.toast_manager.show_error("Failed to copy phone number");
                }
            }
            DirectoryAction::OpenLink(url) => {
                if let Err(e) = webbrowser::open(&url) {
                    warn!("[Links] Failed to open {}: {}", url, e);
                    self.ui.toast_manager.show_error("Could not open link in browser");
                }
            }
            DirectoryAction::ScrollToAbout => self.ui.request_scroll_to_about(),
            DirectoryAction::RetryLoad => self.start_catalog_load(),
        }
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.ui.is_shutting_down {
            info!("[Main] Shutting down");
            self.ui.is_shutting_down = true;
            self.tasks.clear_all();
        }

        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(colors::TEXT_PRIMARY);
        visuals.panel_fill = colors::BG_MAIN;
        visuals.window_fill = colors::BG_CARD;
        visuals.extreme_bg_color = colors::BG_MAIN;
        ctx.set_visuals(visuals);

        // Check for catalog load (background task)
        self.check_catalog_load(ctx);

        crate::screens::directory::render_directory(self, ctx);

        // Render toasts on top of everything
        egui::Area::new(egui::Id::new("toast_area"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                self.ui.toast_manager.render(ui);
            });

        // Keep polling while loading or while toasts are fading out
        if self.tasks.has_active_tasks() || !self.ui.toast_manager.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
