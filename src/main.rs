mod api;
mod app;
mod config;
mod constants;
mod data;
mod models;
mod screens;
mod services;
mod state;
mod ui_components;
mod utils;

use app::DirectoryApp;
use config::AppConfig;
use eframe::egui;

// App version and metadata
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "GuiaRS";
const APP_DESCRIPTION: &str = "Local Services Directory";

const APP_HEIGHT: f32 = 820.0;
const APP_WIDTH: f32 = 1100.0;

fn main() -> Result<(), eframe::Error> {
    // Initialize logger with default settings
    // Set RUST_LOG=debug for verbose output, RUST_LOG=info for normal logs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Warn)
        .filter_module("naga", log::LevelFilter::Warn)
        .init();

    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    let config = AppConfig::from_env();
    log::info!(
        "[Main] Catalog source: {}",
        config.catalog_source.describe()
    );

    let cookies = DirectoryApp::create_cookie_store(&config);
    let mut app = DirectoryApp::new(config, cookies);
    app.start_catalog_load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{} - {}",
                APP_NAME, APP_VERSION, APP_DESCRIPTION
            ))
            .with_inner_size([APP_WIDTH, APP_HEIGHT])
            .with_min_inner_size([420.0, 480.0])
            .with_resizable(true)
            .with_decorations(true)
            .with_icon(load_icon()),
        persist_window: true, // Remember window position
        ..Default::default()
    };

    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

/// Load app icon - gold background with a white map pin
fn load_icon() -> egui::IconData {
    let (icon_width, icon_height) = (64, 64);
    let mut pixels = vec![0u8; icon_width * icon_height * 4];
    let (r, g, b) = constants::ACCENT_COLOR_RGB;

    // Gold gradient background
    for y in 0..icon_height {
        for x in 0..icon_width {
            let idx = (y * icon_width + x) * 4;
            let brightness = 1.0 - (y as f32 / icon_height as f32) * 0.3;

            pixels[idx] = (r as f32 * brightness) as u8; // R
            pixels[idx + 1] = (g as f32 * brightness) as u8; // G
            pixels[idx + 2] = (b as f32 * brightness) as u8; // B
            pixels[idx + 3] = 255; // A
        }
    }

    let center_x = icon_width as i32 / 2;
    let head_y = 24;

    // Pin head (circle) tapering to a point
    for y in 0..icon_height {
        for x in 0..icon_width {
            let dx = x as i32 - center_x;
            let dy = y as i32 - head_y;
            let in_head = dx * dx + dy * dy < 14 * 14;
            let in_tail = y as i32 >= head_y && y < 54 && dx.abs() < (54 - y as i32) / 2;
            let in_hole = dx * dx + dy * dy < 5 * 5;

            if (in_head || in_tail) && !in_hole {
                let idx = (y * icon_width + x) * 4;
                pixels[idx] = 255; // R
                pixels[idx + 1] = 255; // G
                pixels[idx + 2] = 255; // B
                pixels[idx + 3] = 255; // A
            }
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_width as u32,
        height: icon_height as u32,
    }
}
