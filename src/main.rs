mod config;
mod engine;
mod error;
mod network;
mod types;
mod ui;
mod utils;

use std::env;
use std::process;

use config::Settings;
use eframe::egui;
use network::client::{self, ApiClient};
use ui::app::App;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional API base URL from the command line, e.g. http://192.168.1.20:5000
    let api_base = env::args().nth(1);
    let settings = match Settings::load(api_base) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}; falling back to default settings");
            Settings::default()
        }
    };

    let api = match ApiClient::new(&settings.api_base) {
        Ok(api) => api,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Usage: pinball_kiosk [http://api-host:port]");
            process::exit(1);
        }
    };
    log::info!("Using leaderboard API at {}", api.base());

    match api.health_blocking() {
        Ok(health) if health.status == "healthy" => log::info!(
            "API health: {} (database: {})",
            health.status,
            health.database.as_deref().unwrap_or("unknown")
        ),
        Ok(health) => log::warn!(
            "API unhealthy: {}",
            health.error.as_deref().unwrap_or(&health.status)
        ),
        Err(e) => log::warn!("API health check failed: {e}"),
    }
    let config = client::load_kiosk_config(&api);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.bar_name.clone())
            .with_inner_size([1280.0, 720.0])
            .with_fullscreen(settings.fullscreen),
        ..Default::default()
    };
    eframe::run_native(
        "Pinball Leaderboard Kiosk",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, settings, api, config)))),
    )
}
