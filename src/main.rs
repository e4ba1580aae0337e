// Month Calendar Application
// Main entry point

use anyhow::{anyhow, Context, Result};
use month_calendar::models::settings::Settings;
use month_calendar::services::settings::SettingsService;
use month_calendar::ui_egui::CalendarApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Calendar");

    let settings = load_settings().unwrap_or_else(|err| {
        log::warn!("{:#}; using default settings", err);
        Settings::default()
    });
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Calendar")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar",
        native_options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings)))),
    )
    .map_err(|err| anyhow!("failed to launch calendar window: {err}"))?;

    Ok(())
}

/// Settings from the config file; a missing file yields the defaults
fn load_settings() -> Result<Settings> {
    SettingsService::from_environment()
        .context("Failed to locate the config file")?
        .load_or_init()
}
