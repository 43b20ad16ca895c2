// Booking Calendar
// Desktop entry point

use anyhow::{anyhow, Context, Result};
use booking_calendar::services::database::Database;
use booking_calendar::services::settings::{default_config_path, SettingsService};
use booking_calendar::ui_egui::BookingCalendarApp;

fn main() -> Result<()> {
    env_logger::init();

    log::info!("Starting Booking Calendar");

    let settings_service = SettingsService::new(default_config_path());
    let settings = settings_service
        .load()
        .with_context(|| format!("Failed to load {}", settings_service.path().display()))?;

    let database_path = SettingsService::database_path(&settings);
    let database = Database::open_and_initialize(&database_path)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Booking Calendar")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Booking Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(BookingCalendarApp::new(cc, database, settings)))),
    )
    .map_err(|e| anyhow!("Failed to run the calendar window: {}", e))
}
