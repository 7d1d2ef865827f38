mod domain;
mod infrastructure;
mod presentation;

use domain::settings::SettingsService;
use eframe::egui;
use presentation::app::TessenApp;
use presentation::screen::TITLE;

fn main() -> anyhow::Result<()> {
    let settings = SettingsService::new()?;

    let _logging_guard = infrastructure::logging::init_logger(&settings.get().log_settings)
        .map_err(|e| eprintln!("Failed to initialize logging: {}", e))
        .ok();

    tracing::info!("Starting {} (settings: {:?})", TITLE, settings.path());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.get().window_width, settings.get().window_height])
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(TessenApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("UI terminated with error: {}", e))?;

    tracing::info!("Shutting down");
    Ok(())
}
