use anyhow::{anyhow, Result};
use eframe::egui;
use mockview::config::AppConfig;
use mockview::ui::MockviewApp;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mockview=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mockview");

    let config = AppConfig::discover().inspect_err(|e| error!("[CONFIG] {}", e.user_message()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 820.0])
            .with_min_inner_size([360.0, 560.0])
            .with_title("Mockview"),
        ..Default::default()
    };

    eframe::run_native(
        "Mockview",
        options,
        Box::new(|cc| Ok(Box::new(MockviewApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("eframe error: {}", e))
}
