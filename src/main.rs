use coin_tracker::{
    components::tracker::PriceTracker,
    config::{port_from_env, server::LOG_LEVEL_VAR, TrackerConfig},
    controller::{DisplayState, RefreshCommand, RefreshController},
    server::run_server,
};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{error::Error, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);

    SimpleLogger::new()
        .with_colors(true)
        .with_level(level)
        .init()?;

    let config = TrackerConfig::from_env()?;
    let port = port_from_env()?;

    info!(
        "tracking {} assets in {} from {}",
        config.assets.len(),
        config.currency.label(),
        config.endpoint
    );

    let controller = Arc::new(RefreshController::new(PriceTracker::new(config)));

    match controller.handle(RefreshCommand::Refresh).await {
        DisplayState::Ready { table } => info!("current prices:\n{}", table),
        DisplayState::Failed { message } => error!("initial refresh failed: {}", message),
        DisplayState::Pending => {}
    }

    run_server(controller, port).await?;

    Ok(())
}
