//! TwinSight - demo dashboard for simulated device telemetry.
//!
//! All readings are synthesized locally by the simulation engine; the
//! dashboard demonstrates the chart renderer and update pipeline
//! without any hardware attached.

use iced::application;

use twinsight::TwinSight;
use twinsight_common::{DashboardConfig, init_tracing, load_config};

/// Optional configuration file looked up in the working directory.
const CONFIG_FILE: &str = "twinsight.json5";

fn main() -> anyhow::Result<()> {
    let config: DashboardConfig = if std::path::Path::new(CONFIG_FILE).exists() {
        load_config(CONFIG_FILE)?
    } else {
        DashboardConfig::default()
    };

    init_tracing(&config.logging)?;

    tracing::info!("Starting TwinSight");

    application(
        move || TwinSight::with_config(&config),
        TwinSight::update,
        TwinSight::view,
    )
    .title("TwinSight")
    .subscription(TwinSight::subscription)
    .theme(TwinSight::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
