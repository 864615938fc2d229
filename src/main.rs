use anyhow::Result;
use pulse_seer::{
    config::Settings,
    infrastructure::{log_messages::application, telemetry},
    Application,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    telemetry::init(&settings.logging)?;
    info!("{}", application::CONFIG_LOADED);

    info!(
        environment = %settings.application.environment,
        "{}",
        application::STARTING
    );

    let app = Application::with_settings(settings)?;
    app.run().await?;

    Ok(())
}
