use crate::api::{self, ApiState};
use crate::config::Settings;
use crate::generation::MockDataGenerator;
use crate::infrastructure::log_messages::{application, dataset};
use crate::service::MockDataService;
use crate::Result;
use axum::Router;
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    state: ApiState,
}

impl Application {
    #[instrument]
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        Self::with_settings(settings)
    }

    /// Generate the dataset described by `settings`.
    ///
    /// With a configured seed the forecast source continues the generator's
    /// stream, so a restart replays the same random draws and forecast
    /// sequence. Timestamps and dates still follow the startup clock.
    #[instrument(skip(settings))]
    pub fn with_settings(settings: Settings) -> Result<Self> {
        let shape = settings.dataset_shape()?;

        let state = match settings.generation.seed {
            Some(seed) => {
                info!(seed, "{}", dataset::SEEDED);
                let mut generator = MockDataGenerator::<StdRng>::seeded(seed, Utc::now());
                let dataset = MockDataService::initialize(&mut generator, shape);
                ApiState::new(dataset, generator.into_rng())
            }
            None => {
                info!("{}", dataset::ENTROPY);
                ApiState::new(MockDataService::from_entropy(shape), StdRng::from_entropy())
            }
        };

        Ok(Self { settings, state })
    }

    pub fn router(&self) -> Router {
        api::router(self.state.clone())
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let address = self.settings.bind_address();
        let listener = TcpListener::bind(&address).await?;

        info!(
            address = %listener.local_addr()?,
            environment = %self.settings.application.environment,
            "{}",
            application::LISTENING
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("{}", application::STOPPED);
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &ApiState {
        &self.state
    }
}

async fn shutdown_signal() {
    // An error here means no handler could be installed; keep serving.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
