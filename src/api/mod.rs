//! Read-only JSON API over the mock dataset
//!
//! The dataset is generated once and shared immutably. The only mutable state
//! is the random source behind approval forecasts, guarded by a mutex that is
//! never held across an await point.

pub mod constants;
pub mod error_response;
pub mod handlers;
pub mod middleware;

use crate::service::MockDataService;
use axum::{middleware::from_fn, routing::get, Router};
use constants::paths;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use std::sync::Arc;

pub use error_response::{ApiError, ErrorResponse};

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct ApiState {
    pub dataset: Arc<MockDataService>,
    pub forecast_rng: Arc<Mutex<StdRng>>,
}

impl ApiState {
    pub fn new(dataset: MockDataService, forecast_rng: StdRng) -> Self {
        Self {
            dataset: Arc::new(dataset),
            forecast_rng: Arc::new(Mutex::new(forecast_rng)),
        }
    }
}

/// Build the API router with correlation and logging middleware applied
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route(paths::HEALTH, get(handlers::health))
        .route(paths::CANDIDATES, get(handlers::candidates))
        .route(paths::TOPICS, get(handlers::topics))
        .route(paths::POSTS, get(handlers::posts))
        .route(paths::SENTIMENT_OVER_TIME, get(handlers::sentiment_over_time))
        .route(paths::TOPIC_TRENDS, get(handlers::topic_trends))
        .route(paths::ELECTION_PREDICTION, get(handlers::election_prediction))
        .route(paths::APPROVAL_PREDICTIONS, get(handlers::approval_predictions))
        .route(paths::SUMMARY, get(handlers::summary))
        .with_state(state)
        .layer(from_fn(middleware::logging_middleware))
        .layer(from_fn(middleware::request_id_middleware))
}
