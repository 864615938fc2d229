//! Pulse Seer - mock political sentiment data behind a dashboard API
//!
//! Generates a self-consistent dataset of candidates, topics, social media
//! posts, sentiment series, topic trends and predictions, then serves it as
//! read-only JSON.

pub mod analytics;
pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod generation;
pub mod infrastructure;
pub mod service;

pub use application::Application;
pub use error::{Error, Result};
pub use generation::MockDataGenerator;
pub use service::{DatasetShape, MockDataService};
