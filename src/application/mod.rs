//! Application wiring
//!
//! Turns loaded settings into a generated dataset and a running HTTP server.

pub mod app;

pub use app::Application;
