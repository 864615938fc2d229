//! Infrastructure layer for Pulse Seer
//!
//! Process-wide concerns that sit outside the dataset itself.

pub mod log_messages;
pub mod telemetry;
