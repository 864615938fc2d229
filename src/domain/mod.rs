//! Domain types for Pulse Seer
//!
//! This module contains the types that describe candidates, topics, posts and
//! the derived series, following type-driven development principles: scores,
//! ratings and generation sizes are validated newtypes.

pub mod constants;
pub mod entities;
pub mod params;
pub mod political;
pub mod post;
pub mod prediction;
pub mod seed_data;
pub mod sentiment;
pub mod time_series;

pub use entities::*;
pub use params::*;
pub use political::*;
pub use post::*;
pub use prediction::*;
pub use sentiment::*;
pub use time_series::*;
