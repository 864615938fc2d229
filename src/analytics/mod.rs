//! Statistics derived from the mock dataset
//!
//! Nothing here mutates the dataset; every view is recomputed from the
//! immutable bundle on demand.

pub mod filter;
pub mod summary;

pub use filter::{PostFilter, TimeRange};
pub use summary::{DashboardSummary, SentimentBreakdown};
