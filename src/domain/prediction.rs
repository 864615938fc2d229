//! Election and approval "predictions"
//!
//! Neither is a statistical model. The election figures are shipped constants
//! and approval forecasts perturb current ratings with fresh random draws.

use crate::domain::{
    constants::approval::{CONFIDENCE_FLOOR, CONFIDENCE_SPAN, MAX_DELTA},
    entities::Candidate,
    political::Party,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence label attached to the election prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionConfidence {
    Low,
    Moderate,
    High,
}

impl fmt::Display for PredictionConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Aggregate vote-share prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionPrediction {
    pub democrat: f64,
    pub republican: f64,
    pub independent: f64,
    /// Gap between the two leading shares
    pub margin: f64,
    pub confidence: PredictionConfidence,
    /// Fixed when the dataset is built, not refreshed per read
    pub last_updated: DateTime<Utc>,
}

/// Per-candidate approval forecast, recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalPrediction {
    pub id: String,
    pub name: String,
    pub party: Party,
    pub current: f64,
    /// `current` plus a delta drawn from [-5, 5)
    pub predicted: f64,
    /// Drawn from [65, 95)
    pub confidence: f64,
}

/// Forecast approval for each candidate, preserving input order.
///
/// Not memoized: every call consumes fresh draws from `rng`.
pub fn forecast_approval<R: Rng + ?Sized>(
    candidates: &[Candidate],
    rng: &mut R,
) -> Vec<ApprovalPrediction> {
    candidates
        .iter()
        .map(|candidate| {
            let current = candidate.approval_rating.into_inner();
            let delta = rng.gen::<f64>() * (2.0 * MAX_DELTA) - MAX_DELTA;
            let confidence = rng.gen::<f64>() * CONFIDENCE_SPAN + CONFIDENCE_FLOOR;

            ApprovalPrediction {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                party: candidate.party,
                current,
                predicted: current + delta,
                confidence,
            }
        })
        .collect()
}
