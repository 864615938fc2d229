//! Sentiment scores and their categorical labels

use crate::domain::constants::sentiment::{
    MAX_SCORE, MIN_SCORE, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment score (-1.0 to 1.0)
///
/// Negative values lean negative, positive values lean positive. The score is
/// the single source of truth; the categorical label is always derived from it.
#[nutype(
    validate(finite, greater_or_equal = -1.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct SentimentScore(f64);

impl SentimentScore {
    /// Neutral score (0.0)
    pub fn neutral() -> Self {
        Self::try_new(0.0).expect("0.0 is a valid sentiment score")
    }

    /// Clamp an arbitrary value into range, mapping NaN to neutral
    pub fn saturating(value: f64) -> Self {
        Self::try_new(value.clamp(MIN_SCORE, MAX_SCORE)).unwrap_or_else(|_| Self::neutral())
    }

    /// Category of this score
    pub fn category(&self) -> SentimentCategory {
        categorize(self.into_inner())
    }
}

/// Categorical sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Categorize a raw score.
///
/// Both thresholds are exclusive: exactly 0.2 and exactly -0.2 are neutral.
pub fn categorize(score: f64) -> SentimentCategory {
    if score > POSITIVE_THRESHOLD {
        SentimentCategory::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

/// Round to two decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
